use super::{render_history, NextSpeakerPolicy};
use crate::backend::ChatBackend;
use crate::personas::Roster;
use crate::providers::message::ChatMessage;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Prompt-based next-speaker selection.
///
/// Sends the rendered history with the turn-taking rules to the model and
/// parses the single-line answer as a persona name. An empty or unknown
/// answer falls back to the concierge; that is logged rather than silently
/// swallowed, since it usually means the model ignored the instructions.
pub struct PromptSelection {
    backend: Arc<dyn ChatBackend>,
    roster: Roster,
}

impl PromptSelection {
    pub fn new(backend: Arc<dyn ChatBackend>, roster: Roster) -> Self {
        Self { backend, roster }
    }

    fn render_prompt(&self, history: &[ChatMessage]) -> String {
        let names = self.roster.names();
        format!(
            "\
Determine which participant takes the next turn in a conversation based on the most recent participant.
State only the name of the participant to take the next turn.
No participant should take more than one turn in a row.

Always follow these rules when selecting the next participant:
- After user input, it is {concierge}'s turn.
- {concierge} will then decide whether to invoke {route_expert} and {traditions_expert}.
- Participants take turns sharing their perspectives.
- Ensure all participants have an opportunity to contribute.
- The conversation cycles through participants if necessary.

History:
{history}
",
            concierge = names[0],
            route_expert = names[1],
            traditions_expert = names[2],
            history = render_history(history),
        )
    }

    /// Resolve the raw model answer to a roster name, defaulting to the
    /// concierge when the answer is empty or matches no participant.
    fn parse_answer(&self, answer: &str) -> String {
        let candidate = answer.lines().next().unwrap_or("").trim();
        match self.roster.find(candidate) {
            Some(persona) => persona.name.to_string(),
            None => {
                warn!(
                    "Selection response {:?} names no known participant; defaulting to {}",
                    candidate,
                    self.roster.fallback().name
                );
                self.roster.fallback().name.to_string()
            }
        }
    }
}

#[async_trait]
impl NextSpeakerPolicy for PromptSelection {
    async fn select(&self, history: &[ChatMessage]) -> Result<String> {
        let prompt = ChatMessage::user(self.render_prompt(history));
        let answer = self
            .backend
            .complete(None, &[prompt])
            .await
            .context("Selection call failed")?;
        debug!("Selection response: {:?}", answer);
        Ok(self.parse_answer(&answer))
    }
}
