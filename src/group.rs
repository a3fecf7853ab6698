//! Bounded multi-agent exchange over a shared history.
//!
//! One [`GroupChat`] owns the conversation for a single user question: the
//! selection policy picks a persona, that persona's completion call appends a
//! turn, and the termination policy decides whether the exchange is done.
//! A hard round cap keeps a chatty model from looping on remote calls
//! forever.

use crate::backend::ChatBackend;
use crate::personas::{Persona, Roster};
use crate::providers::message::ChatMessage;
use crate::strategy::{NextSpeakerPolicy, PromptSelection, PromptTermination, TerminationPolicy};
use crate::ui::spinner::with_spinner_future;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const DEFAULT_MAX_ROUNDS: usize = 20;

pub struct GroupChat {
    roster: Roster,
    backend: Arc<dyn ChatBackend>,
    selection: Box<dyn NextSpeakerPolicy>,
    termination: Box<dyn TerminationPolicy>,
    history: Vec<ChatMessage>,
    max_rounds: usize,
}

impl GroupChat {
    /// Group chat with the prompt-based policies evaluated by `backend`.
    pub fn new(roster: Roster, backend: Arc<dyn ChatBackend>, max_rounds: usize) -> Self {
        let selection = Box::new(PromptSelection::new(backend.clone(), roster.clone()));
        let termination = Box::new(PromptTermination::new(backend.clone()));
        Self::with_policies(roster, backend, selection, termination, max_rounds)
    }

    /// Group chat with explicit policies; used to substitute rule-based or
    /// scripted implementations.
    pub fn with_policies(
        roster: Roster,
        backend: Arc<dyn ChatBackend>,
        selection: Box<dyn NextSpeakerPolicy>,
        termination: Box<dyn TerminationPolicy>,
        max_rounds: usize,
    ) -> Self {
        Self {
            roster,
            backend,
            selection,
            termination,
            history: Vec::new(),
            max_rounds,
        }
    }

    /// Append the user's question to the history.
    pub fn add_user_message(&mut self, content: &str) {
        self.history.push(ChatMessage::user(content));
    }

    /// The conversation so far. Append-only; one persona turn per round.
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Run the bounded exchange: select a speaker, generate and print its
    /// turn, check for termination; repeat until the termination policy
    /// signals stop or `max_rounds` turns have been appended.
    ///
    /// Returns `true` when the termination policy (not the round cap) ended
    /// the exchange.
    pub async fn invoke(&mut self) -> Result<bool> {
        let mut complete = false;

        for round in 0..self.max_rounds {
            let selected = self
                .selection
                .select(&self.history)
                .await
                .context("Next-speaker selection failed")?;
            let persona = match self.roster.find(&selected) {
                Some(persona) => *persona,
                None => {
                    warn!(
                        "Selected speaker {:?} is not in the roster; defaulting to {}",
                        selected,
                        self.roster.fallback().name
                    );
                    *self.roster.fallback()
                }
            };
            debug!(round, speaker = persona.name, "generating next turn");

            let view = self.persona_view(&persona);
            let reply = with_spinner_future(
                format!("{} is thinking...", persona.name),
                self.backend.complete(Some(persona.instructions), &view),
            )
            .await
            .with_context(|| format!("Completion call for {} failed", persona.name))?;

            let turn = ChatMessage::agent(persona.name, reply);
            info!(target: "plain", "# {} - {}: '{}'", turn.role(), persona.name, turn.content());
            self.history.push(turn);

            if self
                .termination
                .should_stop(&self.history)
                .await
                .context("Termination check failed")?
            {
                complete = true;
                break;
            }
        }

        Ok(complete)
    }

    /// Project the shared history into the message sequence one persona sees:
    /// its own past turns as assistant messages, everything else as user
    /// messages (other personas' turns keep their speaker prefix).
    fn persona_view(&self, persona: &Persona) -> Vec<ChatMessage> {
        self.history
            .iter()
            .map(|m| match m.name() {
                Some(name) if name == persona.name => ChatMessage::assistant(m.content()),
                Some(_) => ChatMessage::user(m.transcript_line()),
                None => ChatMessage::user(m.content()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::personas::{CONCIERGE_NAME, ROUTE_EXPERT_NAME};
    use crate::providers::message::ChatMessageRole;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend that replies with a numbered line per call.
    struct CountingBackend {
        calls: AtomicUsize,
    }

    impl CountingBackend {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ChatBackend for CountingBackend {
        async fn complete(
            &self,
            _system: Option<&str>,
            _messages: &[ChatMessage],
        ) -> Result<String> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("reply {}", n))
        }
    }

    /// Always selects the same speaker name.
    struct FixedSpeaker(&'static str);

    #[async_trait]
    impl NextSpeakerPolicy for FixedSpeaker {
        async fn select(&self, _history: &[ChatMessage]) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    /// Stops once the history holds at least this many turns.
    struct StopAtLen(usize);

    #[async_trait]
    impl TerminationPolicy for StopAtLen {
        async fn should_stop(&self, history: &[ChatMessage]) -> Result<bool> {
            Ok(history.len() >= self.0)
        }
    }

    fn chat(
        speaker: &'static str,
        stop_at_len: usize,
        max_rounds: usize,
    ) -> (GroupChat, Arc<CountingBackend>) {
        let backend = CountingBackend::new();
        let chat = GroupChat::with_policies(
            Roster::travel_planning(),
            backend.clone(),
            Box::new(FixedSpeaker(speaker)),
            Box::new(StopAtLen(stop_at_len)),
            max_rounds,
        );
        (chat, backend)
    }

    #[tokio::test]
    async fn test_round_cap_bounds_the_exchange() {
        let (mut chat, backend) = chat(CONCIERGE_NAME, usize::MAX, DEFAULT_MAX_ROUNDS);
        chat.add_user_message("hello");

        let complete = chat.invoke().await.unwrap();

        assert!(!complete, "round cap exhaustion must not count as completion");
        // user turn + exactly max_rounds persona turns
        assert_eq!(chat.history().len(), 1 + DEFAULT_MAX_ROUNDS);
        assert_eq!(backend.calls.load(Ordering::SeqCst), DEFAULT_MAX_ROUNDS);
    }

    #[tokio::test]
    async fn test_termination_verdict_ends_exchange_early() {
        // stop once history holds the user turn plus two persona turns
        let (mut chat, _) = chat(ROUTE_EXPERT_NAME, 3, DEFAULT_MAX_ROUNDS);
        chat.add_user_message("hello");

        let complete = chat.invoke().await.unwrap();

        assert!(complete);
        assert_eq!(chat.history().len(), 3);
    }

    #[tokio::test]
    async fn test_one_persona_turn_per_round_in_order() {
        let (mut chat, _) = chat(ROUTE_EXPERT_NAME, 4, DEFAULT_MAX_ROUNDS);
        chat.add_user_message("hello");
        chat.invoke().await.unwrap();

        let history = chat.history();
        assert_eq!(history[0].role(), ChatMessageRole::User);
        for (i, turn) in history[1..].iter().enumerate() {
            assert_eq!(turn.role(), ChatMessageRole::Assistant);
            assert_eq!(turn.name(), Some(ROUTE_EXPERT_NAME));
            assert_eq!(turn.content(), format!("reply {}", i));
        }
    }

    #[tokio::test]
    async fn test_unknown_speaker_defaults_to_concierge() {
        let (mut chat, _) = chat("SpaceExpert", 2, DEFAULT_MAX_ROUNDS);
        chat.add_user_message("hello");
        chat.invoke().await.unwrap();

        assert_eq!(chat.history()[1].name(), Some(CONCIERGE_NAME));
    }

    #[tokio::test]
    async fn test_persona_view_maps_roles() {
        let (mut chat, _) = chat(CONCIERGE_NAME, usize::MAX, 0);
        chat.add_user_message("hello");
        chat.history.push(ChatMessage::agent(CONCIERGE_NAME, "Welcome!"));
        chat.history.push(ChatMessage::agent(ROUTE_EXPERT_NAME, "Try Ala-Kul."));

        let concierge = *chat.roster.find(CONCIERGE_NAME).unwrap();
        let view = chat.persona_view(&concierge);

        assert_eq!(view[0].role(), ChatMessageRole::User);
        assert_eq!(view[0].content(), "hello");
        assert_eq!(view[1].role(), ChatMessageRole::Assistant);
        assert_eq!(view[1].content(), "Welcome!");
        assert_eq!(view[2].role(), ChatMessageRole::User);
        assert_eq!(view[2].content(), "KyrgyzstanRouteExpert: Try Ala-Kul.");
    }
}
