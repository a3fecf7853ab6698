use super::{render_history, TerminationPolicy};
use crate::backend::ChatBackend;
use crate::providers::message::ChatMessage;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Prompt-based termination check.
///
/// The exchange stops only when the trimmed, lower-cased model answer equals
/// the literal `yes`. Anything else, including malformed answers, means
/// continue.
pub struct PromptTermination {
    backend: Arc<dyn ChatBackend>,
}

impl PromptTermination {
    const STOP_VERDICT: &'static str = "yes";

    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }

    fn render_prompt(history: &[ChatMessage]) -> String {
        format!(
            "\
Determine if the travel plan has been agreed upon by all participants. If so, respond with a single word: yes

History:
{history}
",
            history = render_history(history),
        )
    }
}

#[async_trait]
impl TerminationPolicy for PromptTermination {
    async fn should_stop(&self, history: &[ChatMessage]) -> Result<bool> {
        let prompt = ChatMessage::user(Self::render_prompt(history));
        let answer = self
            .backend
            .complete(None, &[prompt])
            .await
            .context("Termination call failed")?;
        debug!("Termination response: {:?}", answer);
        Ok(answer.trim().to_lowercase() == Self::STOP_VERDICT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedAnswerBackend(String);

    #[async_trait]
    impl ChatBackend for FixedAnswerBackend {
        async fn complete(
            &self,
            _system: Option<&str>,
            _messages: &[ChatMessage],
        ) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    async fn verdict(answer: &str) -> bool {
        let policy = PromptTermination::new(Arc::new(FixedAnswerBackend(answer.to_string())));
        policy
            .should_stop(&[ChatMessage::user("hello")])
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_exact_yes_stops() {
        assert!(verdict("yes").await);
    }

    #[tokio::test]
    async fn test_yes_is_trimmed_and_lowercased() {
        assert!(verdict("  YES \n").await);
        assert!(verdict("Yes").await);
    }

    #[tokio::test]
    async fn test_anything_else_continues() {
        assert!(!verdict("yes.").await);
        assert!(!verdict("no").await);
        assert!(!verdict("the plan is agreed, yes").await);
        assert!(!verdict("").await);
    }

    #[test]
    fn test_prompt_contains_history() {
        let history = vec![ChatMessage::agent("Concierge", "All set?")];
        let prompt = PromptTermination::render_prompt(&history);
        assert!(prompt.contains("Concierge: All set?"));
        assert!(prompt.contains("respond with a single word: yes"));
    }
}
