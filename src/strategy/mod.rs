//! Next-speaker and termination policies.
//!
//! Both decisions are delegated to the hosted model: a template is rendered
//! with the conversation so far, sent as a single prompt, and the short text
//! answer is parsed. The traits keep the group loop independent of that
//! choice so rule-based implementations can be substituted.

mod selection;
mod termination;

pub use selection::PromptSelection;
pub use termination::PromptTermination;

use crate::providers::message::ChatMessage;
use anyhow::Result;
use async_trait::async_trait;

/// Decides which persona speaks next given the history so far.
#[async_trait]
pub trait NextSpeakerPolicy: Send + Sync {
    async fn select(&self, history: &[ChatMessage]) -> Result<String>;
}

/// Decides whether the multi-turn exchange should stop.
#[async_trait]
pub trait TerminationPolicy: Send + Sync {
    async fn should_stop(&self, history: &[ChatMessage]) -> Result<bool>;
}

/// Render the history as transcript lines for prompt templates.
pub(crate) fn render_history(history: &[ChatMessage]) -> String {
    history
        .iter()
        .map(ChatMessage::transcript_line)
        .collect::<Vec<_>>()
        .join("\n")
}
