//! Chat message types for the group conversation.
//!
//! A message is one turn of the shared history: a role, an optional speaker
//! name (set for persona turns), and the text content. The format serializes
//! to the JSON shape expected by OpenAI-compatible chat completion APIs.
//!
//! # Example
//!
//! ```
//! use trek_concierge::providers::message::ChatMessage;
//!
//! let user_msg = ChatMessage::user("Which routes do you recommend?");
//! let agent_msg = ChatMessage::agent("Concierge", "Let me bring in our experts.");
//!
//! // Serializes to: {"role": "user", "content": "Which routes do you recommend?"}
//! let json = serde_json::to_string(&user_msg).unwrap();
//! ```

use serde::{Deserialize, Serialize};

/// Role of a participant in the conversation.
///
/// Serializes to lowercase strings as expected by OpenAI-compatible APIs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatMessageRole {
    /// Instruction text injected ahead of the conversation.
    System,
    /// Message typed by the human user.
    User,
    /// Message generated by a persona.
    Assistant,
}

impl std::fmt::Display for ChatMessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatMessageRole::System => write!(f, "system"),
            ChatMessageRole::User => write!(f, "user"),
            ChatMessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single turn in the group conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message author.
    role: ChatMessageRole,
    /// Speaker name; set for persona turns, absent for user turns.
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// The text content of the message.
    pub(crate) content: String,
}

impl ChatMessage {
    /// Create a new user message.
    pub fn user<S: ToString>(content: S) -> ChatMessage {
        ChatMessage {
            role: ChatMessageRole::User,
            name: None,
            content: content.to_string(),
        }
    }

    /// Create a new assistant message with no attributed speaker.
    pub fn assistant<S: ToString>(content: S) -> ChatMessage {
        ChatMessage {
            role: ChatMessageRole::Assistant,
            name: None,
            content: content.to_string(),
        }
    }

    /// Create a new persona turn attributed to `name`.
    pub fn agent<N: ToString, S: ToString>(name: N, content: S) -> ChatMessage {
        ChatMessage {
            role: ChatMessageRole::Assistant,
            name: Some(name.to_string()),
            content: content.to_string(),
        }
    }

    /// Get the content of the message.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the role of the message.
    pub fn role(&self) -> ChatMessageRole {
        self.role
    }

    /// Get the speaker name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Render the turn as a transcript line, e.g. `Concierge: Welcome!`.
    /// User turns render with the literal speaker `user`.
    pub fn transcript_line(&self) -> String {
        format!("{}: {}", self.name.as_deref().unwrap_or("user"), self.content)
    }
}
