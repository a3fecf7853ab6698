mod anthropic;
mod mistral;
mod unknown;

pub mod message;

pub use anthropic::Anthropic;
pub use mistral::Mistral;
pub use unknown::Unknown;

use enum_dispatch::enum_dispatch;
use message::ChatMessage;
use serde_json::{json, Value};

#[enum_dispatch]
pub trait Provider {
    /// Endpoint path for chat/message completions (default: OpenAI-style)
    fn chat_endpoint(&self) -> &'static str {
        "/v1/chat/completions"
    }

    /// Provider-specific headers for the chat endpoint (default: Bearer token)
    fn chat_headers(&self, api_key: &str) -> Vec<(&'static str, String)> {
        vec![("Authorization", format!("Bearer {}", api_key))]
    }

    /// Build the request body for a chat completion (default: OpenAI-style).
    /// `system` carries the persona instructions, when present.
    fn build_chat_body(
        &self,
        model_id: &str,
        system: Option<&str>,
        messages: &[ChatMessage],
    ) -> Value {
        let mut rendered: Vec<Value> = Vec::with_capacity(messages.len() + 1);
        if let Some(instructions) = system {
            rendered.push(json!({"role": "system", "content": instructions}));
        }
        rendered.extend(messages.iter().map(|m| {
            json!({"role": m.role().to_string(), "content": m.content()})
        }));

        json!({
            "model": model_id,
            "messages": rendered,
            "stream": false,
        })
    }

    /// Parse the assistant's content from the response (default: OpenAI-style)
    fn parse_chat_content<'a>(&self, response: &'a Value) -> Option<&'a str> {
        response["choices"][0]["message"]["content"].as_str()
    }
}

#[enum_dispatch(Provider)]
#[derive(Debug, Clone)]
pub enum ApiProvider {
    Unknown,
    Anthropic,
    Mistral,
}

impl ApiProvider {
    /// Detect the appropriate provider based on domain
    pub fn from_domain(domain: &str) -> Self {
        if domain.contains("anthropic") {
            Anthropic.into()
        } else if domain.contains("mistral") {
            Mistral.into()
        } else {
            Unknown.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_detection_by_domain() {
        assert!(matches!(
            ApiProvider::from_domain("api.anthropic.com"),
            ApiProvider::Anthropic(_)
        ));
        assert!(matches!(
            ApiProvider::from_domain("api.mistral.ai"),
            ApiProvider::Mistral(_)
        ));
        assert!(matches!(
            ApiProvider::from_domain("api.openai.com"),
            ApiProvider::Unknown(_)
        ));
    }

    #[test]
    fn test_default_body_prepends_system_message() {
        let provider = ApiProvider::from_domain("api.openai.com");
        let history = vec![ChatMessage::user("hello")];
        let body = provider.build_chat_body("gpt-4o-mini", Some("You are a concierge."), &history);

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "You are a concierge.");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "hello");
        assert_eq!(body["stream"], false);
    }

    #[test]
    fn test_default_body_without_system() {
        let provider = ApiProvider::from_domain("api.openai.com");
        let history = vec![ChatMessage::user("hello")];
        let body = provider.build_chat_body("gpt-4o-mini", None, &history);

        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["messages"][0]["role"], "user");
    }

    #[test]
    fn test_default_content_parsing() {
        let provider = ApiProvider::from_domain("api.openai.com");
        let response = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "Welcome!"}}]
        });
        assert_eq!(provider.parse_chat_content(&response), Some("Welcome!"));
    }
}
