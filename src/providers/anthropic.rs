use super::Provider;
use crate::providers::message::ChatMessage;
use serde_json::{json, Value};

#[derive(Debug, Clone, Default)]
pub struct Anthropic;

impl Anthropic {
    const API_VERSION: &'static str = "2023-06-01";
    const MAX_TOKENS: u32 = 1024;
}

impl Provider for Anthropic {
    fn chat_endpoint(&self) -> &'static str {
        "/v1/messages"
    }

    fn chat_headers(&self, api_key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("x-api-key", api_key.to_string()),
            ("anthropic-version", Self::API_VERSION.to_string()),
        ]
    }

    fn build_chat_body(
        &self,
        model_id: &str,
        system: Option<&str>,
        messages: &[ChatMessage],
    ) -> Value {
        // Anthropic takes instructions as a top-level `system` field and
        // rejects unknown keys in message objects, so render role/content only.
        let rendered: Vec<Value> = messages
            .iter()
            .map(|m| json!({"role": m.role().to_string(), "content": m.content()}))
            .collect();

        let mut body = json!({
            "model": model_id,
            "max_tokens": Self::MAX_TOKENS,
            "messages": rendered,
            "stream": false,
        });
        if let Some(instructions) = system {
            body["system"] = json!(instructions);
        }
        body
    }

    fn parse_chat_content<'a>(&self, response: &'a Value) -> Option<&'a str> {
        response["content"][0]["text"].as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_uses_top_level_system_field() {
        let body = Anthropic.build_chat_body(
            "claude-3-5-haiku-latest",
            Some("You are a route expert."),
            &[ChatMessage::user("Which pass should I take?")],
        );

        assert_eq!(body["system"], "You are a route expert.");
        assert_eq!(body["max_tokens"], 1024);
        assert_eq!(body["messages"][0]["role"], "user");
        assert!(body["messages"][0].get("name").is_none());
    }

    #[test]
    fn test_content_parsing() {
        let response = json!({"content": [{"type": "text", "text": "Ala-Kul pass."}]});
        assert_eq!(Anthropic.parse_chat_content(&response), Some("Ala-Kul pass."));
    }
}
