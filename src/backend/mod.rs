//! Remote completion calls.
//!
//! The session treats the hosted model as an opaque text-in/text-out
//! capability: instructions plus history go in, one reply string comes out.
//! Everything that talks to the model goes through [`ChatBackend`] so tests
//! can substitute scripted implementations.

use crate::config::ModelConfig;
use crate::providers::message::ChatMessage;
use crate::providers::{ApiProvider, Provider};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, trace};

#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Request one completion for `messages`, optionally under `system`
    /// instructions. Returns the assistant's reply text.
    async fn complete(&self, system: Option<&str>, messages: &[ChatMessage]) -> Result<String>;
}

/// Backend that POSTs to a hosted chat-completion API over HTTPS.
///
/// No retry or backoff: a transport or parsing failure propagates up and
/// ends the session.
pub struct HttpBackend {
    client: Client,
    config: ModelConfig,
    provider: ApiProvider,
}

impl HttpBackend {
    pub fn new(config: ModelConfig) -> Self {
        let provider = ApiProvider::from_domain(&config.server.domain);
        debug!("Using provider: {:?}", provider);
        Self {
            client: Client::new(),
            config,
            provider,
        }
    }

    fn chat_url(&self) -> String {
        let route = self
            .config
            .chat_route
            .as_deref()
            .unwrap_or_else(|| self.provider.chat_endpoint());
        format!(
            "https://{}:{}{}",
            self.config.server.domain, self.config.server.port, route
        )
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn complete(&self, system: Option<&str>, messages: &[ChatMessage]) -> Result<String> {
        let body = self
            .provider
            .build_chat_body(&self.config.model_id, system, messages);
        trace!("Request body: {}", body);

        let mut request = self
            .client
            .post(self.chat_url())
            .header("content-type", "application/json");
        for (name, value) in self.provider.chat_headers(&self.config.api_key) {
            request = request.header(name, value);
        }

        let response = request
            .json(&body)
            .send()
            .await
            .context("Request to the model API failed")?
            .error_for_status()
            .context("Model API returned a non-success status")?;

        let payload = response
            .bytes()
            .await
            .context("Error reading response body")?;
        let parsed: Value =
            serde_json::from_slice(&payload).context("Error parsing the response")?;
        trace!(
            "Response: {}",
            serde_json::to_string_pretty(&parsed).context("Error pretty printing the response")?
        );

        let content = self
            .provider
            .parse_chat_content(&parsed)
            .context("Failed to parse assistant content from response")?;

        Ok(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ModelConfig, ServerConfig};

    fn model_config(domain: &str, route: Option<&str>) -> ModelConfig {
        ModelConfig::builder()
            .server(
                ServerConfig::builder()
                    .domain(domain.to_string())
                    .build()
                    .unwrap(),
            )
            .chat_route(route.map(String::from))
            .api_key("test-key")
            .model_id("test-model")
            .build()
            .unwrap()
    }

    #[test]
    fn test_chat_url_uses_provider_default_route() {
        let backend = HttpBackend::new(model_config("api.anthropic.com", None));
        assert_eq!(backend.chat_url(), "https://api.anthropic.com:443/v1/messages");
    }

    #[test]
    fn test_chat_url_prefers_configured_route() {
        let backend = HttpBackend::new(model_config("api.example.com", Some("/custom/chat")));
        assert_eq!(
            backend.chat_url(),
            "https://api.example.com:443/custom/chat"
        );
    }
}
