use crate::args::Cli;
use crate::config::load::{
    api_domain::load_api_domain, api_key::load_api_key, api_port::load_api_port,
    model_id::load_model_id,
};
use crate::personas::Roster;
use anyhow::{Context, Result};
use derive_builder::Builder;
use dialoguer::console::style;
use tracing::info;

mod load;

#[derive(Builder, Clone)]
pub struct ServerConfig {
    /// The domain of the server hosting the model API
    #[builder(setter(into))]
    pub(crate) domain: String,
    /// The port of the server hosting the model API
    #[builder(setter(into), default = "443")]
    pub(crate) port: u16,
}

impl ServerConfig {
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

#[derive(Builder, Clone)]
pub struct ModelConfig {
    pub(crate) server: ServerConfig,
    /// Route for chat completion requests; provider default when absent
    #[builder(setter(into), default)]
    pub(crate) chat_route: Option<String>,
    /// The API key for authentication with the model API
    #[builder(setter(into))]
    pub(crate) api_key: String,
    /// The ID of the model
    #[builder(setter(into))]
    pub model_id: String,
}

impl ModelConfig {
    pub fn builder() -> ModelConfigBuilder {
        ModelConfigBuilder::default()
    }
}

#[derive(Builder, Clone)]
pub struct SessionConfig {
    /// Hard cap on persona turns generated per user question
    #[builder(default = "crate::group::DEFAULT_MAX_ROUNDS")]
    pub max_rounds: usize,
}

impl SessionConfig {
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }
}

#[derive(Builder, Clone)]
#[builder(pattern = "owned")]
pub struct ChatConfig {
    pub model: ModelConfig,
    pub session: SessionConfig,
}

impl ChatConfig {
    pub fn builder() -> ChatConfigBuilder {
        ChatConfigBuilder::default()
    }

    pub(crate) fn setup(args: Cli) -> Result<ChatConfig> {
        let _ = dotenvy::from_filename(&args.env_file);

        let api_domain = load_api_domain().context("Failed to load API domain")?;
        let api_key = load_api_key().context("Failed to load API key")?;
        let api_port = load_api_port().context("Failed to load API port")?;

        let model_id = match args.model_id {
            Some(id) => id,
            None => load_model_id().context("Failed to select model")?,
        };

        let server_config = ServerConfig::builder()
            .domain(api_domain)
            .port(api_port)
            .build()
            .context("Failed to build server configuration")?;

        let model_config = ModelConfig::builder()
            .server(server_config)
            .chat_route(args.chat_route)
            .api_key(api_key)
            .model_id(model_id)
            .build()
            .context("Failed to build model configuration")?;

        let session_config = SessionConfig::builder()
            .max_rounds(args.max_rounds)
            .build()
            .context("Failed to build session configuration")?;

        let config: Self = Self::builder()
            .model(model_config)
            .session(session_config)
            .build()?;

        config.print_summary();

        Ok(config)
    }

    fn print_summary(&self) {
        let check = || style("✔").green().bold();
        let kv = |k: &str, v: String| {
            format!(
                "{} {} {}",
                check(),
                style(k).bold(),
                style(format!("· {}", v)).dim()
            )
        };

        info!(target: "plain",
            "{}",
            kv(
                "Model API",
                format!("{}:{}", self.model.server.domain, self.model.server.port),
            )
        );
        info!(target: "plain", "{}", kv("Model ID", self.model.model_id.clone()));
        info!(target: "plain",
            "{}",
            kv(
                "Max Rounds per Question",
                format!("{}", self.session.max_rounds),
            )
        );
        info!(target: "plain",
            "{}",
            kv(
                "Participants",
                Roster::travel_planning().names().join(", "),
            )
        );

        info!(target: "plain",
            "{} {} {}\n",
            style("✔").blue(),
            style("Configuration complete").bold(),
            style("✔").blue()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default_port() {
        let server = ServerConfig::builder()
            .domain("api.example.com")
            .build()
            .unwrap();
        assert_eq!(server.port, 443);
    }

    #[test]
    fn test_session_config_default_round_cap() {
        let session = SessionConfig::builder().build().unwrap();
        assert_eq!(session.max_rounds, 20);
    }
}
