use crate::args::Cli;
use crate::backend::HttpBackend;
use crate::config::ChatConfig;
use crate::session::run_chat;
use crate::ui::io_input::{with_input_source, StdinInputSource};
use clap::Parser;
use std::sync::Arc;

pub struct Application {
    config: ChatConfig,
}

impl Application {
    pub fn init() -> anyhow::Result<Application> {
        // Preload environment variables from .env file if it exists before parsing CLI args
        dotenvy::dotenv().ok();

        let cli = Cli::parse();

        Ok(Application {
            config: ChatConfig::setup(cli)?,
        })
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let backend = Arc::new(HttpBackend::new(self.config.model.clone()));
        with_input_source(StdinInputSource {}, run_chat(&self.config, backend)).await
    }
}
