use crate::group::DEFAULT_MAX_ROUNDS;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Specify the model to use (prompted for if absent)
    #[arg(long)]
    pub(crate) model_id: Option<String>,

    /// Path to environment file (default: ./.env). Can also use APP_ENV_FILE.
    #[arg(
        long,
        value_hint = ValueHint::FilePath,
        default_value = ".env",
        env = "APP_ENV_FILE"
    )]
    pub(crate) env_file: PathBuf,

    /// Model API route for chat requests (optional - defaults to provider-specific endpoint)
    #[arg(long, env = "MODEL_CHAT_ROUTE")]
    pub(crate) chat_route: Option<String>,

    /// Hard cap on persona turns generated per user question
    #[arg(
        long,
        env = "MAX_CHAT_ROUNDS",
        default_value_t = DEFAULT_MAX_ROUNDS
    )]
    pub(crate) max_rounds: usize,
}
