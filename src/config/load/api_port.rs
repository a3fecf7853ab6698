use anyhow::{Context, Result};
use std::env;

const API_PORT_ENV_VAR: &str = "MODEL_API_PORT";

const DEFAULT_API_PORT: u16 = 443;

/// Loads the Model API port from the environment, defaulting to HTTPS.
pub(crate) fn load_api_port() -> Result<u16> {
    match env::var(API_PORT_ENV_VAR) {
        Ok(raw) => raw
            .trim()
            .parse::<u16>()
            .with_context(|| format!("Invalid {}: '{}'", API_PORT_ENV_VAR, raw)),
        Err(_) => Ok(DEFAULT_API_PORT),
    }
}
