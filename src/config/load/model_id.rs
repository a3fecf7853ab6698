use anyhow::{bail, Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::env;
use std::io::IsTerminal;

const MODEL_ID_ENV_VAR: &str = "MODEL_ID";

const DEFAULT_MODEL_ID: &str = "gpt-4o-mini";

/// Loads the model ID from the environment or interactively prompts the user.
pub(crate) fn load_model_id() -> Result<String> {
    if let Ok(model_id) = env::var(MODEL_ID_ENV_VAR) {
        return Ok(model_id);
    }

    if !std::io::stdin().is_terminal() {
        bail!(
            "{} is not set and no TTY available to prompt. \
             Set it in the environment or pass --model-id.",
            MODEL_ID_ENV_VAR
        );
    }

    let model_id: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Model ID")
        .default(DEFAULT_MODEL_ID.to_string())
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Model ID cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .context("Failed to read model ID")?;

    Ok(model_id)
}
