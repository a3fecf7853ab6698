//! The interactive session loop.
//!
//! Reads one user line at a time and runs a bounded group exchange for it.
//! The literal `exit` (case-insensitive), an empty line, or end of input
//! ends the session cleanly before any remote call is issued for that line.

use crate::backend::ChatBackend;
use crate::config::ChatConfig;
use crate::group::GroupChat;
use crate::personas::Roster;
use crate::ui::io_input::get_user_line;
use anyhow::{Context, Result};
use dialoguer::console::style;
use std::sync::Arc;
use tracing::info;

const EXIT_KEYWORD: &str = "exit";

pub async fn run_chat(config: &ChatConfig, backend: Arc<dyn ChatBackend>) -> Result<()> {
    loop {
        let Some(line) = get_user_line().context("failed to read user input")? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case(EXIT_KEYWORD) {
            break;
        }

        info!(target: "plain", "# user: '{}'", line);

        // Each question gets a fresh history, mirroring the bounded-exchange
        // ownership model: the history lives and dies with the exchange.
        let mut chat = GroupChat::new(
            Roster::travel_planning(),
            backend.clone(),
            config.session.max_rounds,
        );
        chat.add_user_message(line);

        let complete = chat.invoke().await.context("Group exchange failed")?;
        info!(target: "plain", "# IS COMPLETE: {}", complete);
    }

    info!(target: "plain", "\n{}", style("Session ended. Happy trails!").bold());
    Ok(())
}
