use anyhow::Context;
use dialoguer::console::style;
use std::io::stdin;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Input source trait for reading user questions.
/// Returning `None` ends the session.
pub trait InputSource: Send + 'static {
    fn next_line(&mut self) -> anyhow::Result<Option<String>>;
}

tokio::task_local! {
    static INPUT_CTX: Arc<Mutex<dyn InputSource>>;
}

/// Helper to run a future with an injected input source.
pub async fn with_input_source<S, F, R>(src: S, fut: F) -> R
where
    S: InputSource,
    F: std::future::Future<Output = R>,
{
    let arc: Arc<Mutex<dyn InputSource>> = Arc::new(Mutex::new(src));
    INPUT_CTX.scope(arc, fut).await
}

/// Read the next user line from the input source in context.
pub(crate) fn get_user_line() -> anyhow::Result<Option<String>> {
    INPUT_CTX
        .try_with(|arc| {
            let mut guard = arc.lock().unwrap();
            guard.next_line()
        })
        .map_err(|_| anyhow::anyhow!("No input source in context"))?
}

/// Standard input source that reads from stdin with a styled prompt.
pub struct StdinInputSource;

impl InputSource for StdinInputSource {
    fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        info!(
            target: "plain",
            "{} {}",
            style("💬 Ask a question").cyan().bold(),
            style("(type 'exit' to quit):").dim()
        );

        let mut line = String::new();
        let read = stdin()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            // EOF
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Vector-based input source for testing.
pub struct VecInputSource {
    buf: std::vec::IntoIter<String>,
}

impl VecInputSource {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            buf: lines.into_iter(),
        }
    }
}

impl InputSource for VecInputSource {
    fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        if let Some(line) = self.buf.next() {
            debug!("Providing input line: {}", line);
            return Ok(Some(line));
        }

        debug!("No more input lines available");
        Ok(None)
    }
}
