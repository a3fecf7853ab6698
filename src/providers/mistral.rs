use super::Provider;

/// Mistral speaks the OpenAI chat-completions dialect, so only the
/// detection matters; request and response shapes use the defaults.
#[derive(Debug, Clone, Default)]
pub struct Mistral;

impl Provider for Mistral {}
