use super::Provider;

/// Fallback provider using OpenAI-compatible API format (the default)
#[derive(Debug, Clone, Default)]
pub struct Unknown;

impl Provider for Unknown {}
