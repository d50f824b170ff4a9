use async_trait::async_trait;

use crate::errors::ProviderResult;

/// Whether the caller will parse the completion as JSON
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Text,
    Json,
}

impl ResponseFormat {
    pub fn from_expects_json(expects_json: bool) -> Self {
        if expects_json {
            ResponseFormat::Json
        } else {
            ResponseFormat::Text
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, ResponseFormat::Json)
    }
}

/// Base trait for text generation providers (OpenRouter, Gemini, etc)
#[async_trait]
pub trait Provider: Send + Sync {
    /// Short human readable name used in logs
    fn name(&self) -> &str;

    /// Generate a completion for a single user prompt.
    ///
    /// Implementations fail before any network I/O when their credential is
    /// absent, and treat a response without usable text as a failure.
    async fn complete(&self, prompt: &str, format: ResponseFormat) -> ProviderResult<String>;

    /// Whether this provider is configured with an image-capable backend
    fn supports_images(&self) -> bool {
        false
    }
}
