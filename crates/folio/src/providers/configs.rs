use serde::Deserialize;

pub const OPENROUTER_HOST: &str = "https://openrouter.ai/api";
pub const OPENROUTER_MODEL: &str = "deepseek/deepseek-r1:free";
pub const OPENROUTER_REFERER: &str = "http://localhost";
pub const OPENROUTER_TITLE: &str = "BySaad Portfolio";

pub const GEMINI_HOST: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

// Unified enum to wrap different provider configurations
#[derive(Debug, Clone)]
pub enum ProviderConfig {
    OpenRouter(OpenRouterProviderConfig),
    Gemini(GeminiProviderConfig),
}

/// Primary provider. A missing `api_key` is not a construction error; the
/// provider reports it on the first call so the chain can fall back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OpenRouterProviderConfig {
    #[serde(default = "default_openrouter_host")]
    pub host: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_openrouter_model")]
    pub model: String,
    #[serde(default = "default_openrouter_referer")]
    pub referer: String,
    #[serde(default = "default_openrouter_title")]
    pub title: String,
}

impl OpenRouterProviderConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            host: default_openrouter_host(),
            api_key,
            model: default_openrouter_model(),
            referer: default_openrouter_referer(),
            title: default_openrouter_title(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }
}

impl Default for OpenRouterProviderConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeminiProviderConfig {
    #[serde(default = "default_gemini_host")]
    pub host: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_gemini_model")]
    pub model: String,
}

impl GeminiProviderConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            host: default_gemini_host(),
            api_key,
            model: default_gemini_model(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }
}

impl Default for GeminiProviderConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Treat blank keys the same as absent ones
pub(crate) fn credential(api_key: &Option<String>) -> Option<&str> {
    api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
}

fn default_openrouter_host() -> String {
    OPENROUTER_HOST.to_string()
}

fn default_openrouter_model() -> String {
    OPENROUTER_MODEL.to_string()
}

fn default_openrouter_referer() -> String {
    OPENROUTER_REFERER.to_string()
}

fn default_openrouter_title() -> String {
    OPENROUTER_TITLE.to_string()
}

fn default_gemini_host() -> String {
    GEMINI_HOST.to_string()
}

fn default_gemini_model() -> String {
    GEMINI_MODEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OpenRouterProviderConfig::default();
        assert_eq!(config.host, OPENROUTER_HOST);
        assert_eq!(config.model, OPENROUTER_MODEL);
        assert_eq!(config.title, "BySaad Portfolio");
        assert!(config.api_key.is_none());

        let config = GeminiProviderConfig::new(Some("key".to_string())).with_host("http://mock");
        assert_eq!(config.host, "http://mock");
        assert_eq!(config.model, GEMINI_MODEL);
    }

    #[test]
    fn test_blank_credential_is_absent() {
        assert_eq!(credential(&None), None);
        assert_eq!(credential(&Some("   ".to_string())), None);
        assert_eq!(credential(&Some(" sk-1 ".to_string())), Some("sk-1"));
    }
}
