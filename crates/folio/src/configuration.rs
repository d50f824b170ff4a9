use crate::errors::ConfigError;
use crate::providers::configs::{GeminiProviderConfig, OpenRouterProviderConfig, ProviderConfig};
use crate::providers::factory::ProviderType;
use config::{Config, Environment};
use serde::Deserialize;
use std::env;
use strum::IntoEnumIterator;

/// Plain credential variables, honoured underneath the prefixed ones
const OPENROUTER_KEY_VAR: &str = "OPENROUTER_API_KEY";
const GEMINI_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub openrouter: OpenRouterProviderConfig,
    #[serde(default)]
    pub gemini: GeminiProviderConfig,
}

impl Settings {
    /// Load settings from `.env`, the plain credential variables and
    /// `FOLIO_`-prefixed variables (`FOLIO_GEMINI__MODEL`, ...)
    pub fn new() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::load()
    }

    fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Ok(key) = env::var(OPENROUTER_KEY_VAR) {
            builder = builder.set_default("openrouter.api_key", key)?;
        }
        if let Ok(key) = env::var(GEMINI_KEY_VAR) {
            builder = builder.set_default("gemini.api_key", key)?;
        }

        let config = builder
            .add_source(
                Environment::with_prefix("FOLIO")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize().map_err(|err| {
            tracing::debug!("Configuration error: {:?}", &err);
            ConfigError::Build(err)
        })
    }

    /// Provider configurations in fallback order: primary first
    pub fn into_configs(self) -> Vec<ProviderConfig> {
        ProviderType::iter()
            .map(|provider_type| match provider_type {
                ProviderType::OpenRouter => ProviderConfig::OpenRouter(self.openrouter.clone()),
                ProviderType::Gemini => ProviderConfig::Gemini(self.gemini.clone()),
            })
            .collect()
    }
}
