use crate::configuration::Settings;
use crate::errors::{ProviderResult, ServiceError};
use crate::providers::base::{Provider, ResponseFormat};
use crate::providers::factory::get_provider;

/// Ordered provider chain with sequential fallback.
///
/// Each provider is tried once, in order. A failed attempt is logged and the
/// next provider is tried; only exhaustion of the whole chain is reported to
/// the caller, as a single [`ServiceError::Unavailable`].
pub struct Orchestrator {
    providers: Vec<Box<dyn Provider>>,
}

impl Orchestrator {
    pub fn new(providers: Vec<Box<dyn Provider>>) -> Self {
        Self { providers }
    }

    /// Build the default primary/secondary chain from loaded settings
    pub fn from_settings(settings: Settings) -> ProviderResult<Self> {
        let providers = settings
            .into_configs()
            .into_iter()
            .map(get_provider)
            .collect::<ProviderResult<Vec<_>>>()?;

        Ok(Self::new(providers))
    }

    /// Append a provider to the end of the chain
    pub fn with_provider(mut self, provider: Box<dyn Provider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn supports_images(&self) -> bool {
        self.providers.iter().any(|p| p.supports_images())
    }

    pub async fn generate(&self, prompt: &str, format: ResponseFormat) -> Result<String, ServiceError> {
        if prompt.trim().is_empty() {
            return Err(ServiceError::EmptyPrompt);
        }

        for provider in &self.providers {
            tracing::info!("Attempting provider '{}'", provider.name());

            match provider.complete(prompt, format).await {
                Ok(text) => {
                    tracing::info!("Provider '{}' succeeded ({} chars)", provider.name(), text.len());
                    return Ok(text);
                }
                Err(e) => {
                    tracing::warn!("Provider '{}' failed, falling back: {}", provider.name(), e);
                }
            }
        }

        tracing::error!("All AI providers failed");
        Err(ServiceError::Unavailable)
    }
}
