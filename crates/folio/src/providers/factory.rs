use super::{
    base::Provider, configs::ProviderConfig, gemini::GeminiProvider,
    openrouter::OpenRouterProvider,
};
use crate::errors::ProviderResult;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Providers in the order the default chain attempts them
#[derive(EnumIter, Display, IntoStaticStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    OpenRouter,
    Gemini,
}

impl ProviderType {
    /// Name the provider reports in logs and errors
    pub fn name(self) -> &'static str {
        self.into()
    }
}

pub fn get_provider(config: ProviderConfig) -> ProviderResult<Box<dyn Provider>> {
    match config {
        ProviderConfig::OpenRouter(openrouter_config) => {
            Ok(Box::new(OpenRouterProvider::new(openrouter_config)?))
        }
        ProviderConfig::Gemini(gemini_config) => Ok(Box::new(GeminiProvider::new(gemini_config)?)),
    }
}
