use reqwest::StatusCode;
use thiserror::Error;

/// Message surfaced to every caller once the provider chain is exhausted
pub const UNAVAILABLE_MESSAGE: &str = "AI Service Unavailable - Check API Key";

/// Failure of a single provider attempt. The orchestrator logs these and
/// moves on to the next provider; they never reach the tool callers.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{0} API key missing")]
    MissingCredential(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed: {status}\nBody: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Could not decode response: {0}")]
    Decode(String),

    #[error("{0} returned empty content")]
    EmptyContent(String),
}

/// Failure of the orchestrator as a whole
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Prompt must not be empty")]
    EmptyPrompt,

    #[error("AI Service Unavailable - Check API Key")]
    Unavailable,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Build(#[from] config::ConfigError),
}

pub type ProviderResult<T> = Result<T, ProviderError>;
