use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::{ProviderError, ProviderResult};
use crate::providers::base::{Provider, ResponseFormat};

/// A mock provider that returns pre-configured results for testing
pub struct MockProvider {
    name: String,
    responses: Arc<Mutex<Vec<ProviderResult<String>>>>,
    calls: Arc<AtomicUsize>,
    supports_images: bool,
}

impl MockProvider {
    /// Create a new mock provider with a sequence of results
    pub fn new(name: &str, responses: Vec<ProviderResult<String>>) -> Self {
        Self {
            name: name.to_string(),
            responses: Arc::new(Mutex::new(responses)),
            calls: Arc::new(AtomicUsize::new(0)),
            supports_images: false,
        }
    }

    /// A provider that always reports a missing credential
    pub fn unconfigured(name: &str) -> Self {
        Self::new(name, vec![])
    }

    pub fn with_images(mut self) -> Self {
        self.supports_images = true;
        self
    }

    /// Shared call counter, readable after the provider is boxed
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, _prompt: &str, _format: ResponseFormat) -> ProviderResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Err(ProviderError::MissingCredential(self.name.clone()))
        } else {
            responses.remove(0)
        }
    }

    fn supports_images(&self) -> bool {
        self.supports_images
    }
}
