use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::base::{Provider, ResponseFormat};
use super::configs::{credential, GeminiProviderConfig};
use super::factory::ProviderType;
use super::utils::{gemini_response_text, response_json};
use crate::errors::{ProviderError, ProviderResult};

pub struct GeminiProvider {
    client: Client,
    config: GeminiProviderConfig,
}

impl GeminiProvider {
    pub fn new(config: GeminiProviderConfig) -> ProviderResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    fn payload(prompt: &str, format: ResponseFormat) -> Value {
        let mut payload = json!({
            "contents": [{
                "parts": [{"text": prompt}]
            }]
        });

        if format.is_json() {
            payload["generationConfig"] = json!({"responseMimeType": "application/json"});
        }

        payload
    }

    async fn post(&self, api_key: &str, payload: Value) -> ProviderResult<Value> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.host.trim_end_matches('/'),
            self.config.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        response_json(response).await
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        ProviderType::Gemini.name()
    }

    async fn complete(&self, prompt: &str, format: ResponseFormat) -> ProviderResult<String> {
        let api_key = credential(&self.config.api_key)
            .ok_or_else(|| ProviderError::MissingCredential(self.name().to_string()))?;

        let response = self.post(api_key, Self::payload(prompt, format)).await?;

        gemini_response_text(&response)
            .ok_or_else(|| ProviderError::EmptyContent(self.name().to_string()))
    }

    fn supports_images(&self) -> bool {
        credential(&self.config.api_key).is_some()
    }
}
