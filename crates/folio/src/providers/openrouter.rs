use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::base::{Provider, ResponseFormat};
use super::configs::{credential, OpenRouterProviderConfig};
use super::factory::ProviderType;
use super::utils::{openai_response_content, response_json};
use crate::errors::{ProviderError, ProviderResult};

pub struct OpenRouterProvider {
    client: Client,
    config: OpenRouterProviderConfig,
}

impl OpenRouterProvider {
    pub fn new(config: OpenRouterProviderConfig) -> ProviderResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    fn payload(&self, prompt: &str, format: ResponseFormat) -> Value {
        let mut payload = json!({
            "model": self.config.model,
            "messages": [{
                "role": "user",
                "content": prompt
            }]
        });

        if format.is_json() {
            payload["response_format"] = json!({"type": "json_object"});
        }

        payload
    }

    async fn post(&self, api_key: &str, payload: Value) -> ProviderResult<Value> {
        let url = format!(
            "{}/v1/chat/completions",
            self.config.host.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.title)
            .json(&payload)
            .send()
            .await?;

        response_json(response).await
    }
}

#[async_trait]
impl Provider for OpenRouterProvider {
    fn name(&self) -> &str {
        ProviderType::OpenRouter.name()
    }

    async fn complete(&self, prompt: &str, format: ResponseFormat) -> ProviderResult<String> {
        let api_key = credential(&self.config.api_key)
            .ok_or_else(|| ProviderError::MissingCredential(self.name().to_string()))?;

        let response = self.post(api_key, self.payload(prompt, format)).await?;

        openai_response_content(&response)
            .ok_or_else(|| ProviderError::EmptyContent(self.name().to_string()))
    }
}
