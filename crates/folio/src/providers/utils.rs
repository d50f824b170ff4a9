use reqwest::Response;
use serde_json::Value;

use crate::errors::{ProviderError, ProviderResult};

/// Decode a provider response body as JSON. Any non-success status is an
/// error carrying the response body text.
pub async fn response_json(response: Response) -> ProviderResult<Value> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Status { status, body });
    }

    response
        .json()
        .await
        .map_err(|e| ProviderError::Decode(e.to_string()))
}

/// Pull the first choice's message content out of an OpenAI style chat
/// completion response. Blank content counts as no content.
pub fn openai_response_content(response: &Value) -> Option<String> {
    response["choices"][0]["message"]["content"]
        .as_str()
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}

/// Concatenate the text parts of the first Gemini candidate
pub fn gemini_response_text(response: &Value) -> Option<String> {
    let parts = response["candidates"][0]["content"]["parts"].as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Remove markdown code fence markers a model may wrap around JSON output,
/// then trim surrounding whitespace. Every ```json is removed before any
/// remaining ```.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}
