//! Generative-text gateway for Gemini-style APIs.
//!
//! Implements the [`TextGenerator`] port against the Generative Language
//! HTTP API: one POST per prompt to `models/{model}:generateContent`, the
//! reply text pulled out of `candidates[0].content.parts[0].text`.

use async_trait::async_trait;
use mentor_application::ports::text_generator::{GeneratorError, TextGenerator};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// HTTP adapter for the generation backend.
pub struct GeminiTextGateway {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiTextGateway {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
            timeout,
        }
    }
}

/// Pull the reply text out of a generateContent response body.
fn extract_text(body: &Value) -> Option<&str> {
    body.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

#[async_trait]
impl TextGenerator for GeminiTextGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        let payload = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        debug!("Sending {} byte prompt to {}", prompt.len(), self.model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| GeneratorError::RequestFailed(e.to_string()))?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(GeneratorError::AuthRejected);
            }
            StatusCode::TOO_MANY_REQUESTS => return Err(GeneratorError::QuotaExhausted),
            s if !s.is_success() => {
                let body = response.text().await.unwrap_or_default();
                debug!("Generation endpoint returned {}: {}", s, body);
                return Err(GeneratorError::RequestFailed(format!(
                    "generation endpoint returned status {}",
                    s
                )));
            }
            _ => {}
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| GeneratorError::RequestFailed(e.to_string()))?;

        extract_text(&body)
            .map(str::to_string)
            .ok_or(GeneratorError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_walks_candidate_path() {
        let body = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "{\"questions\": []}" }],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        });
        assert_eq!(extract_text(&body), Some("{\"questions\": []}"));
    }

    #[test]
    fn test_extract_text_handles_empty_candidates() {
        assert_eq!(extract_text(&serde_json::json!({ "candidates": [] })), None);
        assert_eq!(extract_text(&serde_json::json!({})), None);
    }
}
