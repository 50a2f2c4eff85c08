//! Speech-to-text adapter.
//!
//! Posts the base64-encoded recording to a configurable transcription
//! endpoint and joins the returned alternatives into one transcript.

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use mentor_application::ports::transcriber::{TranscribeError, Transcriber};
use serde_json::Value;
use tracing::debug;

/// HTTP transcription client.
pub struct HttpTranscriber {
    client: reqwest::Client,
    endpoint: String,
    language: String,
}

impl HttpTranscriber {
    pub fn new(endpoint: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            language: language.into(),
        }
    }
}

/// Accepts either a flat `transcript` field or the per-result
/// `results[].alternatives[0].transcript` shape.
fn extract_transcript(body: &Value) -> String {
    if let Some(transcript) = body.get("transcript").and_then(Value::as_str) {
        return transcript.trim().to_string();
    }
    body.get("results")
        .and_then(Value::as_array)
        .map(|results| {
            results
                .iter()
                .filter_map(|result| {
                    result
                        .get("alternatives")?
                        .get(0)?
                        .get("transcript")?
                        .as_str()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn transcribe(&self, audio: &[u8]) -> Result<String, TranscribeError> {
        let payload = serde_json::json!({
            "audio": BASE64.encode(audio),
            "config": { "languageCode": self.language },
        });

        debug!("Transcribing {} bytes of audio", audio.len());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| TranscribeError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranscribeError::RequestFailed(format!(
                "transcription endpoint returned status {}",
                status
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TranscribeError::RequestFailed(e.to_string()))?;

        let transcript = extract_transcript(&body);
        if transcript.is_empty() {
            return Err(TranscribeError::NoSpeech);
        }
        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_flat_transcript() {
        let body = serde_json::json!({ "transcript": " I led the rollout. ", "isFinal": true });
        assert_eq!(extract_transcript(&body), "I led the rollout.");
    }

    #[test]
    fn test_extract_joined_alternatives() {
        let body = serde_json::json!({
            "results": [
                { "alternatives": [{ "transcript": "I led" }] },
                { "alternatives": [{ "transcript": "the rollout." }] }
            ]
        });
        assert_eq!(extract_transcript(&body), "I led the rollout.");
    }

    #[test]
    fn test_extract_handles_empty_body() {
        assert_eq!(extract_transcript(&serde_json::json!({})), "");
    }
}
