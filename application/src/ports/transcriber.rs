//! Speech-to-text port
//!
//! Interview answers may arrive as recorded audio; the transcription
//! collaborator turns the encoded recording into plain text. A failure
//! here never touches session state, the caller simply retries or types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors produced by the transcription collaborator.
#[derive(Error, Debug)]
pub enum TranscribeError {
    #[error("Transcription request failed: {0}")]
    RequestFailed(String),

    #[error("No speech was recognized in the recording")]
    NoSpeech,
}

/// Turns encoded audio into a plain-text transcript.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8]) -> Result<String, TranscribeError>;
}
