//! Transcribe Answer use case.
//!
//! Turns a recorded interview answer into text. Deliberately detached
//! from session state: a failed transcription is retried (or the answer
//! typed instead) without any transition being touched.

use crate::ports::transcriber::{TranscribeError, Transcriber};
use std::sync::Arc;
use tracing::debug;

/// Use case for transcribing a recorded answer.
pub struct TranscribeAnswerUseCase {
    transcriber: Arc<dyn Transcriber>,
}

impl TranscribeAnswerUseCase {
    pub fn new(transcriber: Arc<dyn Transcriber>) -> Self {
        Self { transcriber }
    }

    pub async fn execute(&self, audio: &[u8]) -> Result<String, TranscribeError> {
        let transcript = self.transcriber.transcribe(audio).await?;
        let transcript = transcript.trim().to_string();
        if transcript.is_empty() {
            return Err(TranscribeError::NoSpeech);
        }
        debug!("Transcribed {} bytes of audio", audio.len());
        Ok(transcript)
    }
}
