//! Text generation port
//!
//! Defines the single seam to the generative-text backend. Every prompt
//! (question generation, answer grading, improvement tips) goes through
//! this trait, so tests and the offline demo substitute a deterministic
//! implementation.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use thiserror::Error;

/// Errors that can occur when calling the generative backend.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Generation request failed: {0}")]
    RequestFailed(String),

    #[error("The generation service rejected the credentials")]
    AuthRejected,

    #[error("The generation quota is exhausted")]
    QuotaExhausted,

    #[error("The generation service returned an empty response")]
    EmptyResponse,
}

/// Gateway to the generative-text backend.
///
/// Implementations (adapters) live in the infrastructure layer. Calls have
/// no internal retry; callers needing resilience wrap at the boundary.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one prompt and return the raw response text.
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}

/// Deterministic generator replaying a fixed queue of responses.
///
/// Used by tests and by the offline demo mode; errors once the queue
/// is exhausted.
pub struct ScriptedTextGenerator {
    responses: Mutex<VecDeque<String>>,
}

impl ScriptedTextGenerator {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
        }
    }
}

#[async_trait]
impl TextGenerator for ScriptedTextGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
        let mut responses = self.responses.lock().map_err(|_| {
            GeneratorError::RequestFailed("scripted response queue poisoned".to_string())
        })?;
        responses
            .pop_front()
            .ok_or_else(|| GeneratorError::RequestFailed("no scripted response left".to_string()))
    }
}
