//! Evaluate Answer use case.
//!
//! Grades one open-ended answer against its question. A failure here
//! aborts only the current question's transition; the session stays in
//! its prior state so the caller can retry that one question.

use crate::ports::text_generator::{GeneratorError, TextGenerator};
use mentor_domain::{DecodeError, Evaluation, OpenQuestion, PromptTemplate, decode_evaluation};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while grading an answer.
#[derive(Error, Debug)]
pub enum EvaluateAnswerError {
    #[error("Failed to evaluate the answer: {0}")]
    Generation(#[from] GeneratorError),

    #[error("The evaluation service returned an unusable response: {0}")]
    Malformed(#[from] DecodeError),
}

/// Use case for grading a single interview answer.
pub struct EvaluateAnswerUseCase {
    generator: Arc<dyn TextGenerator>,
}

impl EvaluateAnswerUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn execute(
        &self,
        question: &OpenQuestion,
        answer: &str,
    ) -> Result<Evaluation, EvaluateAnswerError> {
        let prompt = PromptTemplate::answer_evaluation(question, answer);
        let raw = self.generator.generate(&prompt).await?;
        let evaluation = decode_evaluation(&raw)?;
        debug!(
            "Evaluated answer: overall {}, technical {}, clarity {}",
            evaluation.overall_score,
            evaluation.technical_accuracy,
            evaluation.communication_clarity
        );
        Ok(evaluation)
    }
}
