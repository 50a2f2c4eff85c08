//! Submit Answer use case.
//!
//! Records one answer and moves the session forward. In interview mode the
//! answer is graded first, blocking, so the evaluation lands in the same
//! slot as the answer; in quiz mode the selected option is recorded
//! directly. On any failure the session is left exactly as it was.

use crate::ports::progress::SessionProgress;
use crate::ports::text_generator::TextGenerator;
use crate::use_cases::evaluate_answer::{EvaluateAnswerError, EvaluateAnswerUseCase};
use mentor_domain::{DomainError, Question, Session};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while submitting an answer.
#[derive(Error, Debug)]
pub enum SubmitAnswerError {
    #[error(transparent)]
    Evaluation(#[from] EvaluateAnswerError),

    #[error(transparent)]
    Transition(#[from] DomainError),
}

/// Use case for answering the current question of a session.
pub struct SubmitAnswerUseCase {
    evaluator: EvaluateAnswerUseCase,
}

impl SubmitAnswerUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            evaluator: EvaluateAnswerUseCase::new(generator),
        }
    }

    pub async fn execute(
        &self,
        session: &mut Session,
        answer: String,
        progress: &dyn SessionProgress,
    ) -> Result<(), SubmitAnswerError> {
        let Some(question) = session.current_question() else {
            // Delegate so the rejection carries the state machine's message
            session.advance(answer, None)?;
            return Ok(());
        };

        match question {
            Question::Choice(_) => {
                session.advance(answer, None)?;
            }
            Question::Open(question) => {
                if answer.trim().is_empty() {
                    return Err(DomainError::InvalidTransition(
                        "an answer is required before moving on".to_string(),
                    )
                    .into());
                }
                let question = question.clone();
                let index = session.current_index();
                progress.on_evaluation_started(index);
                let evaluation = self.evaluator.execute(&question, &answer).await?;
                progress.on_evaluation_completed(index);
                session.advance(answer, Some(evaluation))?;
            }
        }
        debug!(
            "Answer recorded, session at {}/{}",
            session.current_index(),
            session.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::ports::text_generator::{GeneratorError, ScriptedTextGenerator};
    use async_trait::async_trait;
    use mentor_domain::{
        AssessmentMode, ChoiceQuestion, OpenQuestion, QuestionKind, SessionState,
    };

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
            Err(GeneratorError::RequestFailed("boom".to_string()))
        }
    }

    fn quiz_session() -> Session {
        let questions = vec![Question::Choice(ChoiceQuestion {
            prompt: "Pick a.".to_string(),
            options: vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            correct_option: "a".to_string(),
            explanation: String::new(),
        })];
        Session::new(AssessmentMode::Quiz, questions).unwrap()
    }

    fn interview_session() -> Session {
        let questions = vec![Question::Open(OpenQuestion {
            prompt: "Tell me about scaling.".to_string(),
            kind: QuestionKind::Technical,
            evaluation_criteria: vec![],
            key_points: vec![],
        })];
        Session::new(AssessmentMode::Interview, questions).unwrap()
    }

    #[tokio::test]
    async fn test_quiz_submit_advances_without_evaluation() {
        let use_case = SubmitAnswerUseCase::new(Arc::new(ScriptedTextGenerator::new(vec![])));
        let mut session = quiz_session();

        use_case
            .execute(&mut session, "a".to_string(), &NoProgress)
            .await
            .unwrap();
        assert!(session.is_complete());
        assert!(session.evaluations()[0].is_none());
    }

    #[tokio::test]
    async fn test_interview_submit_records_evaluation() {
        let use_case = SubmitAnswerUseCase::new(Arc::new(ScriptedTextGenerator::new(vec![
            r#"{"score": 80, "technicalAccuracy": 75, "communicationClarity": 85}"#.to_string(),
        ])));
        let mut session = interview_session();

        use_case
            .execute(&mut session, "We sharded by tenant.".to_string(), &NoProgress)
            .await
            .unwrap();
        assert!(session.is_complete());
        let evaluation = session.evaluations()[0].as_ref().unwrap();
        assert_eq!(evaluation.overall_score, 80.0);
    }

    #[tokio::test]
    async fn test_evaluation_failure_leaves_session_unchanged() {
        let use_case = SubmitAnswerUseCase::new(Arc::new(FailingGenerator));
        let mut session = interview_session();

        let result = use_case
            .execute(&mut session, "An answer.".to_string(), &NoProgress)
            .await;
        assert!(matches!(result, Err(SubmitAnswerError::Evaluation(_))));
        // The failed question can be retried: nothing was recorded
        assert_eq!(session.state(), SessionState::Created);
        assert!(session.answers()[0].is_none());
    }

    #[tokio::test]
    async fn test_empty_interview_answer_skips_the_backend() {
        // The empty scripted queue would error if the backend were reached
        let use_case = SubmitAnswerUseCase::new(Arc::new(ScriptedTextGenerator::new(vec![])));
        let mut session = interview_session();

        let result = use_case
            .execute(&mut session, "   ".to_string(), &NoProgress)
            .await;
        assert!(matches!(result, Err(SubmitAnswerError::Transition(_))));
        assert_eq!(session.state(), SessionState::Created);
    }

    #[tokio::test]
    async fn test_submit_after_complete_is_rejected() {
        let use_case = SubmitAnswerUseCase::new(Arc::new(ScriptedTextGenerator::new(vec![])));
        let mut session = quiz_session();
        use_case
            .execute(&mut session, "a".to_string(), &NoProgress)
            .await
            .unwrap();

        let result = use_case
            .execute(&mut session, "b".to_string(), &NoProgress)
            .await;
        assert!(matches!(result, Err(SubmitAnswerError::Transition(_))));
    }
}
