//! Session state machine

use crate::core::error::DomainError;
use crate::core::mode::AssessmentMode;
use crate::evaluation::Evaluation;
use crate::question::Question;

/// Progression state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Questions fixed, nothing answered yet.
    Created,
    /// At least one question answered, at least one remaining.
    InProgress,
    /// Every question answered; the session is terminal and immutable.
    Complete,
}

/// One in-progress attempt at a quiz or interview (Entity).
///
/// The question list is fixed at creation. [`Session::advance`] is the only
/// mutation: it writes the current answer slot (and evaluation slot in
/// interview mode) and moves the cursor forward by one. There is no
/// backward transition; abandoning the value is the only cancellation.
#[derive(Debug, Clone)]
pub struct Session {
    mode: AssessmentMode,
    questions: Vec<Question>,
    answers: Vec<Option<String>>,
    evaluations: Vec<Option<Evaluation>>,
    current_index: usize,
}

impl Session {
    /// Create a session over a fixed, non-empty question list.
    ///
    /// Every question must belong to the requested mode.
    pub fn new(mode: AssessmentMode, questions: Vec<Question>) -> Result<Self, DomainError> {
        if questions.is_empty() {
            return Err(DomainError::EmptySession);
        }
        for (index, question) in questions.iter().enumerate() {
            if question.mode() != mode {
                return Err(DomainError::InvalidQuestion(format!(
                    "question {} does not belong to {} mode",
                    index + 1,
                    mode
                )));
            }
        }
        let len = questions.len();
        Ok(Self {
            mode,
            questions,
            answers: vec![None; len],
            evaluations: vec![None; len],
            current_index: 0,
        })
    }

    pub fn mode(&self) -> AssessmentMode {
        self.mode
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    pub fn evaluations(&self) -> &[Option<Evaluation>] {
        &self.evaluations
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question awaiting an answer, or None once complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn state(&self) -> SessionState {
        if self.current_index == self.questions.len() {
            SessionState::Complete
        } else if self.current_index == 0 {
            SessionState::Created
        } else {
            SessionState::InProgress
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == SessionState::Complete
    }

    /// Record the answer (and evaluation, in interview mode) for the
    /// current question and move the cursor forward.
    ///
    /// Rejected with [`DomainError::InvalidTransition`] when the session is
    /// already complete, the answer is empty, a quiz answer is not one of
    /// the listed options, or the evaluation presence does not match the
    /// mode. On rejection the session is left unchanged.
    pub fn advance(
        &mut self,
        answer: impl Into<String>,
        evaluation: Option<Evaluation>,
    ) -> Result<(), DomainError> {
        let answer = answer.into();
        if self.is_complete() {
            return Err(DomainError::InvalidTransition(
                "the session is already complete".to_string(),
            ));
        }
        if answer.trim().is_empty() {
            return Err(DomainError::InvalidTransition(
                "an answer is required before moving on".to_string(),
            ));
        }

        match &self.questions[self.current_index] {
            Question::Choice(question) => {
                if evaluation.is_some() {
                    return Err(DomainError::InvalidTransition(
                        "quiz answers do not carry an evaluation".to_string(),
                    ));
                }
                if !question.options.contains(&answer) {
                    return Err(DomainError::InvalidTransition(
                        "the answer must be one of the listed options".to_string(),
                    ));
                }
            }
            Question::Open(_) => {
                if evaluation.is_none() {
                    return Err(DomainError::InvalidTransition(
                        "an interview answer requires an evaluation".to_string(),
                    ));
                }
            }
        }

        self.answers[self.current_index] = Some(answer);
        self.evaluations[self.current_index] = evaluation;
        self.current_index += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{ChoiceQuestion, OpenQuestion, QuestionKind};

    fn choice_question(n: usize) -> Question {
        Question::Choice(ChoiceQuestion {
            prompt: format!("Question {}", n),
            options: vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            correct_option: "a".to_string(),
            explanation: String::new(),
        })
    }

    fn open_question(n: usize) -> Question {
        Question::Open(OpenQuestion {
            prompt: format!("Question {}", n),
            kind: QuestionKind::Technical,
            evaluation_criteria: vec![],
            key_points: vec![],
        })
    }

    #[test]
    fn test_new_session_rejects_empty_questions() {
        let result = Session::new(AssessmentMode::Quiz, vec![]);
        assert!(matches!(result, Err(DomainError::EmptySession)));
    }

    #[test]
    fn test_new_session_rejects_mode_mismatch() {
        let result = Session::new(AssessmentMode::Quiz, vec![open_question(1)]);
        assert!(matches!(result, Err(DomainError::InvalidQuestion(_))));
    }

    #[test]
    fn test_state_progression() {
        let mut session =
            Session::new(AssessmentMode::Quiz, vec![choice_question(1), choice_question(2)])
                .unwrap();
        assert_eq!(session.state(), SessionState::Created);

        session.advance("a", None).unwrap();
        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.current_index(), 1);

        session.advance("b", None).unwrap();
        assert_eq!(session.state(), SessionState::Complete);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_advance_after_complete_leaves_state_unchanged() {
        let mut session = Session::new(AssessmentMode::Quiz, vec![choice_question(1)]).unwrap();
        session.advance("a", None).unwrap();
        assert!(session.is_complete());

        let result = session.advance("b", None);
        assert!(matches!(result, Err(DomainError::InvalidTransition(_))));
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.answers()[0].as_deref(), Some("a"));
    }

    #[test]
    fn test_advance_rejects_empty_answer() {
        let mut session = Session::new(AssessmentMode::Quiz, vec![choice_question(1)]).unwrap();
        let result = session.advance("   ", None);
        assert!(matches!(result, Err(DomainError::InvalidTransition(_))));
        assert_eq!(session.state(), SessionState::Created);
    }

    #[test]
    fn test_advance_rejects_answer_outside_options() {
        let mut session = Session::new(AssessmentMode::Quiz, vec![choice_question(1)]).unwrap();
        let result = session.advance("nope", None);
        assert!(matches!(result, Err(DomainError::InvalidTransition(_))));
    }

    #[test]
    fn test_interview_advance_requires_evaluation() {
        let mut session =
            Session::new(AssessmentMode::Interview, vec![open_question(1)]).unwrap();
        let result = session.advance("I would start by...", None);
        assert!(matches!(result, Err(DomainError::InvalidTransition(_))));

        session
            .advance("I would start by...", Some(Evaluation::default()))
            .unwrap();
        assert!(session.is_complete());
        // Evaluation slot is defined exactly where the answer slot is
        assert!(session.evaluations()[0].is_some());
    }

    #[test]
    fn test_quiz_advance_rejects_stray_evaluation() {
        let mut session = Session::new(AssessmentMode::Quiz, vec![choice_question(1)]).unwrap();
        let result = session.advance("a", Some(Evaluation::default()));
        assert!(matches!(result, Err(DomainError::InvalidTransition(_))));
    }
}
