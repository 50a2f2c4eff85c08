//! Question entities for the two assessment modes

use crate::core::mode::AssessmentMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-choice quiz question with one objectively correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    pub prompt: String,
    /// Exactly four distinct options.
    pub options: Vec<String>,
    pub correct_option: String,
    pub explanation: String,
}

impl ChoiceQuestion {
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_option == answer
    }
}

/// Flavor of an open-ended interview question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Behavioral,
    Technical,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Behavioral => write!(f, "behavioral"),
            QuestionKind::Technical => write!(f, "technical"),
        }
    }
}

/// An open-ended interview question graded by the evaluation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenQuestion {
    pub prompt: String,
    pub kind: QuestionKind,
    pub evaluation_criteria: Vec<String>,
    pub key_points: Vec<String>,
}

/// A question in either assessment mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Question {
    Choice(ChoiceQuestion),
    Open(OpenQuestion),
}

impl Question {
    /// The question text shown to the candidate.
    pub fn prompt(&self) -> &str {
        match self {
            Question::Choice(q) => &q.prompt,
            Question::Open(q) => &q.prompt,
        }
    }

    /// The assessment mode this question belongs to.
    pub fn mode(&self) -> AssessmentMode {
        match self {
            Question::Choice(_) => AssessmentMode::Quiz,
            Question::Open(_) => AssessmentMode::Interview,
        }
    }
}
