//! Assessment mode

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two supported assessment flows.
///
/// Quiz mode runs fixed-choice questions with objectively correct answers;
/// interview mode runs open-ended questions graded by the evaluation
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentMode {
    Quiz,
    Interview,
}

/// Category stamped on the persisted assessment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentCategory {
    Technical,
    #[serde(rename = "AI Interview")]
    AiInterview,
}

impl AssessmentMode {
    /// Number of questions generated for one session in this mode.
    pub fn question_count(&self) -> usize {
        match self {
            AssessmentMode::Quiz => 10,
            AssessmentMode::Interview => 5,
        }
    }

    /// Record category this mode persists under.
    pub fn category(&self) -> AssessmentCategory {
        match self {
            AssessmentMode::Quiz => AssessmentCategory::Technical,
            AssessmentMode::Interview => AssessmentCategory::AiInterview,
        }
    }
}

impl fmt::Display for AssessmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentMode::Quiz => write!(f, "quiz"),
            AssessmentMode::Interview => write!(f, "interview"),
        }
    }
}

impl fmt::Display for AssessmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentCategory::Technical => write!(f, "Technical"),
            AssessmentCategory::AiInterview => write!(f, "AI Interview"),
        }
    }
}
