//! The durable assessment record.
//!
//! Built once from a complete session, immutable afterwards. Field names
//! follow the storage boundary contract, so the serialized form is exactly
//! what the store persists and returns.

use crate::core::error::DomainError;
use crate::core::mode::AssessmentCategory;
use crate::evaluation::Evaluation;
use crate::feedback;
use crate::question::{Question, QuestionKind};
use crate::scoring::ScoreSummary;
use crate::session::Session;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Flattened result of one answered question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionResult {
    Choice {
        question: String,
        /// The correct option.
        answer: String,
        #[serde(rename = "userAnswer")]
        user_answer: String,
        #[serde(rename = "isCorrect")]
        is_correct: bool,
        explanation: String,
    },
    Open {
        question: String,
        #[serde(rename = "type")]
        kind: QuestionKind,
        #[serde(rename = "userAnswer")]
        user_answer: String,
        evaluation: Evaluation,
    },
}

/// Durable, immutable summary of one completed session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub owner_id: String,
    pub quiz_score_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_score_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication_score_percent: Option<f64>,
    pub category: AssessmentCategory,
    pub questions: Vec<QuestionResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub improvement_areas: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement_tip: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AssessmentRecord {
    /// Map a complete session plus its aggregate scores into the durable
    /// shape. The top-3 strengths and improvement areas are derived here,
    /// never supplied by the caller.
    pub fn from_session(
        session: &Session,
        owner_id: &str,
        summary: &ScoreSummary,
        improvement_tip: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if !session.is_complete() {
            return Err(DomainError::InvalidTransition(
                "only a complete session can be persisted".to_string(),
            ));
        }

        let questions = session
            .questions()
            .iter()
            .zip(session.answers())
            .zip(session.evaluations())
            .map(|((question, answer), evaluation)| {
                let user_answer = answer.clone().unwrap_or_default();
                match question {
                    Question::Choice(q) => QuestionResult::Choice {
                        question: q.prompt.clone(),
                        answer: q.correct_option.clone(),
                        is_correct: q.is_correct(&user_answer),
                        user_answer,
                        explanation: q.explanation.clone(),
                    },
                    Question::Open(q) => QuestionResult::Open {
                        question: q.prompt.clone(),
                        kind: q.kind,
                        user_answer,
                        evaluation: evaluation.clone().unwrap_or_default(),
                    },
                }
            })
            .collect();

        let evaluations: Vec<Evaluation> =
            session.evaluations().iter().flatten().cloned().collect();
        let all_strengths: Vec<String> = evaluations
            .iter()
            .flat_map(|e| e.strengths.iter().cloned())
            .collect();
        let all_improvements: Vec<String> = evaluations
            .iter()
            .flat_map(|e| e.improvement_areas.iter().cloned())
            .collect();

        Ok(Self {
            owner_id: owner_id.to_string(),
            quiz_score_percent: summary.overall,
            technical_score_percent: summary.technical,
            communication_score_percent: summary.communication,
            category: session.mode().category(),
            questions,
            strengths: feedback::top_unique(&all_strengths, 3),
            improvement_areas: feedback::top_unique(&all_improvements, 3),
            improvement_tip,
            created_at,
        })
    }
}
