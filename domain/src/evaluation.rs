//! Structured grading output for one open-ended answer

use serde::{Deserialize, Serialize};

/// Evaluation of a single interview answer.
///
/// Every numeric field defaults to 0 and every sequence defaults to empty
/// when the grading response omits it. A sparse evaluation is still a
/// usable evaluation, never a failed one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    #[serde(rename = "score", default)]
    pub overall_score: f64,
    #[serde(default)]
    pub technical_accuracy: f64,
    #[serde(default)]
    pub communication_clarity: f64,
    #[serde(default)]
    pub completeness: f64,
    #[serde(rename = "detailedFeedback", default)]
    pub feedback: String,
    #[serde(rename = "keyStrengths", default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvement_areas: Vec<String>,
    #[serde(rename = "modelAnswer", default)]
    pub model_answer: String,
}

impl Default for Evaluation {
    fn default() -> Self {
        Self {
            overall_score: 0.0,
            technical_accuracy: 0.0,
            communication_clarity: 0.0,
            completeness: 0.0,
            feedback: String::new(),
            strengths: Vec::new(),
            improvement_areas: Vec::new(),
            model_answer: String::new(),
        }
    }
}
