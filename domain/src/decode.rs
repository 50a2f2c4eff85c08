//! Decoding of generative-backend responses.
//!
//! The text backend returns free text that is supposed to be a single JSON
//! object, often wrapped in Markdown code fences. Each response type gets a
//! dedicated decode function: the top-level shape is validated strictly
//! (fail loudly), while optional sub-fields fall back to documented
//! defaults (never fail).

use crate::evaluation::Evaluation;
use crate::question::{ChoiceQuestion, OpenQuestion, Question, QuestionKind};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors produced when a backend response cannot be decoded.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Response is not valid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Response has no \"questions\" array")]
    MissingQuestions,

    #[error("Response contains an empty question list")]
    NoQuestions,

    #[error("Question {index} is malformed: {reason}")]
    MalformedQuestion { index: usize, reason: String },

    #[error("Response is not a JSON object")]
    NotAnObject,
}

/// Remove Markdown code-fence markers (with an optional `json` language
/// tag) and surrounding whitespace from a backend response.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

fn parse_json(raw: &str) -> Result<Value, DecodeError> {
    let cleaned = strip_code_fences(raw);
    serde_json::from_str(&cleaned).map_err(DecodeError::InvalidJson)
}

fn questions_array(value: &Value) -> Result<&Vec<Value>, DecodeError> {
    let items = value
        .get("questions")
        .and_then(Value::as_array)
        .ok_or(DecodeError::MissingQuestions)?;
    if items.is_empty() {
        return Err(DecodeError::NoQuestions);
    }
    Ok(items)
}

#[derive(Deserialize)]
struct ChoiceQuestionWire {
    question: String,
    options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    correct_answer: String,
    #[serde(default)]
    explanation: String,
}

/// Decode a quiz-generation response into fixed-choice questions.
///
/// The top-level `questions` array and every per-question field are
/// required; each question must carry exactly four distinct options with
/// the correct answer among them.
pub fn decode_choice_questions(raw: &str) -> Result<Vec<Question>, DecodeError> {
    let value = parse_json(raw)?;
    let items = questions_array(&value)?;

    let mut questions = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let wire: ChoiceQuestionWire = serde_json::from_value(item.clone()).map_err(|e| {
            DecodeError::MalformedQuestion {
                index,
                reason: e.to_string(),
            }
        })?;
        if wire.options.len() != 4 {
            return Err(DecodeError::MalformedQuestion {
                index,
                reason: format!("expected 4 options, got {}", wire.options.len()),
            });
        }
        let mut seen = wire.options.clone();
        seen.sort();
        seen.dedup();
        if seen.len() != 4 {
            return Err(DecodeError::MalformedQuestion {
                index,
                reason: "options are not distinct".to_string(),
            });
        }
        if !wire.options.contains(&wire.correct_answer) {
            return Err(DecodeError::MalformedQuestion {
                index,
                reason: "correct answer is not one of the options".to_string(),
            });
        }
        questions.push(Question::Choice(ChoiceQuestion {
            prompt: wire.question,
            options: wire.options,
            correct_option: wire.correct_answer,
            explanation: wire.explanation,
        }));
    }
    Ok(questions)
}

#[derive(Deserialize)]
struct OpenQuestionWire {
    question: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(rename = "evaluationCriteria", default)]
    evaluation_criteria: Vec<String>,
    #[serde(rename = "keyPoints", default)]
    key_points: Vec<String>,
}

/// Decode an interview-generation response into open-ended questions.
pub fn decode_open_questions(raw: &str) -> Result<Vec<Question>, DecodeError> {
    let value = parse_json(raw)?;
    let items = questions_array(&value)?;

    let mut questions = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let wire: OpenQuestionWire = serde_json::from_value(item.clone()).map_err(|e| {
            DecodeError::MalformedQuestion {
                index,
                reason: e.to_string(),
            }
        })?;
        let kind = match wire.kind.to_lowercase().as_str() {
            "behavioral" => QuestionKind::Behavioral,
            "technical" => QuestionKind::Technical,
            other => {
                return Err(DecodeError::MalformedQuestion {
                    index,
                    reason: format!("unknown question type \"{}\"", other),
                });
            }
        };
        questions.push(Question::Open(OpenQuestion {
            prompt: wire.question,
            kind,
            evaluation_criteria: wire.evaluation_criteria,
            key_points: wire.key_points,
        }));
    }
    Ok(questions)
}

fn score_field(object: &Value, key: &str) -> f64 {
    object
        .get(key)
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
        .clamp(0.0, 100.0)
}

fn text_field(object: &Value, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn list_field(object: &Value, key: &str) -> Vec<String> {
    object
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Decode a grading response into an [`Evaluation`].
///
/// Only the top-level parse is a hard contract; every score and sequence
/// field substitutes its default when missing or mistyped.
pub fn decode_evaluation(raw: &str) -> Result<Evaluation, DecodeError> {
    let value = parse_json(raw)?;
    if !value.is_object() {
        return Err(DecodeError::NotAnObject);
    }

    Ok(Evaluation {
        overall_score: score_field(&value, "score"),
        technical_accuracy: score_field(&value, "technicalAccuracy"),
        communication_clarity: score_field(&value, "communicationClarity"),
        completeness: score_field(&value, "completeness"),
        feedback: text_field(&value, "detailedFeedback"),
        strengths: list_field(&value, "keyStrengths"),
        improvement_areas: list_field(&value, "improvementAreas"),
        model_answer: text_field(&value, "modelAnswer"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIZ_FIXTURE: &str = r#"{
        "questions": [
            {
                "question": "Which keyword declares an immutable binding?",
                "options": ["let", "mut", "const fn", "static mut"],
                "correctAnswer": "let",
                "explanation": "Bindings are immutable unless marked mut."
            },
            {
                "question": "What does the ? operator do?",
                "options": ["Panics", "Propagates errors", "Ignores errors", "Retries"],
                "correctAnswer": "Propagates errors",
                "explanation": "It returns early on Err."
            }
        ]
    }"#;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn test_decode_choice_questions_round_trip() {
        let questions = decode_choice_questions(QUIZ_FIXTURE).unwrap();
        assert_eq!(questions.len(), 2);
        let Question::Choice(first) = &questions[0] else {
            panic!("expected a choice question");
        };
        assert_eq!(first.prompt, "Which keyword declares an immutable binding?");
        assert_eq!(first.options.len(), 4);
        assert_eq!(first.correct_option, "let");
        assert_eq!(first.explanation, "Bindings are immutable unless marked mut.");
    }

    #[test]
    fn test_decode_fenced_response() {
        let fenced = format!("```json\n{}\n```", QUIZ_FIXTURE);
        let questions = decode_choice_questions(&fenced).unwrap();
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_decode_rejects_prose() {
        let result = decode_choice_questions("Here are your questions!");
        assert!(matches!(result, Err(DecodeError::InvalidJson(_))));
    }

    #[test]
    fn test_decode_rejects_missing_questions_key() {
        let result = decode_choice_questions(r#"{"items": []}"#);
        assert!(matches!(result, Err(DecodeError::MissingQuestions)));
    }

    #[test]
    fn test_decode_rejects_empty_question_list() {
        let result = decode_choice_questions(r#"{"questions": []}"#);
        assert!(matches!(result, Err(DecodeError::NoQuestions)));
    }

    #[test]
    fn test_decode_rejects_wrong_option_count() {
        let raw = r#"{"questions": [{
            "question": "Pick one",
            "options": ["a", "b"],
            "correctAnswer": "a",
            "explanation": ""
        }]}"#;
        let result = decode_choice_questions(raw);
        assert!(matches!(
            result,
            Err(DecodeError::MalformedQuestion { index: 0, .. })
        ));
    }

    #[test]
    fn test_decode_rejects_correct_answer_outside_options() {
        let raw = r#"{"questions": [{
            "question": "Pick one",
            "options": ["a", "b", "c", "d"],
            "correctAnswer": "e",
            "explanation": ""
        }]}"#;
        assert!(decode_choice_questions(raw).is_err());
    }

    #[test]
    fn test_decode_open_questions() {
        let raw = r#"{"questions": [
            {
                "question": "Describe a production incident you handled.",
                "type": "behavioral",
                "evaluationCriteria": ["ownership", "clarity"],
                "keyPoints": ["root cause", "remediation"]
            },
            {
                "question": "How does an index speed up a query?",
                "type": "technical"
            }
        ]}"#;
        let questions = decode_open_questions(raw).unwrap();
        assert_eq!(questions.len(), 2);
        let Question::Open(first) = &questions[0] else {
            panic!("expected an open question");
        };
        assert_eq!(first.kind, QuestionKind::Behavioral);
        assert_eq!(first.evaluation_criteria.len(), 2);
        let Question::Open(second) = &questions[1] else {
            panic!("expected an open question");
        };
        // Criteria and key points default to empty when omitted
        assert!(second.evaluation_criteria.is_empty());
        assert!(second.key_points.is_empty());
    }

    #[test]
    fn test_decode_open_rejects_unknown_kind() {
        let raw = r#"{"questions": [{"question": "Hm", "type": "riddle"}]}"#;
        assert!(decode_open_questions(raw).is_err());
    }

    #[test]
    fn test_decode_evaluation_full() {
        let raw = r#"```json
        {
            "score": 82,
            "detailedFeedback": "Good structure, thin on examples.",
            "keyStrengths": ["structure", "accuracy"],
            "improvementAreas": ["examples"],
            "modelAnswer": "An ideal answer would...",
            "technicalAccuracy": 78,
            "communicationClarity": 88,
            "completeness": 70
        }
        ```"#;
        let evaluation = decode_evaluation(raw).unwrap();
        assert_eq!(evaluation.overall_score, 82.0);
        assert_eq!(evaluation.technical_accuracy, 78.0);
        assert_eq!(evaluation.strengths, vec!["structure", "accuracy"]);
        assert_eq!(evaluation.model_answer, "An ideal answer would...");
    }

    #[test]
    fn test_decode_evaluation_missing_fields_default() {
        let raw = r#"{"score": 65, "detailedFeedback": "Decent."}"#;
        let evaluation = decode_evaluation(raw).unwrap();
        assert_eq!(evaluation.overall_score, 65.0);
        assert_eq!(evaluation.technical_accuracy, 0.0);
        assert_eq!(evaluation.communication_clarity, 0.0);
        assert_eq!(evaluation.completeness, 0.0);
        assert!(evaluation.strengths.is_empty());
        assert!(evaluation.improvement_areas.is_empty());
        assert_eq!(evaluation.model_answer, "");
    }

    #[test]
    fn test_decode_evaluation_clamps_out_of_range_scores() {
        let raw = r#"{"score": 140, "communicationClarity": -10}"#;
        let evaluation = decode_evaluation(raw).unwrap();
        assert_eq!(evaluation.overall_score, 100.0);
        assert_eq!(evaluation.communication_clarity, 0.0);
    }

    #[test]
    fn test_decode_evaluation_rejects_non_object() {
        assert!(matches!(
            decode_evaluation("[1, 2, 3]"),
            Err(DecodeError::NotAnObject)
        ));
        assert!(matches!(
            decode_evaluation("not json at all"),
            Err(DecodeError::InvalidJson(_))
        ));
    }
}
