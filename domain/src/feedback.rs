//! Feedback aggregation over a finished session.
//!
//! Pure helpers: collecting the wrong quiz answers for the tip prompt,
//! frequency-ranking strengths and improvement areas across evaluations,
//! and templating the interview improvement tip.

use crate::evaluation::Evaluation;
use crate::question::Question;
use crate::session::Session;
use std::collections::HashMap;

/// Fallback tip when no evaluation carried any usable feedback.
pub const GENERIC_INTERVIEW_TIP: &str =
    "Keep practicing with mock interviews to build confidence and sharpen your answers.";

/// One incorrectly answered quiz question, ready for the tip prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongAnswer {
    pub question: String,
    pub correct_answer: String,
    pub user_answer: String,
}

/// Collect the quiz questions whose recorded answer is wrong or missing.
pub fn wrong_answers(session: &Session) -> Vec<WrongAnswer> {
    session
        .questions()
        .iter()
        .zip(session.answers())
        .filter_map(|(question, answer)| {
            let Question::Choice(q) = question else {
                return None;
            };
            let user_answer = answer.clone().unwrap_or_default();
            if q.is_correct(&user_answer) {
                None
            } else {
                Some(WrongAnswer {
                    question: q.prompt.clone(),
                    correct_answer: q.correct_option.clone(),
                    user_answer,
                })
            }
        })
        .collect()
}

/// Rank items by frequency, descending; ties keep first-seen order.
pub fn ranked_by_frequency(items: &[String]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for item in items {
        if !counts.contains_key(item.as_str()) {
            order.push(item.as_str());
        }
        *counts.entry(item.as_str()).or_insert(0) += 1;
    }
    // sort_by is stable, so equal counts keep their first-seen order
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.into_iter().map(str::to_string).collect()
}

/// First-seen unique items, truncated to `limit`.
pub fn top_unique(items: &[String], limit: usize) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for item in items {
        if !unique.contains(item) {
            unique.push(item.clone());
        }
        if unique.len() == limit {
            break;
        }
    }
    unique
}

/// One-line templated tip naming the top strength and top improvement
/// area across all evaluations.
pub fn interview_tip(evaluations: &[Evaluation]) -> String {
    let strengths: Vec<String> = evaluations
        .iter()
        .flat_map(|e| e.strengths.iter().cloned())
        .collect();
    let improvements: Vec<String> = evaluations
        .iter()
        .flat_map(|e| e.improvement_areas.iter().cloned())
        .collect();

    if strengths.is_empty() && improvements.is_empty() {
        return GENERIC_INTERVIEW_TIP.to_string();
    }

    let top_strength = ranked_by_frequency(&strengths)
        .into_iter()
        .next()
        .unwrap_or_else(|| "communication".to_string());
    let top_improvement = ranked_by_frequency(&improvements)
        .into_iter()
        .next()
        .unwrap_or_else(|| "specific examples".to_string());

    format!(
        "Strong in {}. Focus on improving {} for better responses.",
        top_strength, top_improvement
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mode::AssessmentMode;
    use crate::question::ChoiceQuestion;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ranked_by_frequency_orders_by_count() {
        let ranked = ranked_by_frequency(&strings(&["a", "b", "b", "c", "b", "c"]));
        assert_eq!(ranked, strings(&["b", "c", "a"]));
    }

    #[test]
    fn test_ranked_by_frequency_breaks_ties_by_first_seen() {
        let ranked = ranked_by_frequency(&strings(&["depth", "clarity", "clarity", "depth"]));
        assert_eq!(ranked, strings(&["depth", "clarity"]));
    }

    #[test]
    fn test_top_unique_caps_and_dedupes() {
        let top = top_unique(&strings(&["a", "b", "a", "c", "d"]), 3);
        assert_eq!(top, strings(&["a", "b", "c"]));
    }

    #[test]
    fn test_interview_tip_names_top_items() {
        let evaluations = vec![
            Evaluation {
                strengths: strings(&["clarity", "depth"]),
                improvement_areas: strings(&["pacing"]),
                ..Evaluation::default()
            },
            Evaluation {
                strengths: strings(&["clarity"]),
                improvement_areas: strings(&["pacing", "examples"]),
                ..Evaluation::default()
            },
        ];
        let tip = interview_tip(&evaluations);
        assert_eq!(
            tip,
            "Strong in clarity. Focus on improving pacing for better responses."
        );
    }

    #[test]
    fn test_interview_tip_falls_back_when_feedback_is_empty() {
        let evaluations = vec![Evaluation::default(), Evaluation::default()];
        assert_eq!(interview_tip(&evaluations), GENERIC_INTERVIEW_TIP);
    }

    #[test]
    fn test_wrong_answers_collects_misses_only() {
        let questions = vec![
            Question::Choice(ChoiceQuestion {
                prompt: "First".to_string(),
                options: strings(&["a", "b", "c", "d"]),
                correct_option: "a".to_string(),
                explanation: String::new(),
            }),
            Question::Choice(ChoiceQuestion {
                prompt: "Second".to_string(),
                options: strings(&["a", "b", "c", "d"]),
                correct_option: "b".to_string(),
                explanation: String::new(),
            }),
        ];
        let mut session = Session::new(AssessmentMode::Quiz, questions).unwrap();
        session.advance("a", None).unwrap();
        session.advance("c", None).unwrap();

        let misses = wrong_answers(&session);
        assert_eq!(misses.len(), 1);
        assert_eq!(misses[0].question, "Second");
        assert_eq!(misses[0].correct_answer, "b");
        assert_eq!(misses[0].user_answer, "c");
    }
}
