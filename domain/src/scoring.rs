//! Score aggregation over a finished session.
//!
//! Quiz mode reduces correctness flags to one percentage. Interview mode
//! computes three independent means (overall, technical accuracy,
//! communication clarity) over the same N evaluations; a zero default for
//! a field the grader omitted still participates in its mean.

use crate::core::error::DomainError;
use crate::core::mode::AssessmentMode;
use crate::evaluation::Evaluation;
use crate::question::Question;
use crate::session::Session;
use serde::Serialize;

/// Summary percentages for one completed session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub overall: f64,
    pub technical: Option<f64>,
    pub communication: Option<f64>,
}

/// Aggregate a session's per-question signals into summary percentages.
pub fn score_session(session: &Session) -> Result<ScoreSummary, DomainError> {
    match session.mode() {
        AssessmentMode::Quiz => {
            let overall = choice_score(session.questions(), session.answers())?;
            Ok(ScoreSummary {
                overall,
                technical: None,
                communication: None,
            })
        }
        AssessmentMode::Interview => {
            let evaluations: Vec<Evaluation> =
                session.evaluations().iter().flatten().cloned().collect();
            interview_scores(&evaluations)
        }
    }
}

/// Percentage of quiz answers matching their question's correct option.
pub fn choice_score(
    questions: &[Question],
    answers: &[Option<String>],
) -> Result<f64, DomainError> {
    if questions.is_empty() {
        return Err(DomainError::EmptySession);
    }
    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| match (question, answer) {
            (Question::Choice(q), Some(a)) => q.is_correct(a),
            _ => false,
        })
        .count();
    Ok(100.0 * correct as f64 / questions.len() as f64)
}

/// The three interview means, each over all N evaluations.
pub fn interview_scores(evaluations: &[Evaluation]) -> Result<ScoreSummary, DomainError> {
    if evaluations.is_empty() {
        return Err(DomainError::EmptySession);
    }
    let n = evaluations.len() as f64;
    let overall = evaluations.iter().map(|e| e.overall_score).sum::<f64>() / n;
    let technical = evaluations.iter().map(|e| e.technical_accuracy).sum::<f64>() / n;
    let communication = evaluations
        .iter()
        .map(|e| e.communication_clarity)
        .sum::<f64>()
        / n;
    Ok(ScoreSummary {
        overall,
        technical: Some(technical),
        communication: Some(communication),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::ChoiceQuestion;

    fn question(correct: &str) -> Question {
        Question::Choice(ChoiceQuestion {
            prompt: "q".to_string(),
            options: vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            correct_option: correct.to_string(),
            explanation: String::new(),
        })
    }

    fn evaluation(overall: f64, technical: f64, communication: f64) -> Evaluation {
        Evaluation {
            overall_score: overall,
            technical_accuracy: technical,
            communication_clarity: communication,
            ..Evaluation::default()
        }
    }

    #[test]
    fn test_choice_score_bounds() {
        let questions: Vec<Question> = (0..4).map(|_| question("a")).collect();
        let all_right = vec![Some("a".to_string()); 4];
        let all_wrong = vec![Some("b".to_string()); 4];
        assert_eq!(choice_score(&questions, &all_right).unwrap(), 100.0);
        assert_eq!(choice_score(&questions, &all_wrong).unwrap(), 0.0);
    }

    #[test]
    fn test_choice_score_partial() {
        let questions: Vec<Question> = (0..10).map(|_| question("a")).collect();
        let mut answers = vec![Some("a".to_string()); 7];
        answers.extend(vec![Some("b".to_string()); 3]);
        assert_eq!(choice_score(&questions, &answers).unwrap(), 70.0);
    }

    #[test]
    fn test_choice_score_unanswered_counts_as_wrong() {
        let questions: Vec<Question> = (0..2).map(|_| question("a")).collect();
        let answers = vec![Some("a".to_string()), None];
        assert_eq!(choice_score(&questions, &answers).unwrap(), 50.0);
    }

    #[test]
    fn test_empty_session_is_an_error() {
        assert!(matches!(
            choice_score(&[], &[]),
            Err(DomainError::EmptySession)
        ));
        assert!(matches!(
            interview_scores(&[]),
            Err(DomainError::EmptySession)
        ));
    }

    #[test]
    fn test_interview_means_are_independent() {
        let evaluations = vec![
            evaluation(80.0, 75.0, 85.0),
            evaluation(80.0, 75.0, 85.0),
            evaluation(80.0, 75.0, 85.0),
            evaluation(80.0, 75.0, 85.0),
            evaluation(80.0, 75.0, 85.0),
        ];
        let summary = interview_scores(&evaluations).unwrap();
        assert_eq!(summary.overall, 80.0);
        assert_eq!(summary.technical, Some(75.0));
        assert_eq!(summary.communication, Some(85.0));
    }

    #[test]
    fn test_missing_subscore_default_participates_in_mean() {
        // One grader omitted technicalAccuracy (decoded as 0); the mean
        // still runs over both evaluations, not a filtered subset.
        let evaluations = vec![evaluation(90.0, 80.0, 90.0), evaluation(70.0, 0.0, 70.0)];
        let summary = interview_scores(&evaluations).unwrap();
        assert_eq!(summary.overall, 80.0);
        assert_eq!(summary.technical, Some(40.0));
        assert_eq!(summary.communication, Some(80.0));
    }
}
