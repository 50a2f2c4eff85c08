//! Complete Assessment use case.
//!
//! Turns a finished session into a durable record: aggregate the scores,
//! synthesize the improvement tip (best-effort, a tip failure never
//! aborts the flow), map into the record shape, and write it through the
//! storage collaborator. A storage failure does surface, but it carries
//! the already-computed scores so the caller does not lose them.

use crate::ports::assessment_store::{AssessmentStore, StoreError};
use crate::ports::event_logger::{EventLogger, NoEventLogger, SessionEvent};
use crate::ports::identity::CallerId;
use crate::ports::text_generator::TextGenerator;
use chrono::Utc;
use mentor_domain::{
    AssessmentMode, AssessmentRecord, DomainError, Evaluation, Profile, PromptTemplate,
    ScoreSummary, Session, interview_tip, score_session, wrong_answers,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while finishing an assessment.
#[derive(Error, Debug)]
pub enum CompleteAssessmentError {
    #[error(transparent)]
    Session(#[from] DomainError),

    #[error("The assessment could not be saved: {source}")]
    Persistence {
        /// Scores computed before the write failed.
        summary: ScoreSummary,
        #[source]
        source: StoreError,
    },
}

/// Use case for scoring, summarizing, and persisting a complete session.
pub struct CompleteAssessmentUseCase {
    generator: Arc<dyn TextGenerator>,
    store: Arc<dyn AssessmentStore>,
    events: Arc<dyn EventLogger>,
}

impl CompleteAssessmentUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>, store: Arc<dyn AssessmentStore>) -> Self {
        Self {
            generator,
            store,
            events: Arc::new(NoEventLogger),
        }
    }

    /// Create with an event logger.
    pub fn with_event_logger(mut self, events: Arc<dyn EventLogger>) -> Self {
        self.events = events;
        self
    }

    pub async fn execute(
        &self,
        session: &Session,
        owner: &CallerId,
        profile: &Profile,
    ) -> Result<AssessmentRecord, CompleteAssessmentError> {
        if !session.is_complete() {
            return Err(DomainError::InvalidTransition(
                "the session still has unanswered questions".to_string(),
            )
            .into());
        }

        let summary = score_session(session)?;
        let improvement_tip = self.improvement_tip(session, profile).await;

        let record = AssessmentRecord::from_session(
            session,
            owner.as_str(),
            &summary,
            improvement_tip,
            Utc::now(),
        )?;

        info!(
            "Persisting {} assessment for {} at {:.1}%",
            record.category, owner, summary.overall
        );

        self.store
            .save(&record)
            .await
            .map_err(|source| CompleteAssessmentError::Persistence {
                summary: summary.clone(),
                source,
            })?;

        self.events.log(SessionEvent::new(
            "assessment_saved",
            serde_json::json!({
                "category": record.category.to_string(),
                "overall": summary.overall,
                "questions": record.questions.len(),
            }),
        ));

        Ok(record)
    }

    /// Best-effort tip synthesis. Quiz mode asks the backend about the
    /// wrong answers; interview mode is pure templating over the
    /// evaluations. Returns None (quiz, nothing wrong or backend down)
    /// rather than ever failing.
    async fn improvement_tip(&self, session: &Session, profile: &Profile) -> Option<String> {
        match session.mode() {
            AssessmentMode::Quiz => {
                let misses = wrong_answers(session);
                if misses.is_empty() {
                    // A perfect quiz gets no tip, deliberately
                    return None;
                }
                let prompt = PromptTemplate::improvement_tip(profile.domain(), &misses);
                match self.generator.generate(&prompt).await {
                    Ok(tip) => {
                        let tip = tip.trim().to_string();
                        if tip.is_empty() { None } else { Some(tip) }
                    }
                    Err(error) => {
                        warn!("Improvement tip generation failed: {}", error);
                        self.events.log(SessionEvent::new(
                            "tip_degraded",
                            serde_json::json!({ "error": error.to_string() }),
                        ));
                        None
                    }
                }
            }
            AssessmentMode::Interview => {
                let evaluations: Vec<Evaluation> =
                    session.evaluations().iter().flatten().cloned().collect();
                Some(interview_tip(&evaluations))
            }
        }
    }
}
