//! Start Assessment use case.
//!
//! Creates a new session: authenticate the caller, load the profile,
//! ask the generative backend for questions, decode them, and fix them
//! into a fresh [`Session`]. Any failure here means no session exists,
//! so there is nothing to clean up.

use crate::ports::event_logger::{EventLogger, NoEventLogger, SessionEvent};
use crate::ports::identity::{CallerId, IdentityError, IdentityProvider};
use crate::ports::progress::SessionProgress;
use crate::ports::text_generator::{GeneratorError, TextGenerator};
use mentor_domain::{
    AssessmentMode, DecodeError, DomainError, Profile, PromptTemplate, Session,
    decode_choice_questions, decode_open_questions,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while creating a session.
#[derive(Error, Debug)]
pub enum StartAssessmentError {
    #[error("No valid caller identity")]
    Unauthorized,

    #[error("No profile found for this account")]
    ProfileNotFound,

    #[error("Failed to generate questions: {0}")]
    Generation(#[from] GeneratorError),

    #[error("The generation service returned an unusable response: {0}")]
    Malformed(#[from] DecodeError),

    #[error("The generated questions were rejected: {0}")]
    InvalidQuestions(#[from] DomainError),
}

impl From<IdentityError> for StartAssessmentError {
    fn from(error: IdentityError) -> Self {
        match error {
            IdentityError::Unauthorized => StartAssessmentError::Unauthorized,
            IdentityError::ProfileNotFound => StartAssessmentError::ProfileNotFound,
        }
    }
}

/// A freshly created session plus the identity it belongs to.
pub struct StartedAssessment {
    pub caller: CallerId,
    pub profile: Profile,
    pub session: Session,
}

/// Use case for starting a quiz or interview session.
pub struct StartAssessmentUseCase {
    identity: Arc<dyn IdentityProvider>,
    generator: Arc<dyn TextGenerator>,
    events: Arc<dyn EventLogger>,
}

impl StartAssessmentUseCase {
    pub fn new(identity: Arc<dyn IdentityProvider>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            identity,
            generator,
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
        mode: AssessmentMode,
        progress: &dyn SessionProgress,
    ) -> Result<StartedAssessment, StartAssessmentError> {
        // Identity checks fail fast, before any generation work
        let caller = self.identity.authenticate().await?;
        let profile = self.identity.profile(&caller).await?;

        info!("Starting {} assessment for {}", mode, caller);

        let count = mode.question_count();
        let prompt = match mode {
            AssessmentMode::Quiz => PromptTemplate::quiz_generation(&profile, count),
            AssessmentMode::Interview => PromptTemplate::interview_generation(&profile, count),
        };

        progress.on_generation_started(mode);
        let raw = self.generator.generate(&prompt).await?;
        let questions = match mode {
            AssessmentMode::Quiz => decode_choice_questions(&raw)?,
            AssessmentMode::Interview => decode_open_questions(&raw)?,
        };
        progress.on_generation_completed(questions.len());
        debug!("Decoded {} generated questions", questions.len());

        let session = Session::new(mode, questions)?;

        self.events.log(SessionEvent::new(
            "session_started",
            serde_json::json!({
                "mode": mode.to_string(),
                "questions": session.len(),
            }),
        ));

        Ok(StartedAssessment {
            caller,
            profile,
            session,
        })
    }
}
