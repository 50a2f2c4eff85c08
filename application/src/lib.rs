//! Application layer for mockmentor
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    assessment_store::{AssessmentStore, StoreError},
    event_logger::{EventLogger, NoEventLogger, SessionEvent},
    identity::{CallerId, IdentityError, IdentityProvider},
    progress::{NoProgress, SessionProgress},
    text_generator::{GeneratorError, ScriptedTextGenerator, TextGenerator},
    transcriber::{TranscribeError, Transcriber},
};
pub use use_cases::complete_assessment::{CompleteAssessmentError, CompleteAssessmentUseCase};
pub use use_cases::evaluate_answer::{EvaluateAnswerError, EvaluateAnswerUseCase};
pub use use_cases::list_assessments::{ListAssessmentsError, ListAssessmentsUseCase};
pub use use_cases::start_assessment::{
    StartAssessmentError, StartAssessmentUseCase, StartedAssessment,
};
pub use use_cases::submit_answer::{SubmitAnswerError, SubmitAnswerUseCase};
pub use use_cases::transcribe_answer::TranscribeAnswerUseCase;
