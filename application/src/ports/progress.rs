//! Progress notification port
//!
//! Defines the interface for reporting progress while the generative
//! backend is in flight.

use mentor_domain::AssessmentMode;

/// Callback for progress updates during a session.
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, etc.)
pub trait SessionProgress: Send + Sync {
    /// Called before the question-generation request is sent.
    fn on_generation_started(&self, _mode: AssessmentMode) {}

    /// Called once questions have been generated and decoded.
    fn on_generation_completed(&self, _question_count: usize) {}

    /// Called before an answer is sent for grading.
    fn on_evaluation_started(&self, _question_index: usize) {}

    /// Called once the grading response has been decoded.
    fn on_evaluation_completed(&self, _question_index: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SessionProgress for NoProgress {}
