//! Port for structured session event logging.
//!
//! Defines the [`EventLogger`] trait for recording session events
//! (assessment saved, tip generation degraded, etc.) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable audit trail, including swallowed failures that would
//! otherwise be invisible.

use serde_json::Value;

/// A structured session event for logging.
pub struct SessionEvent {
    /// Event type identifier (e.g., "assessment_saved", "tip_degraded").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl SessionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging session events to a structured log.
///
/// The `log` method is intentionally synchronous and non-fallible to avoid
/// disrupting the main execution flow — logging failures are silently
/// ignored.
pub trait EventLogger: Send + Sync {
    fn log(&self, event: SessionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoEventLogger;

impl EventLogger for NoEventLogger {
    fn log(&self, _event: SessionEvent) {}
}
