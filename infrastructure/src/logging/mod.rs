//! Logging infrastructure: structured session event logging.
//!
//! Provides [`JsonlEventLogger`], a JSONL file writer that implements
//! the [`EventLogger`](mentor_application::EventLogger) port.

mod jsonl_events;

pub use jsonl_events::JsonlEventLogger;
