//! Assessment store adapters.
//!
//! - [`JsonlAssessmentStore`] — append-only JSONL file, the default
//! - [`InMemoryAssessmentStore`] — volatile store for demo mode and tests

mod jsonl;
mod memory;

pub use jsonl::JsonlAssessmentStore;
pub use memory::InMemoryAssessmentStore;
