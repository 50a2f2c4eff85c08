//! Infrastructure layer for mockmentor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod identity;
pub mod logging;
pub mod store;
pub mod transcribe;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGeneratorConfig, FileProfileConfig,
    FileStoreConfig, FileTranscriberConfig,
};
pub use gemini::GeminiTextGateway;
pub use identity::StaticIdentityProvider;
pub use logging::JsonlEventLogger;
pub use store::{InMemoryAssessmentStore, JsonlAssessmentStore};
pub use transcribe::HttpTranscriber;
