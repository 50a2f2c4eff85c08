//! Presentation layer for mockmentor
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive session runner.

pub mod cli;
pub mod output;
pub mod progress;
pub mod session;

// Re-export commonly used types
pub use cli::commands::{Cli, ModeArg, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::SpinnerProgress;
pub use session::runner::SessionRunner;
