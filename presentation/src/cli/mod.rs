//! CLI definitions

pub mod commands;

pub use commands::{Cli, ModeArg, OutputFormat};
