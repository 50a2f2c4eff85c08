//! Configuration file loading for mockmentor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MOCKMENTOR_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./mockmentor.toml` or `./.mockmentor.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/mockmentor/config.toml`
//! 5. Fallback: `~/.config/mockmentor/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGeneratorConfig, FileProfileConfig, FileStoreConfig,
    FileTranscriberConfig,
};
pub use loader::ConfigLoader;
