//! Configuration file loading for epic-quotes
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `EPIC_QUOTES_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./epic-quotes.toml` or `./.epic-quotes.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/epic-quotes/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileOutputConfig, FileQuoteConfig, FileSubscriptionConfig, FileTuiConfig,
};
pub use loader::ConfigLoader;
