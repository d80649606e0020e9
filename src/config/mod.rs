//! Application configuration.
//!
//! Loaded once at startup from a TOML file; a missing file means defaults.
//! CLI flags override individual fields after loading.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, UiConfig};
