//! Core configuration and logging shared by the linemark crates
//!
//! - `config`: layered TOML configuration
//! - `logging`: `tracing` subscriber setup

pub mod config;
pub mod logging;

pub use config::{Config, ConfigError, DiffConfig, LogConfig, OutputConfig, OutputFormat};
pub use logging::init as init_logging;
