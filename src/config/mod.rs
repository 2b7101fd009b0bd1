//! Configuration management for ladder-league
//!
//! This module handles configuration loading from TOML files and
//! environment variables, validation, and default values.

pub mod app;
pub mod ladder;
pub mod league;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use ladder::LadderConfig;
pub use league::LeagueConfig;
