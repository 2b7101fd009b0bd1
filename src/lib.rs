//! Ladder League - rating and standings engines
//!
//! This crate provides an Elo player ladder and a football league table,
//! both held in an in-memory session and driven by user-supplied results.

pub mod config;
pub mod error;
pub mod league;
pub mod rating;
pub mod render;
pub mod script;
pub mod session;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Result, TournamentError};
pub use types::*;

// Re-export key components
pub use league::League;
pub use rating::{EloCalculator, Ladder};
pub use session::Session;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
