//! Player ladder with Elo ratings
//!
//! This module provides the Elo calculator (backed by the skillratings
//! crate) and the ladder that applies it to recorded games.

pub mod elo;
pub mod ladder;

// Re-export commonly used types
pub use elo::{EloCalculator, EloSettings};
pub use ladder::{Ladder, LadderHistoryEntry, LadderOutcome, LadderSummary};
