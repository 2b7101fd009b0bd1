//! Football league table
//!
//! This module handles team registration, fixture results, points-table
//! ranking and team rosters.

pub mod manager;
pub mod roster;
pub mod table;

// Re-export commonly used types
pub use manager::{League, LeagueHistoryEntry, LeagueRules, LeagueSummary, DEFAULT_LOGO};
pub use roster::RosterInput;
pub use table::{compare_standings, MatchResult};
