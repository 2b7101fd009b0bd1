//! Utility functions shared by the ladder and league engines

use crate::types::EntityId;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use uuid::Uuid;

/// Source of fresh entity identifiers, unique within a session
pub trait IdGenerator {
    fn next_id(&mut self) -> EntityId;
}

/// Random v4 UUIDs, used for interactive sessions
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> EntityId {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter rendered as decimal strings ("1", "2", ...)
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> EntityId {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

/// Source of match timestamps
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        current_timestamp()
    }
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// `round(wins / games * 100)`, or 0 before the first game
pub fn win_rate_percent(wins: u32, games_played: u32) -> u32 {
    if games_played == 0 {
        return 0;
    }
    (wins as f64 / games_played as f64 * 100.0).round() as u32
}

/// Parse a score typed by a user, falling back to 0.
///
/// Leading whitespace and a single `+` are skipped and the leading run of
/// ASCII digits is used, so "3 goals" and "+3" both read as 3. Empty,
/// negative, non-numeric and overflowing input all yield 0.
pub fn parse_score_lenient(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_end].parse().unwrap_or(0)
}

/// Stable sort of borrowed entries; equal elements keep their input order
pub fn rank_by<T, F>(items: &[T], mut compare: F) -> Vec<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by(|a, b| compare(a, b));
    ranked
}

/// Trim a required text field, rejecting blank input
pub fn require_non_blank(field: &str, value: &str) -> crate::error::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(crate::error::TournamentError::validation(
            field,
            "must not be blank",
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_unique_ids() {
        let mut generator = UuidIdGenerator;
        let id1 = generator.next_id();
        let id2 = generator.next_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_sequential_ids() {
        let mut generator = SequentialIdGenerator::starting_at(6);
        assert_eq!(generator.next_id(), "6");
        assert_eq!(generator.next_id(), "7");
    }

    #[test]
    fn test_win_rate_percent() {
        assert_eq!(win_rate_percent(0, 0), 0);
        assert_eq!(win_rate_percent(15, 20), 75);
        assert_eq!(win_rate_percent(1, 3), 33);
        assert_eq!(win_rate_percent(2, 3), 67);
        assert_eq!(win_rate_percent(1, 2), 50);
    }

    #[test]
    fn test_lenient_score_parsing() {
        assert_eq!(parse_score_lenient("3"), 3);
        assert_eq!(parse_score_lenient(" 2 "), 2);
        assert_eq!(parse_score_lenient("4 goals"), 4);
        assert_eq!(parse_score_lenient(""), 0);
        assert_eq!(parse_score_lenient("abc"), 0);
        assert_eq!(parse_score_lenient("-1"), 0);
        assert_eq!(parse_score_lenient("+3"), 3);
        assert_eq!(parse_score_lenient(" +2 goals"), 2);
        assert_eq!(parse_score_lenient("++3"), 0);
        assert_eq!(parse_score_lenient("+"), 0);
        assert_eq!(parse_score_lenient("99999999999999999999"), 0);
    }

    #[test]
    fn test_rank_by_is_stable() {
        let items = vec![(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd')];
        let ranked = rank_by(&items, |x, y| y.0.cmp(&x.0));
        let order: Vec<char> = ranked.iter().map(|(_, c)| *c).collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn test_require_non_blank() {
        assert_eq!(require_non_blank("name", "  Ann ").unwrap(), "Ann");
        assert!(require_non_blank("name", "   ").unwrap_err().is_validation());
        assert!(require_non_blank("name", "").unwrap_err().is_validation());
    }
}
