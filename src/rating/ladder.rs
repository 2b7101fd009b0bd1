//! Player ladder state and operations
//!
//! The ladder owns the player list and the match history. Every mutating
//! operation validates its input before touching state, so a rejected call
//! leaves the ladder exactly as it was.

use crate::error::{Result, TournamentError};
use crate::rating::elo::EloCalculator;
use crate::types::{LadderMatch, MatchId, Player, PlayerId, RatingChange, Standing};
use crate::utils::{rank_by, require_non_blank};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Names, ratings and records of the demo ladder
const DEMO_PLAYERS: [(&str, i32, u32, u32); 5] = [
    ("Player One", 1500, 15, 5),
    ("Player Two", 1450, 12, 8),
    ("Player Three", 1400, 10, 10),
    ("Player Four", 1350, 8, 12),
    ("Player Five", 1300, 5, 15),
];

/// Both sides of a recorded ladder game after the update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderOutcome {
    pub winner: Player,
    pub loser: Player,
    pub winner_change: RatingChange,
    pub loser_change: RatingChange,
}

/// Aggregate figures shown above the ladder table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderSummary {
    pub player_count: usize,
    /// Sum of every player's games played, one per participant per match
    pub total_games_played: u64,
    pub matches_recorded: usize,
    /// Rounded mean rating, 0 for an empty ladder
    pub average_rating: i32,
}

/// History row with names resolved for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderHistoryEntry {
    pub match_id: MatchId,
    pub winner_name: Option<String>,
    pub loser_name: Option<String>,
    pub played_at: DateTime<Utc>,
}

/// Elo ladder: players plus most-recent-first match history
#[derive(Debug, Clone, Default)]
pub struct Ladder {
    players: Vec<Player>,
    matches: Vec<LadderMatch>,
    calculator: EloCalculator,
}

impl Ladder {
    pub fn new(calculator: EloCalculator) -> Self {
        Self {
            players: Vec::new(),
            matches: Vec::new(),
            calculator,
        }
    }

    /// Players in insertion order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Recorded matches, most recent first
    pub fn matches(&self) -> &[LadderMatch] {
        &self.matches
    }

    pub fn calculator(&self) -> &EloCalculator {
        &self.calculator
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        let name = name.trim();
        self.players.iter().find(|p| p.name == name)
    }

    /// Add a player at the calculator's initial rating
    pub fn add_player(&mut self, id: PlayerId, name: &str) -> Result<&Player> {
        let name = require_non_blank("player name", name)
            .and_then(|name| self.ensure_unused(&id).map(|_| name))
            .inspect_err(|e| {
                warn!("Rejected new player: {}", e);
            })?;

        let player = Player::new(id, name, self.calculator.initial_rating());
        info!(
            "Player '{}' added with id {} at rating {}",
            player.name, player.id, player.rating
        );
        Ok(self.push_player(player))
    }

    /// Load the five demo players, ids are supplied by the caller
    pub fn seed_demo_players(&mut self, mut next_id: impl FnMut() -> PlayerId) {
        for (name, rating, wins, losses) in DEMO_PLAYERS {
            let id = next_id();
            if self.ensure_unused(&id).is_err() {
                warn!("Skipped demo player '{}': id {} already in use", name, id);
                continue;
            }
            self.push_player(Player::with_record(id, name, rating, wins, losses));
        }
        info!("Seeded ladder with {} demo players", DEMO_PLAYERS.len());
    }

    /// Record a decisive game and update both players' ratings and records
    pub fn record_match(
        &mut self,
        match_id: MatchId,
        winner_id: &str,
        loser_id: &str,
        played_at: DateTime<Utc>,
    ) -> Result<LadderOutcome> {
        let (winner_idx, loser_idx) = self.resolve_pair(winner_id, loser_id).inspect_err(|e| {
            warn!("Rejected ladder match {} vs {}: {}", winner_id, loser_id, e);
        })?;

        let old_winner = self.players[winner_idx].rating;
        let old_loser = self.players[loser_idx].rating;
        let (new_winner, new_loser) = self.calculator.rate_decisive(old_winner, old_loser);

        self.players[winner_idx].record_win(new_winner);
        self.players[loser_idx].record_loss(new_loser);

        self.matches.insert(
            0,
            LadderMatch {
                id: match_id,
                winner_id: winner_id.to_string(),
                loser_id: loser_id.to_string(),
                played_at,
            },
        );

        let winner = self.players[winner_idx].clone();
        let loser = self.players[loser_idx].clone();
        info!(
            "Ladder match recorded - '{}' {} -> {} beat '{}' {} -> {}",
            winner.name, old_winner, new_winner, loser.name, old_loser, new_loser
        );

        Ok(LadderOutcome {
            winner_change: RatingChange {
                player_id: winner.id.clone(),
                old_rating: old_winner,
                new_rating: new_winner,
            },
            loser_change: RatingChange {
                player_id: loser.id.clone(),
                old_rating: old_loser,
                new_rating: new_loser,
            },
            winner,
            loser,
        })
    }

    /// Players by rating, highest first; equal ratings keep insertion order
    pub fn standings(&self) -> Vec<Standing<'_, Player>> {
        rank_by(&self.players, |a, b| b.rating.cmp(&a.rating))
            .into_iter()
            .enumerate()
            .map(|(i, entry)| Standing {
                position: i + 1,
                entry,
            })
            .collect()
    }

    pub fn summary(&self) -> LadderSummary {
        let average_rating = if self.players.is_empty() {
            0
        } else {
            let total: i64 = self.players.iter().map(|p| p.rating as i64).sum();
            (total as f64 / self.players.len() as f64).round() as i32
        };

        LadderSummary {
            player_count: self.players.len(),
            total_games_played: self.players.iter().map(|p| p.games_played as u64).sum(),
            matches_recorded: self.matches.len(),
            average_rating,
        }
    }

    /// Up to `limit` latest matches with player names looked up
    pub fn recent_history(&self, limit: usize) -> Vec<LadderHistoryEntry> {
        self.matches
            .iter()
            .take(limit)
            .map(|m| LadderHistoryEntry {
                match_id: m.id.clone(),
                winner_name: self.player(&m.winner_id).map(|p| p.name.clone()),
                loser_name: self.player(&m.loser_id).map(|p| p.name.clone()),
                played_at: m.played_at,
            })
            .collect()
    }

    fn push_player(&mut self, player: Player) -> &Player {
        self.players.push(player);
        &self.players[self.players.len() - 1]
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    fn ensure_unused(&self, id: &str) -> Result<()> {
        match self.index_of(id) {
            Some(_) => Err(TournamentError::validation(
                "player id",
                format!("id {} is already in use", id),
            )),
            None => Ok(()),
        }
    }

    fn resolve_pair(&self, winner_id: &str, loser_id: &str) -> Result<(usize, usize)> {
        if winner_id == loser_id {
            return Err(TournamentError::invalid_match(
                "winner and loser must be different players",
            ));
        }

        let winner = self.index_of(winner_id).ok_or_else(|| {
            TournamentError::invalid_match(format!("unknown winner id {}", winner_id))
        })?;
        let loser = self.index_of(loser_id).ok_or_else(|| {
            TournamentError::invalid_match(format!("unknown loser id {}", loser_id))
        })?;

        Ok((winner, loser))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 18, minute, 0).unwrap()
    }

    fn ladder_with(players: &[(&str, i32)]) -> Ladder {
        let mut ladder = Ladder::default();
        for (i, (name, rating)) in players.iter().enumerate() {
            ladder
                .players
                .push(Player::new((i + 1).to_string(), *name, *rating));
        }
        ladder
    }

    #[test]
    fn test_add_player_defaults() {
        let mut ladder = Ladder::default();
        let player = ladder.add_player("p1".to_string(), "Ann").unwrap().clone();

        assert_eq!(player.name, "Ann");
        assert_eq!(player.rating, 1200);
        assert_eq!(player.wins, 0);
        assert_eq!(player.losses, 0);
        assert_eq!(player.games_played, 0);
        assert_eq!(player.win_rate, 0);
        assert_eq!(ladder.players().len(), 1);
    }

    #[test]
    fn test_add_player_rejects_blank_name() {
        let mut ladder = Ladder::default();

        assert!(ladder
            .add_player("p1".to_string(), "")
            .unwrap_err()
            .is_validation());
        assert!(ladder
            .add_player("p2".to_string(), "   ")
            .unwrap_err()
            .is_validation());
        assert!(ladder.players().is_empty());
    }

    #[test]
    fn test_record_match_equal_ratings() {
        let mut ladder = ladder_with(&[("A", 1500), ("B", 1500)]);
        let outcome = ladder.record_match("m1".to_string(), "1", "2", at(0)).unwrap();

        assert_eq!(outcome.winner.rating, 1516);
        assert_eq!(outcome.loser.rating, 1484);
        assert_eq!(outcome.winner_change.delta(), 16);
        assert_eq!(outcome.loser_change.delta(), -16);

        assert_eq!(outcome.winner.wins, 1);
        assert_eq!(outcome.winner.win_rate, 100);
        assert_eq!(outcome.loser.losses, 1);
        assert_eq!(outcome.loser.win_rate, 0);
        assert_eq!(outcome.loser.games_played, 1);
    }

    #[test]
    fn test_record_match_leaves_bystanders_alone() {
        let mut ladder = ladder_with(&[("A", 1500), ("B", 1400), ("C", 1300)]);
        let bystander = ladder.player("3").unwrap().clone();

        ladder.record_match("m1".to_string(), "2", "1", at(0)).unwrap();

        assert_eq!(ladder.player("3").unwrap(), &bystander);
    }

    #[test]
    fn test_self_match_is_rejected_without_mutation() {
        let mut ladder = ladder_with(&[("A", 1500), ("B", 1500)]);
        let before = ladder.players().to_vec();

        let err = ladder
            .record_match("m1".to_string(), "1", "1", at(0))
            .unwrap_err();

        assert!(err.is_invalid_match());
        assert_eq!(ladder.players(), before.as_slice());
        assert!(ladder.matches().is_empty());
    }

    #[test]
    fn test_unknown_player_is_rejected_without_mutation() {
        let mut ladder = ladder_with(&[("A", 1500), ("B", 1500)]);
        let before = ladder.players().to_vec();

        assert!(ladder
            .record_match("m1".to_string(), "1", "missing", at(0))
            .unwrap_err()
            .is_invalid_match());
        assert!(ladder
            .record_match("m2".to_string(), "missing", "2", at(0))
            .unwrap_err()
            .is_invalid_match());
        assert_eq!(ladder.players(), before.as_slice());
        assert!(ladder.matches().is_empty());
    }

    #[test]
    fn test_history_is_most_recent_first() {
        let mut ladder = ladder_with(&[("A", 1500), ("B", 1500)]);
        ladder.record_match("m1".to_string(), "1", "2", at(0)).unwrap();
        ladder.record_match("m2".to_string(), "2", "1", at(5)).unwrap();

        let ids: Vec<&str> = ladder.matches().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m2", "m1"]);

        let history = ladder.recent_history(1);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].match_id, "m2");
        assert_eq!(history[0].winner_name.as_deref(), Some("B"));
        assert_eq!(history[0].loser_name.as_deref(), Some("A"));
        assert_eq!(history[0].played_at, at(5));
    }

    #[test]
    fn test_standings_ties_keep_insertion_order() {
        let ladder = ladder_with(&[("A", 1400), ("B", 1500), ("C", 1400), ("D", 1500)]);

        let names: Vec<&str> = ladder
            .standings()
            .iter()
            .map(|s| s.entry.name.as_str())
            .collect();
        assert_eq!(names, vec!["B", "D", "A", "C"]);

        let positions: Vec<usize> = ladder.standings().iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_duplicate_player_id_rejected() {
        let mut ladder = Ladder::default();
        ladder.add_player("p1".to_string(), "Ann").unwrap();

        let err = ladder.add_player("p1".to_string(), "Bob").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ladder.players().len(), 1);
        assert_eq!(ladder.player("p1").unwrap().name, "Ann");

        // Seeding skips ids that are taken
        ladder.seed_demo_players(|| "p1".to_string());
        assert_eq!(ladder.players().len(), 1);
    }

    #[test]
    fn test_demo_seed_and_summary() {
        let mut ladder = Ladder::default();
        let mut next = 0;
        ladder.seed_demo_players(|| {
            next += 1;
            next.to_string()
        });

        let summary = ladder.summary();
        assert_eq!(summary.player_count, 5);
        assert_eq!(summary.total_games_played, 100);
        assert_eq!(summary.matches_recorded, 0);
        assert_eq!(summary.average_rating, 1400);

        let top = ladder.standings()[0].entry;
        assert_eq!(top.name, "Player One");
        assert_eq!(top.win_rate, 75);
        assert_eq!(ladder.find_by_name("Player Five").unwrap().win_rate, 25);
    }

    #[test]
    fn test_empty_summary() {
        let summary = Ladder::default().summary();
        assert_eq!(summary.player_count, 0);
        assert_eq!(summary.average_rating, 0);
        assert_eq!(summary.total_games_played, 0);
    }
}
