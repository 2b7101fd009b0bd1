//! Common types used by the ladder and league engines

use crate::error::TournamentError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Opaque identifier handed out by an [`IdGenerator`](crate::utils::IdGenerator)
pub type EntityId = String;

/// Unique identifier for ladder players
pub type PlayerId = EntityId;

/// Unique identifier for league teams
pub type TeamId = EntityId;

/// Unique identifier for recorded matches
pub type MatchId = EntityId;

/// A ladder participant with an Elo rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub rating: i32,
    pub wins: u32,
    pub losses: u32,
    pub games_played: u32,
    /// Whole-number percentage, 0 until the first game
    pub win_rate: u32,
}

impl Player {
    /// Create a player with no games played
    pub fn new(id: PlayerId, name: impl Into<String>, rating: i32) -> Self {
        Self {
            id,
            name: name.into(),
            rating,
            wins: 0,
            losses: 0,
            games_played: 0,
            win_rate: 0,
        }
    }

    /// Create a player with an existing record, deriving games and win rate
    pub fn with_record(
        id: PlayerId,
        name: impl Into<String>,
        rating: i32,
        wins: u32,
        losses: u32,
    ) -> Self {
        let mut player = Self::new(id, name, rating);
        player.wins = wins;
        player.losses = losses;
        player.games_played = wins + losses;
        player.win_rate = crate::utils::win_rate_percent(wins, player.games_played);
        player
    }

    pub(crate) fn record_win(&mut self, new_rating: i32) {
        self.wins += 1;
        self.games_played += 1;
        self.rating = new_rating;
        self.win_rate = crate::utils::win_rate_percent(self.wins, self.games_played);
    }

    pub(crate) fn record_loss(&mut self, new_rating: i32) {
        self.losses += 1;
        self.games_played += 1;
        self.rating = new_rating;
        self.win_rate = crate::utils::win_rate_percent(self.wins, self.games_played);
    }
}

/// A decided ladder game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderMatch {
    pub id: MatchId,
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub played_at: DateTime<Utc>,
}

/// Rating movement for one player in one ladder match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingChange {
    pub player_id: PlayerId,
    pub old_rating: i32,
    pub new_rating: i32,
}

impl RatingChange {
    pub fn delta(&self) -> i32 {
        self.new_rating - self.old_rating
    }
}

/// Playing position of a rostered footballer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Goalkeeper => write!(f, "goalkeeper"),
            Position::Defender => write!(f, "defender"),
            Position::Midfielder => write!(f, "midfielder"),
            Position::Forward => write!(f, "forward"),
        }
    }
}

impl FromStr for Position {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "goalkeeper" => Ok(Position::Goalkeeper),
            "defender" => Ok(Position::Defender),
            "midfielder" => Ok(Position::Midfielder),
            "forward" => Ok(Position::Forward),
            other => Err(TournamentError::validation(
                "position",
                format!(
                    "'{}' is not one of goalkeeper, defender, midfielder, forward",
                    other
                ),
            )),
        }
    }
}

/// A player on a team's roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
    pub number: u8,
}

/// A league club and its cumulative table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub logo: String,
    pub points: u32,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub roster: Vec<RosterEntry>,
}

impl Team {
    /// Create a team with an empty record and roster
    pub fn new(id: TeamId, name: impl Into<String>, logo: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            logo: logo.into(),
            points: 0,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            roster: Vec::new(),
        }
    }
}

/// A finished league fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueMatch {
    pub id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_score: u32,
    pub away_score: u32,
    pub played_at: DateTime<Utc>,
}

/// One row of a standings projection, positions start at 1
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing<'a, T> {
    pub position: usize,
    pub entry: &'a T,
}
