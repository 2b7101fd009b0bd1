//! Elo rating calculations for the player ladder
//!
//! Wraps the skillratings Elo implementation and rounds results to whole
//! rating points.

use crate::error::TournamentError;
use serde::{Deserialize, Serialize};
use skillratings::elo::{elo, expected_score, EloConfig, EloRating};
use skillratings::Outcomes;

/// Configuration for the Elo rating system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EloSettings {
    /// Maximum rating swing per game
    pub k_factor: f64,
    /// Rating given to players added to the ladder
    pub initial_rating: i32,
}

impl Default for EloSettings {
    fn default() -> Self {
        Self {
            k_factor: 32.0,
            initial_rating: 1200,
        }
    }
}

impl EloSettings {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !(self.k_factor > 0.0 && self.k_factor.is_finite()) {
            return Err(TournamentError::ConfigurationError {
                message: "K-factor must be a positive number".to_string(),
            });
        }

        if self.initial_rating <= 0 {
            return Err(TournamentError::ConfigurationError {
                message: "Initial rating must be positive".to_string(),
            });
        }

        Ok(())
    }

    fn elo_config(&self) -> EloConfig {
        EloConfig { k: self.k_factor }
    }
}

/// Elo calculator for decisive two-player games
#[derive(Debug, Clone)]
pub struct EloCalculator {
    settings: EloSettings,
}

impl EloCalculator {
    /// Create a new Elo calculator
    pub fn new(settings: EloSettings) -> crate::error::Result<Self> {
        settings.validate()?;

        Ok(Self { settings })
    }

    pub fn settings(&self) -> &EloSettings {
        &self.settings
    }

    /// Rating for players joining the ladder
    pub fn initial_rating(&self) -> i32 {
        self.settings.initial_rating
    }

    /// Probability that a player rated `rating` beats one rated `opponent`
    pub fn expected_score(&self, rating: i32, opponent: i32) -> f64 {
        let (expected, _) = expected_score(
            &EloRating {
                rating: rating as f64,
            },
            &EloRating {
                rating: opponent as f64,
            },
        );
        expected
    }

    /// New (winner, loser) ratings, both derived from the pre-match ratings
    pub fn rate_decisive(&self, winner_rating: i32, loser_rating: i32) -> (i32, i32) {
        let (winner, loser) = elo(
            &EloRating {
                rating: winner_rating as f64,
            },
            &EloRating {
                rating: loser_rating as f64,
            },
            &Outcomes::WIN,
            &self.settings.elo_config(),
        );

        (winner.rating.round() as i32, loser.rating.round() as i32)
    }
}

impl Default for EloCalculator {
    fn default() -> Self {
        Self {
            settings: EloSettings::default(),
        }
    }
}
