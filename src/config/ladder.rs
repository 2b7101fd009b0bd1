//! Ladder configuration

use crate::rating::EloSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    pub initial_rating: i32,
    pub k_factor: f64,
    /// Number of matches shown in the recent history
    pub history_limit: usize,
    /// Start the ladder with the five demo players
    pub seed_demo_players: bool,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            initial_rating: 1200,
            k_factor: 32.0,
            history_limit: 10,
            seed_demo_players: false,
        }
    }
}

impl LadderConfig {
    pub fn elo_settings(&self) -> EloSettings {
        EloSettings {
            k_factor: self.k_factor,
            initial_rating: self.initial_rating,
        }
    }
}
