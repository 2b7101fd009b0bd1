//! League configuration

use crate::league::{LeagueRules, DEFAULT_LOGO};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Logo for teams added without one
    pub default_logo: String,
    pub shirt_number_min: u8,
    pub shirt_number_max: u8,
    /// Number of fixtures shown in the recent history
    pub history_limit: usize,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            default_logo: DEFAULT_LOGO.to_string(),
            shirt_number_min: 1,
            shirt_number_max: 99,
            history_limit: 10,
        }
    }
}

impl LeagueConfig {
    pub fn rules(&self) -> LeagueRules {
        LeagueRules {
            default_logo: self.default_logo.clone(),
            shirt_numbers: self.shirt_number_min..=self.shirt_number_max,
        }
    }
}
