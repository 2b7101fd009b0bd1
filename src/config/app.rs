//! Main application configuration
//!
//! This module defines the primary configuration structures for ladder-league,
//! including TOML and environment variable loading and validation.

use crate::config::{LadderConfig, LeagueConfig};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub ladder: LadderConfig,
    pub league: LeagueConfig,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name shown in the startup banner
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "ladder-league".to_string(),
            log_level: "info".to_string(),
        }
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| anyhow!("Invalid {} value: {}", key, value))
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(|key| env::var(key).ok())?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Override fields from `lookup`, which maps variable names to values
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Service settings
        if let Some(name) = lookup("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Some(log_level) = lookup("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Ladder settings
        if let Some(rating) = lookup("LADDER_INITIAL_RATING") {
            self.ladder.initial_rating = parse_var("LADDER_INITIAL_RATING", &rating)?;
        }
        if let Some(k) = lookup("LADDER_K_FACTOR") {
            self.ladder.k_factor = parse_var("LADDER_K_FACTOR", &k)?;
        }
        if let Some(limit) = lookup("LADDER_HISTORY_LIMIT") {
            self.ladder.history_limit = parse_var("LADDER_HISTORY_LIMIT", &limit)?;
        }
        if let Some(seed) = lookup("LADDER_SEED_DEMO") {
            self.ladder.seed_demo_players = parse_var("LADDER_SEED_DEMO", &seed)?;
        }

        // League settings
        if let Some(logo) = lookup("LEAGUE_DEFAULT_LOGO") {
            self.league.default_logo = logo;
        }
        if let Some(limit) = lookup("LEAGUE_HISTORY_LIMIT") {
            self.league.history_limit = parse_var("LEAGUE_HISTORY_LIMIT", &limit)?;
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate ladder settings
    config
        .ladder
        .elo_settings()
        .validate()
        .map_err(|e| anyhow!("Invalid ladder settings: {}", e))?;

    // Validate league settings
    if config.league.default_logo.trim().is_empty() {
        return Err(anyhow!("Default team logo cannot be empty"));
    }
    if config.league.shirt_number_min == 0 {
        return Err(anyhow!("Shirt numbers must start at 1 or above"));
    }
    if config.league.shirt_number_min > config.league.shirt_number_max {
        return Err(anyhow!(
            "Shirt number range {}..={} is empty",
            config.league.shirt_number_min,
            config.league.shirt_number_max
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.ladder.initial_rating, 1200);
        assert_eq!(config.ladder.k_factor, 32.0);
        assert_eq!(config.ladder.history_limit, 10);
        assert_eq!(config.league.default_logo, "⚽");
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [ladder]
            k_factor = 24.0
            seed_demo_players = true

            [league]
            shirt_number_max = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.ladder.k_factor, 24.0);
        assert!(config.ladder.seed_demo_players);
        assert_eq!(config.ladder.initial_rating, 1200);
        assert_eq!(config.league.shirt_number_max, 50);
        assert_eq!(config.service.log_level, "info");
    }

    #[test]
    fn test_invalid_toml_values() {
        assert!(AppConfig::from_toml_str("[service]\nlog_level = \"loud\"").is_err());
        assert!(AppConfig::from_toml_str("[ladder]\nk_factor = 0.0").is_err());
        assert!(AppConfig::from_toml_str(
            "[league]\nshirt_number_min = 10\nshirt_number_max = 5"
        )
        .is_err());
        assert!(AppConfig::from_toml_str("[league]\ndefault_logo = \" \"").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("LOG_LEVEL", "debug"),
            ("LADDER_K_FACTOR", "16"),
            ("LADDER_SEED_DEMO", "true"),
            ("LEAGUE_DEFAULT_LOGO", "🏆"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config
            .apply_env(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.service.log_level, "debug");
        assert_eq!(config.ladder.k_factor, 16.0);
        assert!(config.ladder.seed_demo_players);
        assert_eq!(config.league.default_logo, "🏆");
    }

    #[test]
    fn test_env_parse_errors() {
        let mut config = AppConfig::default();
        let result = config.apply_env(|key| {
            (key == "LADDER_INITIAL_RATING").then(|| "high".to_string())
        });
        assert!(result.is_err());
    }
}
