//! League table state and operations
//!
//! The league owns its teams (with rosters) and the fixture history. As with
//! the ladder, input is validated up front and a rejected call leaves every
//! team untouched.

use crate::error::{Result, TournamentError};
use crate::league::roster::{self, RosterInput, SHIRT_NUMBERS};
use crate::league::table::{apply_result, compare_standings};
use crate::types::{EntityId, LeagueMatch, MatchId, RosterEntry, Standing, Team, TeamId};
use crate::utils::{parse_score_lenient, rank_by, require_non_blank};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::{debug, info, warn};

/// Glyph used when a team is added without a logo
pub const DEFAULT_LOGO: &str = "⚽";

/// League-wide rules for new teams and rosters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueRules {
    pub default_logo: String,
    pub shirt_numbers: RangeInclusive<u8>,
}

impl Default for LeagueRules {
    fn default() -> Self {
        Self {
            default_logo: DEFAULT_LOGO.to_string(),
            shirt_numbers: SHIRT_NUMBERS,
        }
    }
}

/// Aggregate figures shown above the league table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueSummary {
    pub team_count: usize,
    pub matches_recorded: usize,
    pub total_goals: u64,
}

/// Fixture row with team names resolved for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueHistoryEntry {
    pub match_id: MatchId,
    pub home_name: Option<String>,
    pub away_name: Option<String>,
    pub home_score: u32,
    pub away_score: u32,
    pub played_at: DateTime<Utc>,
}

/// Football league: teams plus most-recent-first fixture history
#[derive(Debug, Clone, Default)]
pub struct League {
    teams: Vec<Team>,
    matches: Vec<LeagueMatch>,
    rules: LeagueRules,
}

impl League {
    pub fn new(rules: LeagueRules) -> Self {
        Self {
            teams: Vec::new(),
            matches: Vec::new(),
            rules,
        }
    }

    /// Teams in insertion order
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Recorded fixtures, most recent first
    pub fn matches(&self) -> &[LeagueMatch] {
        &self.matches
    }

    pub fn rules(&self) -> &LeagueRules {
        &self.rules
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Team> {
        let name = name.trim();
        self.teams.iter().find(|t| t.name == name)
    }

    /// Add a team with a clean record; a blank logo falls back to the default
    pub fn add_team(&mut self, id: TeamId, name: &str, logo: &str) -> Result<&Team> {
        let name = require_non_blank("team name", name)
            .and_then(|name| match self.index_of(&id) {
                Some(_) => Err(TournamentError::validation(
                    "team id",
                    format!("id {} is already in use", id),
                )),
                None => Ok(name),
            })
            .inspect_err(|e| {
                warn!("Rejected new team: {}", e);
            })?;
        let logo = match logo.trim() {
            "" => self.rules.default_logo.clone(),
            glyph => glyph.to_string(),
        };

        let team = Team::new(id, name, logo);
        info!("Team '{}' added with id {}", team.name, team.id);
        self.teams.push(team);
        Ok(&self.teams[self.teams.len() - 1])
    }

    /// Record a finished fixture and update both table rows
    pub fn record_match(
        &mut self,
        match_id: MatchId,
        home_id: &str,
        away_id: &str,
        home_score: u32,
        away_score: u32,
        played_at: DateTime<Utc>,
    ) -> Result<(Team, Team)> {
        let (home_idx, away_idx) = self.resolve_pair(home_id, away_id).inspect_err(|e| {
            warn!("Rejected league match {} vs {}: {}", home_id, away_id, e);
        })?;

        let mut home = self.teams[home_idx].clone();
        let mut away = self.teams[away_idx].clone();
        apply_result(&mut home, home_score, away_score)
            .zip(apply_result(&mut away, away_score, home_score))
            .ok_or_else(|| TournamentError::validation("score", "goal totals would overflow"))
            .inspect_err(|e| {
                warn!("Rejected league match {} vs {}: {}", home_id, away_id, e);
            })?;
        self.teams[home_idx] = home.clone();
        self.teams[away_idx] = away.clone();

        self.matches.insert(
            0,
            LeagueMatch {
                id: match_id,
                home_team_id: home_id.to_string(),
                away_team_id: away_id.to_string(),
                home_score,
                away_score,
                played_at,
            },
        );

        info!(
            "League match recorded - {} {}-{} {} (points {} / {})",
            home.name, home_score, away_score, away.name, home.points, away.points
        );

        Ok((home, away))
    }

    /// Same as [`record_match`](Self::record_match) but takes scores as typed;
    /// anything that does not start with digits counts as 0
    pub fn record_match_from_input(
        &mut self,
        match_id: MatchId,
        home_id: &str,
        away_id: &str,
        home_score: &str,
        away_score: &str,
        played_at: DateTime<Utc>,
    ) -> Result<(Team, Team)> {
        let home = parse_score_lenient(home_score);
        let away = parse_score_lenient(away_score);
        debug!(
            "Parsed scores '{}' -> {}, '{}' -> {}",
            home_score, home, away_score, away
        );

        self.record_match(match_id, home_id, away_id, home, away, played_at)
    }

    /// Append a player to a team's roster
    pub fn add_roster_entry(
        &mut self,
        entry_id: EntityId,
        team_id: &str,
        input: RosterInput<'_>,
    ) -> Result<RosterEntry> {
        let valid = roster::validate(input, &self.rules.shirt_numbers)
            .inspect_err(|e| warn!("Rejected roster entry for team {}: {}", team_id, e))?;

        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| {
                warn!("Rejected roster entry for unknown team {}", team_id);
                TournamentError::validation("team", format!("unknown team id {}", team_id))
            })?;

        let entry = valid.into_entry(entry_id);
        info!(
            "Added #{} {} ({}) to '{}'",
            entry.number, entry.name, entry.position, team.name
        );
        team.roster.push(entry.clone());
        Ok(entry)
    }

    /// Roster of one team by shirt number, or `None` for an unknown team
    pub fn roster(&self, team_id: &str) -> Option<Vec<&RosterEntry>> {
        self.team(team_id).map(|t| roster::by_shirt_number(&t.roster))
    }

    /// Teams in table order; complete ties keep insertion order
    pub fn standings(&self) -> Vec<Standing<'_, Team>> {
        rank_by(&self.teams, compare_standings)
            .into_iter()
            .enumerate()
            .map(|(i, entry)| Standing {
                position: i + 1,
                entry,
            })
            .collect()
    }

    pub fn summary(&self) -> LeagueSummary {
        LeagueSummary {
            team_count: self.teams.len(),
            matches_recorded: self.matches.len(),
            total_goals: self
                .matches
                .iter()
                .map(|m| m.home_score as u64 + m.away_score as u64)
                .sum(),
        }
    }

    /// Up to `limit` latest fixtures with team names looked up
    pub fn recent_history(&self, limit: usize) -> Vec<LeagueHistoryEntry> {
        self.matches
            .iter()
            .take(limit)
            .map(|m| LeagueHistoryEntry {
                match_id: m.id.clone(),
                home_name: self.team(&m.home_team_id).map(|t| t.name.clone()),
                away_name: self.team(&m.away_team_id).map(|t| t.name.clone()),
                home_score: m.home_score,
                away_score: m.away_score,
                played_at: m.played_at,
            })
            .collect()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.teams.iter().position(|t| t.id == id)
    }

    fn resolve_pair(&self, home_id: &str, away_id: &str) -> Result<(usize, usize)> {
        if home_id == away_id {
            return Err(TournamentError::invalid_match(
                "home and away must be different teams",
            ));
        }

        let home = self.index_of(home_id).ok_or_else(|| {
            TournamentError::invalid_match(format!("unknown home team id {}", home_id))
        })?;
        let away = self.index_of(away_id).ok_or_else(|| {
            TournamentError::invalid_match(format!("unknown away team id {}", away_id))
        })?;

        Ok((home, away))
    }
}
