//! Session facade over the ladder and the league
//!
//! A session is the single in-memory store a front end talks to. It hands
//! out identifiers and timestamps, forwards raw user input to the engines
//! and returns either the updated entities or a typed error.

use crate::config::AppConfig;
use crate::error::Result;
use crate::league::{League, LeagueRules, RosterInput};
use crate::rating::{EloCalculator, Ladder, LadderOutcome};
use crate::types::{Player, RosterEntry, Standing, Team};
use crate::utils::{Clock, IdGenerator, SystemClock, UuidIdGenerator};

pub struct Session {
    ladder: Ladder,
    league: League,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("ladder", &self.ladder)
            .field("league", &self.league)
            .finish_non_exhaustive()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(
            Ladder::default(),
            League::default(),
            Box::new(UuidIdGenerator),
            Box::new(SystemClock),
        )
    }
}

impl Session {
    pub fn new(
        ladder: Ladder,
        league: League,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            ladder,
            league,
            ids,
            clock,
        }
    }

    /// Build engines from configuration, seeding the demo ladder if enabled
    pub fn from_config(
        config: &AppConfig,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        let calculator = EloCalculator::new(config.ladder.elo_settings())?;
        let rules: LeagueRules = config.league.rules();

        let mut session = Self::new(Ladder::new(calculator), League::new(rules), ids, clock);
        if config.ladder.seed_demo_players {
            session.seed_demo_players();
        }
        Ok(session)
    }

    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    pub fn seed_demo_players(&mut self) {
        let ids = &mut self.ids;
        self.ladder.seed_demo_players(|| ids.next_id());
    }

    pub fn add_player(&mut self, name: &str) -> Result<Player> {
        let id = self.ids.next_id();
        self.ladder.add_player(id, name).cloned()
    }

    pub fn record_ladder_match(&mut self, winner_id: &str, loser_id: &str) -> Result<LadderOutcome> {
        let id = self.ids.next_id();
        let at = self.clock.now();
        self.ladder.record_match(id, winner_id, loser_id, at)
    }

    pub fn add_team(&mut self, name: &str, logo: &str) -> Result<Team> {
        let id = self.ids.next_id();
        self.league.add_team(id, name, logo).cloned()
    }

    /// Scores are taken as typed and parsed leniently
    pub fn record_league_match(
        &mut self,
        home_id: &str,
        away_id: &str,
        home_score: &str,
        away_score: &str,
    ) -> Result<(Team, Team)> {
        let id = self.ids.next_id();
        let at = self.clock.now();
        self.league
            .record_match_from_input(id, home_id, away_id, home_score, away_score, at)
    }

    /// Record a fixture whose scores are already numbers
    pub fn record_league_result(
        &mut self,
        home_id: &str,
        away_id: &str,
        home_score: u32,
        away_score: u32,
    ) -> Result<(Team, Team)> {
        let id = self.ids.next_id();
        let at = self.clock.now();
        self.league
            .record_match(id, home_id, away_id, home_score, away_score, at)
    }

    pub fn add_roster_entry(
        &mut self,
        team_id: &str,
        name: &str,
        position: &str,
        number: &str,
    ) -> Result<RosterEntry> {
        let id = self.ids.next_id();
        self.league.add_roster_entry(
            id,
            team_id,
            RosterInput {
                name,
                position,
                number,
            },
        )
    }

    pub fn ladder_standings(&self) -> Vec<Standing<'_, Player>> {
        self.ladder.standings()
    }

    pub fn league_standings(&self) -> Vec<Standing<'_, Team>> {
        self.league.standings()
    }
}
