//! Event scripts for replaying a session
//!
//! A script is a TOML list of `[[events]]`, each tagged with a `type`.
//! Players and teams are referred to by name; the first entity with that
//! name is used, and a reference that matches no name is passed through
//! as an id.
//!
//! ```toml
//! [[events]]
//! type = "add_player"
//! name = "Ann"
//!
//! [[events]]
//! type = "ladder_match"
//! winner = "Ann"
//! loser = "Bob"
//!
//! [[events]]
//! type = "league_match"
//! home = "Dynamo"
//! away = "Spartak"
//! home_score = 2
//! away_score = "1"
//! ```

use crate::error::{Result, TournamentError};
use crate::session::Session;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A number or free text, as a form field would deliver it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldInput {
    Number(i64),
    Text(String),
}

impl FieldInput {
    pub fn as_text(&self) -> String {
        match self {
            FieldInput::Number(n) => n.to_string(),
            FieldInput::Text(s) => s.clone(),
        }
    }
}

impl Default for FieldInput {
    fn default() -> Self {
        FieldInput::Text(String::new())
    }
}

/// One user action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    AddPlayer {
        name: String,
    },
    LadderMatch {
        winner: String,
        loser: String,
    },
    AddTeam {
        name: String,
        #[serde(default)]
        logo: String,
    },
    LeagueMatch {
        home: String,
        away: String,
        #[serde(default)]
        home_score: FieldInput,
        #[serde(default)]
        away_score: FieldInput,
    },
    AddRosterEntry {
        team: String,
        name: String,
        position: String,
        number: FieldInput,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// An event the session refused, with its 1-based position in the script
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedEvent {
    pub index: usize,
    pub event: ScriptEvent,
    pub error: TournamentError,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplayReport {
    pub applied: usize,
    pub rejected: Vec<RejectedEvent>,
}

impl Script {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| TournamentError::ScriptError {
            message: e.to_string(),
        })
    }

    /// Apply every event in order; rejected events are reported, not fatal
    pub fn replay(&self, session: &mut Session) -> ReplayReport {
        let mut report = ReplayReport::default();

        for (i, event) in self.events.iter().enumerate() {
            match apply_event(session, event) {
                Ok(()) => report.applied += 1,
                Err(error) => {
                    warn!("Script event {} rejected: {}", i + 1, error);
                    report.rejected.push(RejectedEvent {
                        index: i + 1,
                        event: event.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            "Replay finished - {} applied, {} rejected",
            report.applied,
            report.rejected.len()
        );
        report
    }
}

fn player_ref(session: &Session, reference: &str) -> String {
    session
        .ladder()
        .find_by_name(reference)
        .map(|p| p.id.clone())
        .unwrap_or_else(|| reference.to_string())
}

fn team_ref(session: &Session, reference: &str) -> String {
    session
        .league()
        .find_by_name(reference)
        .map(|t| t.id.clone())
        .unwrap_or_else(|| reference.to_string())
}

fn apply_event(session: &mut Session, event: &ScriptEvent) -> Result<()> {
    match event {
        ScriptEvent::AddPlayer { name } => {
            session.add_player(name)?;
        }
        ScriptEvent::LadderMatch { winner, loser } => {
            let winner = player_ref(session, winner);
            let loser = player_ref(session, loser);
            session.record_ladder_match(&winner, &loser)?;
        }
        ScriptEvent::AddTeam { name, logo } => {
            session.add_team(name, logo)?;
        }
        ScriptEvent::LeagueMatch {
            home,
            away,
            home_score,
            away_score,
        } => {
            let home = team_ref(session, home);
            let away = team_ref(session, away);
            session.record_league_match(
                &home,
                &away,
                &home_score.as_text(),
                &away_score.as_text(),
            )?;
        }
        ScriptEvent::AddRosterEntry {
            team,
            name,
            position,
            number,
        } => {
            let team = team_ref(session, team);
            session.add_roster_entry(&team, name, position, &number.as_text())?;
        }
    }
    Ok(())
}
