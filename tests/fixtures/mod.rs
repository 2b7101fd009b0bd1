//! Test fixtures shared by the integration tests

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use ladder_league::config::AppConfig;
use ladder_league::utils::{Clock, SequentialIdGenerator};
use ladder_league::Session;
use std::cell::Cell;

/// Clock that advances one minute on every reading
#[derive(Debug)]
pub struct SteppingClock {
    next: Cell<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            next: Cell::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.next.get();
        self.next.set(now + Duration::minutes(1));
        now
    }
}

/// Empty session with sequential ids ("1", "2", ...)
pub fn create_test_session() -> Session {
    Session::from_config(
        &AppConfig::default(),
        Box::new(SequentialIdGenerator::new()),
        Box::new(SteppingClock::new()),
    )
    .unwrap()
}

/// Session with the five demo players as ids "1" to "5"
pub fn create_demo_session() -> Session {
    let mut session = create_test_session();
    session.seed_demo_players();
    session
}

/// Session with the named teams added in order, returning their ids
pub fn create_league_session(names: &[&str]) -> (Session, Vec<String>) {
    let mut session = create_test_session();
    let ids = names
        .iter()
        .map(|name| session.add_team(name, "").unwrap().id)
        .collect();
    (session, ids)
}
