//! Points-table arithmetic
//!
//! Three points for a win, one for a draw, none for a loss. Teams are ranked
//! on points, then goal difference, then goals scored.

use crate::types::Team;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;
pub const POINTS_FOR_LOSS: u32 = 0;

/// Result of a fixture from one team's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    pub fn from_scores(own: u32, opponent: u32) -> Self {
        match own.cmp(&opponent) {
            Ordering::Greater => MatchResult::Win,
            Ordering::Equal => MatchResult::Draw,
            Ordering::Less => MatchResult::Loss,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            MatchResult::Win => POINTS_FOR_WIN,
            MatchResult::Draw => POINTS_FOR_DRAW,
            MatchResult::Loss => POINTS_FOR_LOSS,
        }
    }
}

/// Fold one fixture into a team's table row
///
/// Returns `None` and leaves the row untouched when a running total would
/// overflow.
pub fn apply_result(team: &mut Team, own: u32, opponent: u32) -> Option<MatchResult> {
    let result = MatchResult::from_scores(own, opponent);

    let (wins, draws, losses) = match result {
        MatchResult::Win => (team.wins.checked_add(1)?, team.draws, team.losses),
        MatchResult::Draw => (team.wins, team.draws.checked_add(1)?, team.losses),
        MatchResult::Loss => (team.wins, team.draws, team.losses.checked_add(1)?),
    };
    let played = team.played.checked_add(1)?;
    let points = team.points.checked_add(result.points())?;
    let goals_for = team.goals_for.checked_add(own)?;
    let goals_against = team.goals_against.checked_add(opponent)?;

    team.played = played;
    team.wins = wins;
    team.draws = draws;
    team.losses = losses;
    team.points = points;
    team.goals_for = goals_for;
    team.goals_against = goals_against;
    team.goal_difference = goals_for as i64 - goals_against as i64;

    Some(result)
}

/// Table order: points, goal difference, goals for, all descending
pub fn compare_standings(a: &Team, b: &Team) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str) -> Team {
        Team::new(name.to_string(), name, "⚽")
    }

    #[test]
    fn test_win_and_loss() {
        let mut home = team("home");
        let mut away = team("away");

        assert_eq!(apply_result(&mut home, 3, 1), Some(MatchResult::Win));
        assert_eq!(apply_result(&mut away, 1, 3), Some(MatchResult::Loss));

        assert_eq!(home.points, 3);
        assert_eq!(home.wins, 1);
        assert_eq!(home.goal_difference, 2);
        assert_eq!(away.points, 0);
        assert_eq!(away.losses, 1);
        assert_eq!(away.goal_difference, -2);
        assert_eq!(away.goals_for, 1);
        assert_eq!(away.goals_against, 3);
    }

    #[test]
    fn test_draw() {
        let mut side = team("side");
        assert_eq!(apply_result(&mut side, 2, 2), Some(MatchResult::Draw));

        assert_eq!(side.played, 1);
        assert_eq!(side.draws, 1);
        assert_eq!(side.points, 1);
        assert_eq!(side.goal_difference, 0);
    }

    #[test]
    fn test_goal_overflow_leaves_row_untouched() {
        let mut side = team("side");
        assert_eq!(apply_result(&mut side, u32::MAX, 0), Some(MatchResult::Win));
        let before = side.clone();

        assert_eq!(apply_result(&mut side, 1, 0), None);
        assert_eq!(side, before);
    }

    #[test]
    fn test_tie_breaks() {
        let mut a = team("a");
        a.points = 10;
        a.goal_difference = 2;
        a.goals_for = 8;

        let mut b = a.clone();
        b.goal_difference = 5;
        assert_eq!(compare_standings(&a, &b), Ordering::Greater);

        let mut c = a.clone();
        c.goals_for = 12;
        assert_eq!(compare_standings(&a, &c), Ordering::Greater);

        let mut d = a.clone();
        d.points = 9;
        d.goal_difference = 20;
        assert_eq!(compare_standings(&a, &d), Ordering::Less);

        assert_eq!(compare_standings(&a, &a.clone()), Ordering::Equal);
    }
}
