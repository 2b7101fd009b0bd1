//! Plain-text tables for the command line

use crate::league::{LeagueHistoryEntry, LeagueSummary};
use crate::rating::{LadderHistoryEntry, LadderSummary};
use crate::types::{Player, RosterEntry, Standing, Team};

const UNKNOWN: &str = "?";

/// Join rendered rows, one per line with a trailing newline
fn lines<I>(rows: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut out = String::new();
    for row in rows {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

pub fn ladder_table(standings: &[Standing<'_, Player>]) -> String {
    let header = format!(
        "{:>3}  {:<20} {:>6} {:>5} {:>4} {:>6} {:>5}",
        "#", "Player", "Rating", "Games", "Wins", "Losses", "Win%"
    );
    let rows = standings.iter().map(|row| {
        let p = row.entry;
        format!(
            "{:>3}  {:<20} {:>6} {:>5} {:>4} {:>6} {:>4}%",
            row.position, p.name, p.rating, p.games_played, p.wins, p.losses, p.win_rate
        )
    });
    lines(std::iter::once(header).chain(rows))
}

pub fn ladder_summary(summary: &LadderSummary) -> String {
    format!(
        "Players: {}  Games played: {}  Average rating: {}",
        summary.player_count, summary.total_games_played, summary.average_rating
    )
}

pub fn ladder_history(history: &[LadderHistoryEntry]) -> String {
    lines(history.iter().map(|entry| {
        format!(
            "{}  {} beat {}",
            entry.played_at.format("%H:%M"),
            entry.winner_name.as_deref().unwrap_or(UNKNOWN),
            entry.loser_name.as_deref().unwrap_or(UNKNOWN)
        )
    }))
}

pub fn league_table(standings: &[Standing<'_, Team>]) -> String {
    let header = format!(
        "{:>3}  {:<22} {:>2} {:>2} {:>2} {:>2} {:>3} {:>3} {:>4} {:>3}",
        "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    );
    let rows = standings.iter().map(|row| {
        let t = row.entry;
        format!(
            "{:>3}  {:<22} {:>2} {:>2} {:>2} {:>2} {:>3} {:>3} {:>+4} {:>3}",
            row.position,
            format!("{} {}", t.logo, t.name),
            t.played,
            t.wins,
            t.draws,
            t.losses,
            t.goals_for,
            t.goals_against,
            t.goal_difference,
            t.points
        )
    });
    lines(std::iter::once(header).chain(rows))
}

pub fn league_summary(summary: &LeagueSummary) -> String {
    format!(
        "Teams: {}  Matches: {}  Goals: {}",
        summary.team_count, summary.matches_recorded, summary.total_goals
    )
}

pub fn league_history(history: &[LeagueHistoryEntry]) -> String {
    lines(history.iter().map(|entry| {
        format!(
            "{}  {} {}-{} {}",
            entry.played_at.format("%H:%M"),
            entry.home_name.as_deref().unwrap_or(UNKNOWN),
            entry.home_score,
            entry.away_score,
            entry.away_name.as_deref().unwrap_or(UNKNOWN)
        )
    }))
}

pub fn roster(team: &Team, entries: &[&RosterEntry]) -> String {
    let header = format!("{} {}", team.logo, team.name);
    let rows = entries
        .iter()
        .map(|entry| format!("  {:>2}  {:<20} {}", entry.number, entry.name, entry.position));
    lines(std::iter::once(header).chain(rows))
}
