//! Roster entry validation and display order

use crate::error::{Result, TournamentError};
use crate::types::{Position, RosterEntry};
use crate::utils::{rank_by, require_non_blank};
use std::ops::RangeInclusive;

/// Default range of printable shirt numbers
pub const SHIRT_NUMBERS: RangeInclusive<u8> = 1..=99;

/// Raw roster form input, as typed by the user
#[derive(Debug, Clone, Copy)]
pub struct RosterInput<'a> {
    pub name: &'a str,
    pub position: &'a str,
    pub number: &'a str,
}

/// Validated roster fields, ready to be given an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRoster {
    pub name: String,
    pub position: Position,
    pub number: u8,
}

impl ValidRoster {
    pub fn into_entry(self, id: String) -> RosterEntry {
        RosterEntry {
            id,
            name: self.name,
            position: self.position,
            number: self.number,
        }
    }
}

/// Check every field; the first failing field is reported
pub fn validate(input: RosterInput<'_>, numbers: &RangeInclusive<u8>) -> Result<ValidRoster> {
    let name = require_non_blank("player name", input.name)?;
    let position = input.position.parse::<Position>()?;
    let number = parse_shirt_number(input.number, numbers)?;

    Ok(ValidRoster {
        name,
        position,
        number,
    })
}

/// Strict integer parse; duplicates within a team are allowed
pub fn parse_shirt_number(raw: &str, numbers: &RangeInclusive<u8>) -> Result<u8> {
    let out_of_range = || {
        TournamentError::validation(
            "shirt number",
            format!(
                "'{}' is not a whole number from {} to {}",
                raw.trim(),
                numbers.start(),
                numbers.end()
            ),
        )
    };

    let value: i64 = raw.trim().parse().map_err(|_| out_of_range())?;
    u8::try_from(value)
        .ok()
        .filter(|n| numbers.contains(n))
        .ok_or_else(out_of_range)
}

/// Roster by shirt number ascending; shared numbers keep insertion order
pub fn by_shirt_number(roster: &[RosterEntry]) -> Vec<&RosterEntry> {
    rank_by(roster, |a, b| a.number.cmp(&b.number))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(name: &'a str, position: &'a str, number: &'a str) -> RosterInput<'a> {
        RosterInput {
            name,
            position,
            number,
        }
    }

    #[test]
    fn test_valid_entry() {
        let valid = validate(input(" Lev ", "Goalkeeper", "1"), &SHIRT_NUMBERS).unwrap();
        assert_eq!(valid.name, "Lev");
        assert_eq!(valid.position, Position::Goalkeeper);
        assert_eq!(valid.number, 1);

        let entry = valid.into_entry("r1".to_string());
        assert_eq!(entry.id, "r1");
    }

    #[test]
    fn test_each_field_is_checked() {
        assert!(validate(input("", "forward", "9"), &SHIRT_NUMBERS)
            .unwrap_err()
            .is_validation());
        assert!(validate(input("Lev", "sweeper", "9"), &SHIRT_NUMBERS)
            .unwrap_err()
            .is_validation());
        assert!(validate(input("Lev", "forward", "nine"), &SHIRT_NUMBERS)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_shirt_number_range() {
        assert_eq!(parse_shirt_number("99", &SHIRT_NUMBERS).unwrap(), 99);
        assert_eq!(parse_shirt_number(" 7 ", &SHIRT_NUMBERS).unwrap(), 7);
        assert!(parse_shirt_number("0", &SHIRT_NUMBERS).is_err());
        assert!(parse_shirt_number("100", &SHIRT_NUMBERS).is_err());
        assert!(parse_shirt_number("-3", &SHIRT_NUMBERS).is_err());
        assert!(parse_shirt_number("7.5", &SHIRT_NUMBERS).is_err());
        assert!(parse_shirt_number("", &SHIRT_NUMBERS).is_err());
        assert!(parse_shirt_number("12", &(1..=11)).is_err());
    }

    #[test]
    fn test_roster_order() {
        let entries: Vec<RosterEntry> = [("a", 10), ("b", 1), ("c", 10), ("d", 4)]
            .iter()
            .map(|(name, number)| RosterEntry {
                id: name.to_string(),
                name: name.to_string(),
                position: Position::Midfielder,
                number: *number,
            })
            .collect();

        let order: Vec<&str> = by_shirt_number(&entries)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }
}
