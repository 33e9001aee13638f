use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::ScorecardError;

pub const SLOT_COUNT: usize = 4;
pub const HOLE_COUNT: usize = 18;
pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 10;

static SLOT_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:player)?\s*(\d{1,2})$").expect("slot label pattern compiles")
});

static HOLE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:hole)?\s*(\d{1,3})$").expect("hole label pattern compiles")
});

/// Storage key for one of the four players on the card. The display name
/// lives elsewhere and can change without touching recorded scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Slot(u8);

impl Slot {
    pub const ALL: [Slot; SLOT_COUNT] = [Slot(1), Slot(2), Slot(3), Slot(4)];

    /// # Errors
    ///
    /// Returns `InvalidInput` when `n` is not in 1..=4.
    pub fn new(n: i64) -> Result<Self, ScorecardError> {
        match u8::try_from(n) {
            Ok(v) if (1..=SLOT_COUNT as u8).contains(&v) => Ok(Self(v)),
            _ => Err(ScorecardError::InvalidInput(format!(
                "player slot must be between 1 and {SLOT_COUNT}, got {n}"
            ))),
        }
    }

    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }

    #[must_use]
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

impl FromStr for Slot {
    type Err = ScorecardError;

    /// Accepts `Player 2` as well as a bare `2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = SLOT_LABEL
            .captures(s.trim())
            .ok_or_else(|| ScorecardError::InvalidInput(format!("not a player slot: {s:?}")))?;
        let n: i64 = caps[1]
            .parse()
            .map_err(|_| ScorecardError::InvalidInput(format!("not a player slot: {s:?}")))?;
        Self::new(n)
    }
}

impl TryFrom<u8> for Slot {
    type Error = ScorecardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> Self {
        slot.0
    }
}

/// A hole on the card, 1 through 18.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hole(u8);

impl Hole {
    pub const FIRST: Hole = Hole(1);
    pub const LAST: Hole = Hole(HOLE_COUNT as u8);

    /// # Errors
    ///
    /// Returns `InvalidHole` when `n` is not in 1..=18.
    pub fn new(n: i64) -> Result<Self, ScorecardError> {
        match u8::try_from(n) {
            Ok(v) if (1..=HOLE_COUNT as u8).contains(&v) => Ok(Self(v)),
            _ => Err(ScorecardError::InvalidHole(n)),
        }
    }

    /// All eighteen holes in playing order.
    pub fn all() -> impl Iterator<Item = Hole> {
        (1..=HOLE_COUNT as u8).map(Hole)
    }

    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }

    /// The hole played after this one, `None` on the 18th.
    #[must_use]
    pub fn next(self) -> Option<Hole> {
        if self < Self::LAST {
            Some(Hole(self.0 + 1))
        } else {
            None
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hole {}", self.0)
    }
}

impl FromStr for Hole {
    type Err = ScorecardError;

    /// Accepts `Hole 7` as well as a bare `7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = HOLE_LABEL
            .captures(s.trim())
            .ok_or_else(|| ScorecardError::InvalidInput(format!("not a hole: {s:?}")))?;
        let n: i64 = caps[1]
            .parse()
            .map_err(|_| ScorecardError::InvalidInput(format!("not a hole: {s:?}")))?;
        Self::new(n)
    }
}

impl TryFrom<u8> for Hole {
    type Error = ScorecardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Hole> for u8 {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hole_labels_parse_with_or_without_prefix() {
        assert_eq!("Hole 7".parse::<Hole>().unwrap().number(), 7);
        assert_eq!(" 12 ".parse::<Hole>().unwrap().number(), 12);
        assert_eq!("hole 18".parse::<Hole>().unwrap(), Hole::LAST);
        assert_eq!("Hole 19".parse::<Hole>(), Err(ScorecardError::InvalidHole(19)));
        assert!(matches!(
            "Hole seven".parse::<Hole>(),
            Err(ScorecardError::InvalidInput(_))
        ));
    }

    #[test]
    fn slot_labels_round_trip_through_display() {
        for slot in Slot::ALL {
            assert_eq!(slot.label().parse::<Slot>().unwrap(), slot);
        }
        assert!("Player 5".parse::<Slot>().is_err());
    }

    #[test]
    fn next_stops_at_the_last_hole() {
        assert_eq!(Hole::FIRST.next(), Some(Hole::new(2).unwrap()));
        assert_eq!(Hole::LAST.next(), None);
        assert_eq!(Hole::all().count(), HOLE_COUNT);
    }
}
