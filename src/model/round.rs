use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::ScorecardError;
use crate::model::scorecard::Scorecard;
use crate::model::types::{Hole, MAX_SCORE, MIN_SCORE, SLOT_COUNT, Slot};

/// Where the round stands after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Progression {
    Advanced { saved: Hole, next: Hole },
    Completed { saved: Hole },
}

/// The scorecard plus the current-hole pointer and the active roster.
///
/// Only the first `player_count` slots take part in submissions and the
/// leaderboard. Inactive slots keep whatever they recorded while active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundState {
    scorecard: Scorecard,
    current_hole: Hole,
    player_names: Vec<String>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            scorecard: Scorecard::new(),
            current_hole: Hole::FIRST,
            player_names: vec![Slot::ALL[0].label()],
        }
    }
}

impl RoundState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wipes every score for all four slots and sends the group back to the
    /// first tee. The roster is left alone.
    pub fn reset(&mut self) {
        self.scorecard.clear();
        self.current_hole = Hole::FIRST;
    }

    /// Sets how many players are on the card and what they are called.
    ///
    /// Recorded scores stay keyed by slot, so shrinking and then growing the
    /// roster brings a returning player's scores back.
    ///
    /// # Errors
    ///
    /// `InvalidPlayerCount` when `count` is not in 1..=4, `InvalidInput` when
    /// the number of names differs from `count`.
    pub fn set_active_players<S: AsRef<str>>(
        &mut self,
        count: i64,
        names: &[S],
    ) -> Result<(), ScorecardError> {
        let count = usize::try_from(count)
            .ok()
            .filter(|c| (1..=SLOT_COUNT).contains(c))
            .ok_or(ScorecardError::InvalidPlayerCount(count))?;
        if names.len() != count {
            return Err(ScorecardError::InvalidInput(format!(
                "expected {count} player names, got {}",
                names.len()
            )));
        }

        self.player_names = Slot::ALL
            .iter()
            .zip(names)
            .map(|(slot, name)| {
                let name = name.as_ref().trim();
                if name.is_empty() {
                    slot.label()
                } else {
                    name.to_string()
                }
            })
            .collect();
        Ok(())
    }

    /// Records one hole for every active player and moves the current hole on.
    ///
    /// Everything is validated before the first write, so a rejected
    /// submission leaves the card exactly as it was. The pointer advances
    /// from the submitted hole, not from whichever holes already hold scores.
    ///
    /// # Errors
    ///
    /// `InvalidHole` for a hole outside 1..=18, `InvalidScore` for a missing
    /// active score or one outside 1..=10, `InvalidInput` for a score given
    /// for an inactive slot.
    pub fn submit_scores(
        &mut self,
        hole: i64,
        scores_by_slot: &BTreeMap<Slot, i32>,
    ) -> Result<Progression, ScorecardError> {
        let hole = Hole::new(hole)?;
        let active = self.active_slots();

        if let Some(stray) = scores_by_slot.keys().find(|slot| !active.contains(*slot)) {
            return Err(ScorecardError::InvalidInput(format!(
                "{stray} is not playing this round"
            )));
        }
        for slot in &active {
            match scores_by_slot.get(slot) {
                None => {
                    return Err(ScorecardError::InvalidScore(format!(
                        "missing score for {slot} on {hole}"
                    )));
                }
                Some(score) if !(MIN_SCORE..=MAX_SCORE).contains(score) => {
                    return Err(ScorecardError::InvalidScore(format!(
                        "{slot} on {hole}: {score} is outside {MIN_SCORE}..={MAX_SCORE}"
                    )));
                }
                Some(_) => {}
            }
        }

        for (slot, score) in scores_by_slot {
            self.scorecard.set(*slot, hole, *score);
        }

        Ok(match hole.next() {
            Some(next) => {
                self.current_hole = next;
                Progression::Advanced { saved: hole, next }
            }
            None => Progression::Completed { saved: hole },
        })
    }

    #[must_use]
    pub fn get_current_hole(&self) -> Hole {
        self.current_hole
    }

    #[must_use]
    pub fn get_scores(&self) -> &Scorecard {
        &self.scorecard
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    #[must_use]
    pub fn player_names(&self) -> &[String] {
        &self.player_names
    }

    #[must_use]
    pub fn active_slots(&self) -> Vec<Slot> {
        Slot::ALL[..self.player_count()].to_vec()
    }

    /// Active slots paired with their display names, in slot order.
    #[must_use]
    pub fn active_players(&self) -> Vec<(Slot, &str)> {
        Slot::ALL
            .iter()
            .copied()
            .zip(self.player_names.iter().map(String::as_str))
            .collect()
    }
}
