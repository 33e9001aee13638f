use serde::Serialize;

use crate::model::{HOLE_COUNT, Hole, RoundState, Slot};

/// Players as rows, `Player` then `Hole 1`..`Hole 18` as columns.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ScorecardTable {
    pub columns: Vec<String>,
    pub rows: Vec<ScorecardRow>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ScorecardRow {
    pub slot: Slot,
    pub player: String,
    pub holes: [Option<i32>; HOLE_COUNT],
}

impl ScorecardTable {
    /// One row per active player, named by display name, filled from the
    /// player's own slot.
    #[must_use]
    pub fn from_round(round: &RoundState) -> Self {
        let scorecard = round.get_scores();
        let rows = round
            .active_players()
            .into_iter()
            .map(|(slot, name)| ScorecardRow {
                slot,
                player: name.to_string(),
                holes: *scorecard.holes(slot),
            })
            .collect();
        Self {
            columns: column_names(),
            rows,
        }
    }
}

/// Header in numeric hole order, so `Hole 10` follows `Hole 9`.
#[must_use]
pub fn column_names() -> Vec<String> {
    std::iter::once("Player".to_string())
        .chain(Hole::all().map(Hole::label))
        .collect()
}
