use crate::model::{Scorecard, Slot};

/// Fixed reference par used to scale the progress bars. Purely cosmetic.
pub const REFERENCE_PAR: i32 = 72;

/// Strokes recorded for `slot` so far. Holes with nothing entered add 0.
#[must_use]
pub fn total(scorecard: &Scorecard, slot: Slot) -> i32 {
    scorecard.holes(slot).iter().flatten().sum()
}

/// Number of holes with a score entered for `slot`.
#[must_use]
pub fn holes_played(scorecard: &Scorecard, slot: Slot) -> usize {
    scorecard.holes(slot).iter().flatten().count()
}

/// How far a total has climbed towards the reference par, capped at 1.0.
#[must_use]
pub fn progress(total: i32) -> f32 {
    (total.max(0) as f32 / REFERENCE_PAR as f32).min(1.0)
}
