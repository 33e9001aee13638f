use serde::Serialize;

use crate::model::types::{HOLE_COUNT, Hole, SLOT_COUNT, Slot};

/// Strokes per slot per hole. Every slot carries all eighteen holes from
/// construction on; `None` means nothing has been entered yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scorecard {
    cards: [[Option<i32>; HOLE_COUNT]; SLOT_COUNT],
}

impl Default for Scorecard {
    fn default() -> Self {
        Self {
            cards: [[None; HOLE_COUNT]; SLOT_COUNT],
        }
    }
}

impl Scorecard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, slot: Slot, hole: Hole) -> Option<i32> {
        self.cards[slot.index()][hole.index()]
    }

    pub(crate) fn set(&mut self, slot: Slot, hole: Hole, score: i32) {
        self.cards[slot.index()][hole.index()] = Some(score);
    }

    pub(crate) fn clear(&mut self) {
        self.cards = [[None; HOLE_COUNT]; SLOT_COUNT];
    }

    /// One slot's row in hole order.
    #[must_use]
    pub fn holes(&self, slot: Slot) -> &[Option<i32>; HOLE_COUNT] {
        &self.cards[slot.index()]
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cards.iter().flatten().all(Option::is_none)
    }
}
