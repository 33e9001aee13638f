#![allow(dead_code)]

use rusty_golf_scorecard::controller::round::AppState;
use rusty_golf_scorecard::model::{CourseCatalog, RoundState, Slot};
use std::collections::BTreeMap;

pub fn slot(n: i64) -> Slot {
    Slot::new(n).expect("test slot in range")
}

/// `&[(1, 4), (2, 5)]` -> Player 1 shot 4, Player 2 shot 5.
pub fn scores(pairs: &[(i64, i32)]) -> BTreeMap<Slot, i32> {
    pairs.iter().map(|&(n, s)| (slot(n), s)).collect()
}

pub fn round_with_players(names: &[&str]) -> RoundState {
    let mut round = RoundState::new();
    round
        .set_active_players(names.len() as i64, names)
        .expect("test roster is valid");
    round
}

pub fn test_state() -> AppState {
    AppState::new(CourseCatalog::default(), chrono::Duration::minutes(30), 100)
}
