use serde::{Deserialize, Serialize};

use super::totals::{progress, total};
use crate::model::{RoundState, Scorecard, Slot};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub slot: Slot,
    pub name: String,
    pub total: i32,
    pub progress: f32,
}

/// Ranks the given players by total strokes, fewest first.
///
/// The sort is stable on total alone, so players on equal totals stay in
/// the order they were passed in (slot order for a round's roster). Tied
/// players share a rank and the next distinct total skips ahead, e.g.
/// 1, 1, 3.
#[must_use]
pub fn leaderboard(scorecard: &Scorecard, players: &[(Slot, &str)]) -> Vec<LeaderboardEntry> {
    let mut standings: Vec<(Slot, &str, i32)> = players
        .iter()
        .map(|&(slot, name)| (slot, name, total(scorecard, slot)))
        .collect();

    standings.sort_by_key(|&(_, _, total)| total);

    let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(standings.len());
    for (i, (slot, name, total)) in standings.into_iter().enumerate() {
        let rank = match entries.last() {
            Some(prev) if prev.total == total => prev.rank,
            _ => i + 1,
        };
        entries.push(LeaderboardEntry {
            rank,
            slot,
            name: name.to_string(),
            total,
            progress: progress(total),
        });
    }
    entries
}

/// Leaderboard for the round's active roster.
#[must_use]
pub fn round_leaderboard(round: &RoundState) -> Vec<LeaderboardEntry> {
    leaderboard(round.get_scores(), &round.active_players())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn ties_share_a_rank_and_keep_input_order() {
        let [p1, p2, p3, p4] = Slot::ALL;
        let mut round = RoundState::new();
        round.set_active_players(4, &["a", "b", "c", "d"]).unwrap();
        for hole in 1..=2 {
            let scores = BTreeMap::from([(p1, 5), (p2, 4), (p3, 5), (p4, 6)]);
            round.submit_scores(hole, &scores).unwrap();
        }
        let board = leaderboard(
            round.get_scores(),
            &[(p1, "Ana"), (p2, "Ben"), (p3, "Cy"), (p4, "Dee")],
        );
        let summary: Vec<(usize, &str, i32)> = board
            .iter()
            .map(|e| (e.rank, e.name.as_str(), e.total))
            .collect();
        assert_eq!(
            summary,
            vec![(1, "Ben", 8), (2, "Ana", 10), (2, "Cy", 10), (4, "Dee", 12)]
        );
    }

    #[test]
    fn single_player_board_has_one_entry() {
        let round = RoundState::new();
        let board = round_leaderboard(&round);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[0].total, 0);
        assert_eq!(board[0].name, "Player 1");
    }
}
