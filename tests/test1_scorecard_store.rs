mod common;
use crate::common::{round_with_players, scores, slot};

use rusty_golf_scorecard::model::{Hole, Progression, RoundState, Slot};
use rusty_golf_scorecard::ScorecardError;

#[test]
fn test1_fresh_round_starts_blank_on_hole_one() {
    let round = RoundState::new();
    assert_eq!(round.get_current_hole(), Hole::FIRST);
    assert_eq!(round.player_count(), 1);
    assert_eq!(round.player_names(), ["Player 1"]);
    assert!(round.get_scores().is_blank());
}

#[test]
fn test1_reset_wipes_every_slot_and_rewinds() {
    let mut round = round_with_players(&["Vic", "Ed", "Jo", "Al"]);
    for hole in 1..=5 {
        round
            .submit_scores(hole, &scores(&[(1, 4), (2, 5), (3, 6), (4, 7)]))
            .unwrap();
    }
    // shrink the roster so some scores sit in inactive slots
    round.set_active_players(1, &["Vic"]).unwrap();

    round.reset();

    assert_eq!(round.get_current_hole(), Hole::FIRST);
    for s in Slot::ALL {
        for hole in Hole::all() {
            assert_eq!(round.get_scores().get(s, hole), None, "{s} {hole}");
        }
    }
    assert_eq!(round.player_names(), ["Vic"]);
}

#[test]
fn test1_submission_advances_from_the_submitted_hole() {
    for h in 1..=17 {
        let mut round = RoundState::new();
        let progression = round.submit_scores(h, &scores(&[(1, 4)])).unwrap();
        let expected = Hole::new(h + 1).unwrap();
        assert_eq!(round.get_current_hole(), expected);
        assert_eq!(
            progression,
            Progression::Advanced {
                saved: Hole::new(h).unwrap(),
                next: expected
            }
        );
    }

    let mut round = RoundState::new();
    let progression = round.submit_scores(18, &scores(&[(1, 4)])).unwrap();
    assert_eq!(round.get_current_hole(), Hole::LAST);
    assert_eq!(progression, Progression::Completed { saved: Hole::LAST });

    // resubmitting the last hole keeps it current
    round.submit_scores(18, &scores(&[(1, 5)])).unwrap();
    assert_eq!(round.get_current_hole(), Hole::LAST);
    assert_eq!(round.get_scores().get(slot(1), Hole::LAST), Some(5));
}

#[test]
fn test1_skipping_ahead_still_advances() {
    let mut round = RoundState::new();
    round.submit_scores(5, &scores(&[(1, 3)])).unwrap();
    assert_eq!(round.get_current_hole(), Hole::new(6).unwrap());
    assert_eq!(round.get_scores().get(slot(1), Hole::new(4).unwrap()), None);
}

#[test]
fn test1_out_of_range_scores_leave_the_hole_untouched() {
    let mut round = round_with_players(&["Vic", "Ed"]);
    round.submit_scores(3, &scores(&[(1, 4), (2, 5)])).unwrap();
    let before = round.clone();

    for bad in [0, 11, -2] {
        let err = round
            .submit_scores(3, &scores(&[(1, 6), (2, bad)]))
            .unwrap_err();
        assert!(matches!(err, ScorecardError::InvalidScore(_)), "{bad}: {err}");
        assert_eq!(round, before);
    }
    assert_eq!(round.get_scores().get(slot(1), Hole::new(3).unwrap()), Some(4));
    assert_eq!(round.get_current_hole(), Hole::new(4).unwrap());
}

#[test]
fn test1_every_active_slot_must_be_scored() {
    let mut round = round_with_players(&["Vic", "Ed", "Jo"]);
    let err = round
        .submit_scores(1, &scores(&[(1, 4), (3, 4)]))
        .unwrap_err();
    assert!(matches!(err, ScorecardError::InvalidScore(_)));
    assert!(round.get_scores().is_blank());
    assert_eq!(round.get_current_hole(), Hole::FIRST);
}

#[test]
fn test1_scores_for_inactive_slots_are_rejected() {
    let mut round = round_with_players(&["Vic"]);
    let err = round
        .submit_scores(1, &scores(&[(1, 4), (2, 4)]))
        .unwrap_err();
    assert!(matches!(err, ScorecardError::InvalidInput(_)));
    assert!(round.get_scores().is_blank());
}

#[test]
fn test1_holes_outside_the_card_are_rejected() {
    let mut round = RoundState::new();
    for bad in [0, 19, -1] {
        assert_eq!(
            round.submit_scores(bad, &scores(&[(1, 4)])),
            Err(ScorecardError::InvalidHole(bad))
        );
    }
    assert!(round.get_scores().is_blank());
    assert_eq!(round.get_current_hole(), Hole::FIRST);
}

#[test]
fn test1_player_count_and_names_are_validated() {
    let mut round = RoundState::new();
    assert_eq!(
        round.set_active_players(0, &[] as &[&str]),
        Err(ScorecardError::InvalidPlayerCount(0))
    );
    assert_eq!(
        round.set_active_players(5, &["a", "b", "c", "d", "e"]),
        Err(ScorecardError::InvalidPlayerCount(5))
    );
    assert!(matches!(
        round.set_active_players(2, &["only one"]),
        Err(ScorecardError::InvalidInput(_))
    ));
    assert_eq!(round.player_count(), 1);

    round.set_active_players(3, &["Vic", "  ", "Jo"]).unwrap();
    assert_eq!(round.player_names(), ["Vic", "Player 2", "Jo"]);
}

#[test]
fn test1_reactivated_slot_gets_its_scores_back() {
    let mut round = round_with_players(&["Vic", "Ed"]);
    round.submit_scores(1, &scores(&[(1, 4), (2, 6)])).unwrap();

    round.set_active_players(1, &["Vic"]).unwrap();
    round.submit_scores(2, &scores(&[(1, 5)])).unwrap();
    round.set_active_players(2, &["Vic", "Eddie"]).unwrap();

    assert_eq!(round.get_scores().get(slot(2), Hole::FIRST), Some(6));
    assert_eq!(round.get_scores().get(slot(2), Hole::new(2).unwrap()), None);
    assert_eq!(round.player_names()[1], "Eddie");
}

#[test]
fn test1_renaming_does_not_touch_scores() {
    let mut round = round_with_players(&["Vic", "Ed"]);
    round.submit_scores(1, &scores(&[(1, 4), (2, 6)])).unwrap();
    let card = round.get_scores().clone();
    round.set_active_players(2, &["Victor", "Edwin"]).unwrap();
    assert_eq!(round.get_scores(), &card);
}
