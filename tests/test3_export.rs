mod common;
use crate::common::{round_with_players, scores};

use rusty_golf_scorecard::score::{ScorecardTable, column_names};
use rusty_golf_scorecard::view::export::to_csv;

#[test]
fn test3_columns_are_in_numeric_hole_order() {
    let columns = column_names();
    assert_eq!(columns.len(), 19);
    assert_eq!(columns[0], "Player");
    assert_eq!(columns[2], "Hole 2");
    assert_eq!(columns[10], "Hole 10");
    assert_eq!(columns[18], "Hole 18");
}

#[test]
fn test3_rows_use_display_names_and_own_slots() {
    let mut round = round_with_players(&["Vic", "Ed"]);
    round.submit_scores(1, &scores(&[(1, 4), (2, 6)])).unwrap();
    round.submit_scores(2, &scores(&[(1, 3), (2, 5)])).unwrap();

    let table = ScorecardTable::from_round(&round);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].player, "Vic");
    assert_eq!(table.rows[1].player, "Ed");
    assert_eq!(table.rows[1].holes[0], Some(6));
    assert_eq!(table.rows[1].holes[1], Some(5));
    assert_eq!(table.rows[1].holes[2], None);
}

#[test]
fn test3_csv_has_header_and_empty_cells_for_unset_holes() {
    let mut round = round_with_players(&["Vic", "Ed"]);
    round.submit_scores(1, &scores(&[(1, 4), (2, 6)])).unwrap();

    let csv = to_csv(&ScorecardTable::from_round(&round)).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Player,Hole 1,Hole 2,"));
    assert!(lines[0].ends_with(",Hole 17,Hole 18"));
    assert_eq!(lines[1], format!("Vic,4{}", ",".repeat(17)));
    assert_eq!(lines[2], format!("Ed,6{}", ",".repeat(17)));
}

#[test]
fn test3_names_with_commas_are_quoted() {
    let round = round_with_players(&["Balasoto, Victor"]);
    let csv = to_csv(&ScorecardTable::from_round(&round)).unwrap();
    let row = csv.lines().nth(1).unwrap();
    assert!(row.starts_with("\"Balasoto, Victor\","));
}
