use maud::{Markup, html};

use crate::model::Hole;
use crate::score::ScorecardTable;

#[must_use]
pub fn render_scorecard_table(table: &ScorecardTable, current: Hole) -> Markup {
    html! {
        h3 { "Player Scorecard" }
        table class="styled-table scorecard" {
            thead {
                tr {
                    @for (idx, column) in table.columns.iter().enumerate() {
                        @if idx == usize::from(current.number()) {
                            th class="current" { (column) }
                        } @else {
                            th { (column) }
                        }
                    }
                }
            }
            tbody {
                @for row in &table.rows {
                    tr {
                        td { (row.player) }
                        @for score in &row.holes {
                            td {
                                @if let Some(s) = score { (s) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Read-only par row for the selected course.
#[must_use]
pub fn render_par_table(pars: &[i32]) -> Markup {
    html! {
        p { em { "Scorecard" } }
        table class="styled-table pars" {
            thead {
                tr {
                    th { "Hole" }
                    @for hole in Hole::all() {
                        th { (hole.number()) }
                    }
                    th { "Total" }
                }
            }
            tbody {
                tr {
                    td { "Par" }
                    @for par in pars {
                        td { (par) }
                    }
                    td { (pars.iter().sum::<i32>()) }
                }
            }
        }
    }
}
