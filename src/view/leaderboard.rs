use maud::{Markup, html};

use crate::score::{LeaderboardEntry, REFERENCE_PAR};

#[must_use]
pub fn render_leaderboard(entries: &[LeaderboardEntry]) -> Markup {
    html! {
        h3 { "Leaderboard" }
        table class="styled-table" {
            thead {
                tr {
                    th { "RANK" }
                    th { "PLAYER" }
                    th { "SCORE" }
                }
            }
            tbody {
                @for entry in entries {
                    tr {
                        td { (entry.rank) }
                        td { (entry.name) }
                        td { (entry.total) }
                    }
                }
            }
        }
    }
}

/// Totals in roster order, each with a bar scaled against par 72.
#[must_use]
pub fn render_totals(entries: &[LeaderboardEntry]) -> Markup {
    let mut by_slot: Vec<&LeaderboardEntry> = entries.iter().collect();
    by_slot.sort_by_key(|e| e.slot);

    html! {
        h3 { "Total Scores" }
        div class="totals" {
            @for entry in by_slot {
                div class="total-row" {
                    span class="total-name" { b { (entry.name) ":" } " " (entry.total) }
                    div class="bar-track" title=(format!("{} of {REFERENCE_PAR}", entry.total)) {
                        div class="bar" style=(bar_width_style(entry.progress)) {}
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn bar_width_style(progress: f32) -> String {
    format!("width: {:.1}%;", progress.clamp(0.0, 1.0) * 100.0)
}
