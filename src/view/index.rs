use maud::{DOCTYPE, Markup, html};

use crate::model::{CourseCatalog, Hole};
use crate::mvu::round::RoundSession;
use crate::score::{ScorecardTable, round_leaderboard};
use crate::view::leaderboard::{render_leaderboard, render_totals};
use crate::view::round::{
    render_course_form, render_hole_picker, render_notice, render_player_form, render_score_form,
};
use crate::view::scorecard::{render_par_table, render_scorecard_table};

pub const PAGE_TITLE: &str = "Pinoy Golf Tour";

/// Full page for one session. `selected` is the hole shown in the entry
/// form, which defaults to the round's current hole.
#[must_use]
pub fn render_index_template(
    session_id: &str,
    session: &RoundSession,
    catalog: &CourseCatalog,
    selected: Option<Hole>,
) -> Markup {
    let round = &session.round;
    let hole = selected.unwrap_or_else(|| round.get_current_hole());
    let table = ScorecardTable::from_round(round);
    let board = round_leaderboard(round);

    html! {
        (DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" href="static/styles.css";
            title { "PGT Scorecard" }
        }
        body {
            aside class="sidebar" {
                (render_course_form(session_id, catalog, &session.course))
                (render_player_form(session_id, round))
            }
            main {
                h1 { (PAGE_TITLE) }
                @if let Some(heading) = session.course.heading() {
                    h2 class="course" { em { (heading) } }
                }
                @if let Some(pars) = session.course.pars(catalog) {
                    (render_par_table(pars))
                }
                @if let Some(notice) = &session.notice {
                    (render_notice(notice))
                }
                (render_hole_picker(session_id, hole))
                (render_score_form(session_id, round, hole))
                (render_scorecard_table(&table, round.get_current_hole()))
                div class="columns" {
                    div { (render_totals(&board)) }
                    div {
                        (render_leaderboard(&board))
                        a class="download" href=(format!("scorecard.csv?session={session_id}")) {
                            "Download Scorecard as CSV"
                        }
                    }
                }
            }
        }
    }
}
