use maud::{Markup, html};

use crate::model::{
    CUSTOM_COURSE, CourseCatalog, CourseSelection, Hole, MAX_SCORE, MIN_SCORE, RoundState, Slot,
    SLOT_COUNT,
};
use crate::mvu::round::{Notice, NoticeLevel};

/// What an entry box shows for a hole nobody has scored yet. Never stored.
pub const DEFAULT_ENTRY_SCORE: i32 = 4;

/// Value to prefill for `slot` on `hole`: the recorded score, or the
/// entry default.
#[must_use]
pub fn entry_value(round: &RoundState, slot: Slot, hole: Hole) -> i32 {
    round
        .get_scores()
        .get(slot, hole)
        .unwrap_or(DEFAULT_ENTRY_SCORE)
}

#[must_use]
pub fn render_notice(notice: &Notice) -> Markup {
    let class = match notice.level {
        NoticeLevel::Success => "notice success",
        NoticeLevel::Warning => "notice warning",
        NoticeLevel::Error => "notice error",
    };
    html! {
        div class=(class) role="status" { (notice.text) }
    }
}

#[must_use]
pub fn render_course_form(
    session_id: &str,
    catalog: &CourseCatalog,
    course: &CourseSelection,
) -> Markup {
    let custom_name = match course {
        CourseSelection::Custom(Some(name)) => name.as_str(),
        _ => "",
    };
    html! {
        h2 { "Golf Course Information" }
        form method="post" action="course" {
            input type="hidden" name="session" value=(session_id);
            label for="course" { "Golf Course" }
            select id="course" name="course" {
                @for name in catalog.picker_names() {
                    option value=(name) selected[name == course.picker_value()] { (name) }
                }
            }
            label for="custom_course" { "Write the name of Golf Course :" }
            input id="custom_course" type="text" name="custom_course" value=(custom_name)
                placeholder=(format!("used when {CUSTOM_COURSE} is picked"));
            button type="submit" { "Set course" }
        }
    }
}

#[must_use]
pub fn render_player_form(session_id: &str, round: &RoundState) -> Markup {
    let names = round.player_names();
    html! {
        h2 { "Player Information" }
        form method="post" action="players" {
            input type="hidden" name="session" value=(session_id);
            label for="count" { "Number of Players" }
            input id="count" type="number" name="count" min="1" max=(SLOT_COUNT)
                value=(round.player_count());
            @for slot in Slot::ALL {
                @let field = format!("name_{}", slot.number());
                @let value = names.get(slot.index()).cloned().unwrap_or_else(|| slot.label());
                label for=(field) { "Enter name for " (slot) }
                input id=(field) type="text" name=(field) value=(value);
            }
            button type="submit" { "Update players" }
        }
    }
}

/// Row of hole links; the selected one gets the `selected` class.
#[must_use]
pub fn render_hole_picker(session_id: &str, selected: Hole) -> Markup {
    html! {
        h3 { "Select a Hole" }
        nav class="hole-picker" {
            @for hole in Hole::all() {
                a class=(if hole == selected { "hole selected" } else { "hole" })
                    href=(format!("?session={session_id}&hole={}", hole.number())) {
                    (hole)
                }
            }
        }
    }
}

#[must_use]
pub fn render_score_form(session_id: &str, round: &RoundState, hole: Hole) -> Markup {
    html! {
        h3 { "Enter Scores for " (hole) }
        form method="post" action="scores" class="score-entry" {
            input type="hidden" name="session" value=(session_id);
            input type="hidden" name="hole" value=(hole.number());
            @for (slot, name) in round.active_players() {
                @let field = format!("score_{}", slot.number());
                label for=(field) { (name) "'s Score" }
                input id=(field) type="number" name=(field) min=(MIN_SCORE) max=(MAX_SCORE)
                    step="1" value=(entry_value(round, slot, hole));
            }
            button type="submit" { "Submit" }
        }
        form method="post" action="reset" class="reset" {
            input type="hidden" name="session" value=(session_id);
            button type="submit" { "Reset Scores" }
        }
    }
}
