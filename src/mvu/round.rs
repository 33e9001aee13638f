use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::error::ScorecardError;
use crate::model::{CUSTOM_COURSE, CourseCatalog, CourseSelection, Hole, Progression, RoundState, Slot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// One-shot banner shown on the next page render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Everything one group's browser session owns.
#[derive(Debug, Clone)]
pub struct RoundSession {
    pub round: RoundState,
    pub course: CourseSelection,
    pub notice: Option<Notice>,
    pub last_touched: NaiveDateTime,
}

impl RoundSession {
    #[must_use]
    pub fn new(course: CourseSelection) -> Self {
        Self {
            round: RoundState::new(),
            course,
            notice: None,
            last_touched: Utc::now().naive_utc(),
        }
    }

    pub fn touch(&mut self) {
        self.last_touched = Utc::now().naive_utc();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    SetPlayers { count: i64, names: Vec<String> },
    SubmitScores { hole: i64, scores: BTreeMap<Slot, i32> },
    Reset,
    SelectCourse(CourseSelection),
}

/// Which form was posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Players,
    Scores,
    Reset,
    Course,
}

/// Applies a single message to the session's round.
///
/// # Errors
///
/// Propagates the store's validation error; the round is unchanged when one
/// is returned.
pub fn update(session: &mut RoundSession, msg: Msg) -> Result<Notice, ScorecardError> {
    match msg {
        Msg::SetPlayers { count, names } => {
            session.round.set_active_players(count, &names)?;
            Ok(Notice::success(format!(
                "Playing with {} player{}.",
                count,
                if count == 1 { "" } else { "s" }
            )))
        }
        Msg::SubmitScores { hole, scores } => {
            match session.round.submit_scores(hole, &scores)? {
                Progression::Advanced { saved, next } => Ok(Notice::success(format!(
                    "Scores saved for {saved}. Moving to {next}!"
                ))),
                Progression::Completed { saved } => Ok(Notice::success(format!(
                    "Scores saved for {saved}. You have completed all holes!"
                ))),
            }
        }
        Msg::Reset => {
            session.round.reset();
            Ok(Notice::warning("All scores have been reset!"))
        }
        Msg::SelectCourse(course) => {
            let text = match course.heading() {
                Some(heading) => format!("Now playing {heading}."),
                None => "Enter the name of the custom course.".to_string(),
            };
            session.course = course;
            Ok(Notice::success(text))
        }
    }
}

/// Turns posted form fields into a message.
///
/// Fields: `count` and `name_1`..`name_4` for the roster, `hole` (`7` or
/// `Hole 7`) and `score_1`..`score_4` for a hole, `course` and
/// `custom_course` for the course picker.
///
/// # Errors
///
/// Returns the store error matching the malformed field.
pub fn decode_form_to_msg<S: BuildHasher>(
    action: Action,
    form: &HashMap<String, String, S>,
    catalog: &CourseCatalog,
) -> Result<Msg, ScorecardError> {
    match action {
        Action::Players => {
            let count: i64 = form
                .get("count")
                .and_then(|s| s.trim().parse().ok())
                .ok_or_else(|| {
                    ScorecardError::InvalidInput("number of players is required".into())
                })?;
            let names = Slot::ALL
                .iter()
                .take_while(|slot| i64::from(slot.number()) <= count)
                .map(|slot| {
                    form.get(&format!("name_{}", slot.number()))
                        .cloned()
                        .unwrap_or_default()
                })
                .collect();
            Ok(Msg::SetPlayers { count, names })
        }
        Action::Scores => {
            let hole: Hole = form
                .get("hole")
                .ok_or_else(|| ScorecardError::InvalidInput("hole is required".into()))?
                .parse()?;
            let mut scores = BTreeMap::new();
            for slot in Slot::ALL {
                if let Some(raw) = form.get(&format!("score_{}", slot.number())) {
                    let score: i32 = raw.trim().parse().map_err(|_| {
                        ScorecardError::InvalidScore(format!("{slot}: {raw:?} is not a number"))
                    })?;
                    scores.insert(slot, score);
                }
            }
            Ok(Msg::SubmitScores {
                hole: i64::from(hole.number()),
                scores,
            })
        }
        Action::Reset => Ok(Msg::Reset),
        Action::Course => {
            let picked = form
                .get("course")
                .map(|s| s.trim())
                .ok_or_else(|| ScorecardError::InvalidInput("course is required".into()))?;
            if picked == CUSTOM_COURSE {
                let custom = form
                    .get("custom_course")
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty());
                Ok(Msg::SelectCourse(CourseSelection::Custom(custom)))
            } else if catalog.find(picked).is_some() {
                Ok(Msg::SelectCourse(CourseSelection::Listed(picked.to_string())))
            } else {
                Err(ScorecardError::InvalidInput(format!(
                    "unknown course {picked:?}"
                )))
            }
        }
    }
}
