use serde::Serialize;

use crate::model::{CourseCatalog, CourseSelection, Hole};
use crate::mvu::round::{Notice, RoundSession};
use crate::mvu::runtime::{SessionMap, SessionPolicy, new_session_map};
use crate::score::{LeaderboardEntry, ScorecardTable, round_leaderboard, total};

/// Shared by every worker: the per-session rounds plus static settings.
pub struct AppState {
    pub sessions: SessionMap,
    pub catalog: CourseCatalog,
    pub policy: SessionPolicy,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: CourseCatalog, max_age: chrono::Duration, max_sessions: usize) -> Self {
        let default_course = CourseSelection::for_catalog(&catalog);
        Self {
            sessions: new_session_map(),
            catalog,
            policy: SessionPolicy {
                max_age,
                max_sessions,
                default_course,
            },
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct PlayerTotal {
    pub player: String,
    pub total: i32,
}

/// JSON view of one session's round.
#[derive(Serialize, Clone, Debug)]
pub struct RoundSnapshot {
    pub current_hole: Hole,
    pub course: Option<String>,
    pub players: Vec<String>,
    pub scorecard: ScorecardTable,
    pub totals: Vec<PlayerTotal>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub notice: Option<Notice>,
}

#[must_use]
pub fn snapshot(session: &RoundSession) -> RoundSnapshot {
    let round = &session.round;
    let totals = round
        .active_players()
        .into_iter()
        .map(|(slot, name)| PlayerTotal {
            player: name.to_string(),
            total: total(round.get_scores(), slot),
        })
        .collect();
    RoundSnapshot {
        current_hole: round.get_current_hole(),
        course: session.course.heading(),
        players: round.player_names().to_vec(),
        scorecard: ScorecardTable::from_round(round),
        totals,
        leaderboard: round_leaderboard(round),
        notice: session.notice.clone(),
    }
}
