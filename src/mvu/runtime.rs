use ahash::AHashMap;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::error::AppError;
use super::round::{Msg, Notice, RoundSession, update};
use crate::model::CourseSelection;

pub type SessionMap = Arc<RwLock<AHashMap<String, RoundSession>>>;

#[must_use]
pub fn new_session_map() -> SessionMap {
    Arc::new(RwLock::new(AHashMap::new()))
}

/// Lifetime and defaults for sessions created on first use.
#[derive(Debug, Clone)]
pub struct SessionPolicy {
    pub max_age: Duration,
    pub max_sessions: usize,
    pub default_course: CourseSelection,
}

/// Runs `f` against the session named `session_id`, creating it if needed.
/// Sessions idle longer than the policy's max age are dropped first; when a
/// new session would exceed `max_sessions`, the least recently touched
/// rounds make room for it.
pub async fn with_session<T>(
    sessions: &SessionMap,
    session_id: &str,
    policy: &SessionPolicy,
    f: impl FnOnce(&mut RoundSession) -> T,
) -> T {
    let mut map = sessions.write().await;

    // an age too large for the clock means nothing is old enough to drop
    if let Some(cutoff) = Utc::now().naive_utc().checked_sub_signed(policy.max_age) {
        let before = map.len();
        map.retain(|_, s| s.last_touched >= cutoff);
        if map.len() < before {
            info!(evicted = before - map.len(), "dropped idle rounds");
        }
    }

    if !map.contains_key(session_id) {
        make_room(&mut map, policy.max_sessions.max(1) - 1);
    }

    let session = map.entry(session_id.to_string()).or_insert_with(|| {
        info!(session = session_id, "starting new round");
        RoundSession::new(policy.default_course.clone())
    });
    session.touch();
    f(session)
}

fn make_room(map: &mut AHashMap<String, RoundSession>, keep: usize) {
    if map.len() <= keep {
        return;
    }
    let mut by_age: Vec<(String, chrono::NaiveDateTime)> = map
        .iter()
        .map(|(id, s)| (id.clone(), s.last_touched))
        .collect();
    by_age.sort_by_key(|&(_, touched)| touched);
    let excess = map.len() - keep;
    for (id, _) in by_age.into_iter().take(excess) {
        map.remove(&id);
    }
    warn!(evicted = excess, "session cap reached, dropped oldest rounds");
}

/// Applies one message to a session. The resulting notice, success or
/// error, is parked on the session for the next render.
///
/// # Errors
///
/// Returns `AppError::Scorecard` when the round rejected the message.
pub async fn run_round(
    sessions: &SessionMap,
    session_id: &str,
    msg: Msg,
    policy: &SessionPolicy,
) -> Result<Notice, AppError> {
    debug!(session = session_id, ?msg, "applying message");
    with_session(sessions, session_id, policy, |session| {
        match update(session, msg) {
            Ok(notice) => {
                session.notice = Some(notice.clone());
                Ok(notice)
            }
            Err(e) => {
                warn!(session = session_id, error = %e, "rejected");
                session.notice = Some(Notice::error(e.to_string()));
                Err(AppError::from(e))
            }
        }
    })
    .await
}
