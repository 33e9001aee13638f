use actix_web::http::header;
use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use regex::Regex;
use serde_json::json;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::warn;

use super::data_service::{AppState, snapshot};
use crate::model::Hole;
use crate::mvu::error::AppError;
use crate::mvu::round::{Action, Notice, decode_form_to_msg};
use crate::mvu::runtime::{run_round, with_session};
use crate::score::ScorecardTable;
use crate::view::export::{CSV_FILE_NAME, to_csv};
use crate::view::index::render_index_template;

pub const DEFAULT_SESSION: &str = "default";

static SESSION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("session id pattern compiles"));

/// Session key from the `session` parameter, `default` when absent.
///
/// # Errors
///
/// Returns `AppError::Parse` for ids outside `[A-Za-z0-9_-]{1,64}`.
pub fn session_id_from(params: &HashMap<String, String>) -> Result<String, AppError> {
    match params.get("session").map(|s| s.trim()) {
        None | Some("") => Ok(DEFAULT_SESSION.to_string()),
        Some(id) if SESSION_ID.is_match(id) => Ok(id.to_string()),
        Some(id) => Err(AppError::Parse(format!("invalid session id {id:?}"))),
    }
}

// Helper function to read a 0/1 style flag
fn get_flag(params: &HashMap<String, String>, key: &str) -> bool {
    match params.get(key).map(String::as_str) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    }
}

fn bad_request(e: &AppError) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
}

pub async fn index(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let session_id = match session_id_from(&query) {
        Ok(id) => id,
        Err(e) => return bad_request(&e),
    };

    let selected = match query.get("hole").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        Some(raw) => match raw.parse::<Hole>() {
            Ok(hole) => Some(hole),
            Err(e) => return bad_request(&AppError::from(e)),
        },
        None => None,
    };
    let want_json = get_flag(&query, "json");
    let catalog = &state.catalog;

    with_session(&state.sessions, &session_id, &state.policy, |session| {
        // notices show once, whichever view reads them
        let response = if want_json {
            HttpResponse::Ok().json(snapshot(session))
        } else {
            let markup = render_index_template(&session_id, session, catalog, selected);
            HttpResponse::Ok()
                .content_type("text/html")
                .body(markup.into_string())
        };
        session.notice = None;
        response
    })
    .await
}

async fn apply(action: Action, form: &HashMap<String, String>, state: &AppState) -> HttpResponse {
    let session_id = match session_id_from(form) {
        Ok(id) => id,
        Err(e) => return bad_request(&e),
    };
    let want_json = get_flag(form, "json");

    let result = match decode_form_to_msg(action, form, &state.catalog) {
        Ok(msg) => run_round(&state.sessions, &session_id, msg, &state.policy).await,
        Err(e) => {
            warn!(session = %session_id, error = %e, "could not decode form");
            let notice = Notice::error(e.to_string());
            with_session(&state.sessions, &session_id, &state.policy, |session| {
                session.notice = Some(notice);
            })
            .await;
            Err(AppError::from(e))
        }
    };

    if want_json {
        match result {
            Ok(_) => {
                let snap = with_session(&state.sessions, &session_id, &state.policy, |session| {
                    let snap = snapshot(session);
                    session.notice = None;
                    snap
                })
                .await;
                HttpResponse::Ok().json(snap)
            }
            Err(e) => bad_request(&e),
        }
    } else {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, format!("./?session={session_id}")))
            .finish()
    }
}

pub async fn post_players(
    form: web::Form<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    apply(Action::Players, &form, &state).await
}

pub async fn post_scores(
    form: web::Form<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    apply(Action::Scores, &form, &state).await
}

pub async fn post_reset(
    form: web::Form<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    apply(Action::Reset, &form, &state).await
}

pub async fn post_course(
    form: web::Form<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    apply(Action::Course, &form, &state).await
}

pub async fn scorecard_csv(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let session_id = match session_id_from(&query) {
        Ok(id) => id,
        Err(e) => return bad_request(&e),
    };

    let csv = with_session(&state.sessions, &session_id, &state.policy, |session| {
        to_csv(&ScorecardTable::from_round(&session.round))
    })
    .await;

    match csv {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/csv")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CSV_FILE_NAME}\""),
            ))
            .body(body),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

/// Mounts the round routes; used by `main` and by the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/players", web::post().to(post_players))
        .route("/scores", web::post().to(post_scores))
        .route("/reset", web::post().to(post_reset))
        .route("/course", web::post().to(post_course))
        .route("/scorecard.csv", web::get().to(scorecard_csv))
        .route("/health", web::get().to(|| async { HttpResponse::Ok().finish() }));
}
