//! Feature entry-point handoff.
//!
//! The score panel exposes three downstream features (health monitor, bill
//! reminder, credit game). Each lives on its own page and reads the score
//! and profile from session-scoped storage; this handler writes those fixed
//! keys and redirects. The destination pages are external collaborators.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::state::AppState;

/// POST /handoff/{feature} - Stash score data and redirect to the feature
/// page. Requires a current score.
pub async fn handoff(State(state): State<AppState>, Path(feature): Path<String>) -> Response {
    let (total, user_json, breakdown_json) = {
        let workflow = state.workflow.lock().unwrap();
        let (Some(report), Some(profile)) = (workflow.report(), workflow.profile()) else {
            return StatusCode::NO_CONTENT.into_response();
        };

        let user_json = match serde_json::to_string(profile) {
            Ok(json) => json,
            Err(e) => return storage_error(e),
        };
        let breakdown_json = match serde_json::to_string(&report.score.breakdown) {
            Ok(json) => json,
            Err(e) => return storage_error(e),
        };
        (
            report.score.total_score.to_string(),
            user_json,
            breakdown_json,
        )
    };

    match feature.as_str() {
        "health-monitor" => {
            state.stash(&[
                ("currentScore", total),
                ("userData", user_json),
                ("scoreBreakdown", breakdown_json),
            ]);
            Redirect::to("/health-monitor.html").into_response()
        }
        "bill-reminder" => {
            state.stash(&[("currentScore", total), ("userData", user_json)]);
            Redirect::to("/bill-reminder.html").into_response()
        }
        "credit-clash" => {
            state.stash(&[("realScore", total), ("userData", user_json)]);
            Redirect::to("/credit-clash.html").into_response()
        }
        _ => (StatusCode::NOT_FOUND, Html("Unknown feature".to_string())).into_response(),
    }
}

fn storage_error(e: serde_json::Error) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(format!("Error: {}", e)),
    )
        .into_response()
}
