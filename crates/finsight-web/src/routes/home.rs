//! Page shell route handler.

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use finsight_core::score::AGENT_STAGES;

use crate::routes::gallery::topic_views;
use crate::routes::score::workflow_fragment;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    query_text: String,
    topics: Vec<crate::routes::gallery::TopicView>,
    oob: bool,
    stages: Vec<StageView>,
    /// Pre-rendered workflow fragment (input form or score panel).
    workflow_html: String,
}

/// View model for one loading-animation stage.
struct StageView {
    name: &'static str,
    detail: &'static str,
}

fn stage_views() -> Vec<StageView> {
    AGENT_STAGES
        .iter()
        .map(|stage| StageView {
            name: stage.name,
            detail: stage.detail,
        })
        .collect()
}

/// GET / - Serve the page shell. The gallery loads its initial fragment via
/// HTMX; the workflow section re-renders whichever screen is current.
pub async fn index(State(state): State<AppState>) -> Response {
    let workflow_html = {
        let workflow = state.workflow.lock().unwrap();
        match workflow_fragment(&workflow) {
            Ok(html) => html,
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(format!("Template error: {}", e)),
                )
                    .into_response()
            }
        }
    };

    let template = IndexTemplate {
        query_text: String::new(),
        topics: topic_views(state.gallery.lock().unwrap().active_topic()),
        oob: false,
        stages: stage_views(),
        workflow_html,
    };

    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!("Template error: {}", e)),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finsight_core::score::ScoreWorkflow;

    #[test]
    fn test_shell_renders_all_sections() {
        let workflow_html = workflow_fragment(&ScoreWorkflow::new()).unwrap();
        let template = IndexTemplate {
            query_text: String::new(),
            topics: topic_views(None),
            oob: false,
            stages: stage_views(),
            workflow_html,
        };
        let html = template.render().unwrap();

        assert!(html.contains("id=\"videos-container\""));
        assert!(html.contains("id=\"credit-form\""));
        assert!(html.contains("id=\"loading-section\""));
        assert!(html.contains("Profile Intake"));
        assert!(html.contains("Score Synthesis"));
        // No active topic and no error banner on first load.
        assert!(!html.contains("topic-btn active"));
        assert!(!html.contains("error-banner"));
    }
}
