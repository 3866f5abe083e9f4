//! Loan suggestion route handler.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use finsight_core::loan::LoanSuggestion;

use crate::routes::score::render_html;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "partials/loan_panel.html")]
struct LoanPanelTemplate {
    has_error: bool,
    error: String,
    eligible: bool,
    amount: String,
    interest_rate: f64,
    term: u32,
    reason: String,
}

impl LoanPanelTemplate {
    fn suggested(loan: &LoanSuggestion) -> Self {
        Self {
            has_error: false,
            error: String::new(),
            eligible: loan.eligibility,
            amount: loan.amount_display(),
            interest_rate: loan.interest_rate,
            term: loan.term,
            reason: loan.reason.clone(),
        }
    }

    fn failed(message: String) -> Self {
        Self {
            has_error: true,
            error: message,
            eligible: false,
            amount: String::new(),
            interest_rate: 0.0,
            term: 0,
            reason: String::new(),
        }
    }
}

/// POST /loan - Request a loan suggestion for the current score.
/// Without a prior score this is a no-op: no request is issued.
pub async fn request_loan(State(state): State<AppState>) -> Response {
    let Some((profile, score)) = state.workflow.lock().unwrap().begin_loan() else {
        return StatusCode::NO_CONTENT.into_response();
    };

    let template = match state.scoring.suggest_loan(&profile, score).await {
        Ok(suggestion) => {
            let template = LoanPanelTemplate::suggested(&suggestion);
            state.workflow.lock().unwrap().apply_loan(suggestion);
            template
        }
        Err(err) => {
            warn!(error = %err, "loan suggestion failed");
            let message = format!("Could not fetch loan suggestion: {}", err);
            state.workflow.lock().unwrap().fail_loan(message.clone());
            LoanPanelTemplate::failed(message)
        }
    };

    render_html(template.render())
}
