//! Score workflow route handlers.
//!
//! The submit handler drives the Input -> Loading -> Score screen machine:
//! the form swap shows the loading section while the request is in flight,
//! and the response replaces the workflow panel with either the score panel
//! or the input form plus an error banner.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use tracing::warn;

use finsight_core::profile::CreditProfile;
use finsight_core::score::{ScoreReport, ScoreWorkflow, Screen};

use crate::state::AppState;

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "partials/input_form.html")]
struct InputFormTemplate {
    has_error: bool,
    error: String,
}

#[derive(Template)]
#[template(path = "partials/score_panel.html")]
pub(crate) struct ScorePanelTemplate {
    total_score: u32,
    rating: String,
    trend: String,
    bars: Vec<BreakdownBarView>,
    insights: Vec<String>,
    has_insights: bool,
    recommendations: Vec<RecommendationView>,
    has_recommendations: bool,
}

/// View model for one breakdown progress bar.
struct BreakdownBarView {
    label: String,
    score: u32,
}

/// View model for one recommendation card.
struct RecommendationView {
    title: String,
    priority: String,
    priority_class: String,
    impact: String,
    difficulty: String,
}

impl ScorePanelTemplate {
    pub(crate) fn from_report(report: &ScoreReport) -> Self {
        let bars = report
            .score
            .breakdown
            .categories()
            .iter()
            .map(|(default_label, category)| BreakdownBarView {
                label: category
                    .label
                    .clone()
                    .unwrap_or_else(|| (*default_label).to_string()),
                score: category.score,
            })
            .collect();

        let recommendations: Vec<RecommendationView> = report
            .analysis
            .recommendations
            .iter()
            .map(|rec| RecommendationView {
                title: rec.title.clone(),
                priority: rec.priority.as_str().to_string(),
                priority_class: rec.priority.css_class().to_string(),
                impact: rec.impact.clone(),
                difficulty: rec.difficulty.clone(),
            })
            .collect();

        Self {
            total_score: report.score.total_score,
            rating: report.score.rating.clone(),
            trend: report.score.trend.clone(),
            bars,
            has_insights: !report.analysis.insights.is_empty(),
            insights: report.analysis.insights.clone(),
            has_recommendations: !recommendations.is_empty(),
            recommendations,
        }
    }
}

// ============================================================
// HANDLERS
// ============================================================

/// POST /score - Submit the credit form to the scoring backend.
pub async fn submit(State(state): State<AppState>, Form(profile): Form<CreditProfile>) -> Response {
    state
        .workflow
        .lock()
        .unwrap()
        .begin_submission(profile.clone());

    match state.scoring.score(&profile).await {
        Ok(report) => {
            let template = ScorePanelTemplate::from_report(&report);
            state.workflow.lock().unwrap().apply_report(report);
            render_html(template.render())
        }
        Err(err) => {
            warn!(error = %err, "score submission failed");
            state.workflow.lock().unwrap().fail_submission();
            render_input(Some(format!("Could not calculate score: {}", err)))
        }
    }
}

/// POST /score/sample - Score the built-in demo profile.
pub async fn submit_sample(State(state): State<AppState>) -> Response {
    submit(State(state), Form(CreditProfile::sample())).await
}

/// POST /score/reset - Back to a pristine input form.
pub async fn reset(State(state): State<AppState>) -> Response {
    state.workflow.lock().unwrap().reset();
    render_input(None)
}

// ============================================================
// HELPERS
// ============================================================

pub(crate) fn render_input(error: Option<String>) -> Response {
    let template = InputFormTemplate {
        has_error: error.is_some(),
        error: error.unwrap_or_default(),
    };
    render_html(template.render())
}

/// Render whichever workflow screen is current: the score panel once a
/// report exists, the input form otherwise. A page reload lands back on
/// the state the controller holds.
pub(crate) fn workflow_fragment(workflow: &ScoreWorkflow) -> Result<String, askama::Error> {
    match workflow.report() {
        Some(report) if workflow.screen() == Screen::Score => {
            ScorePanelTemplate::from_report(report).render()
        }
        _ => InputFormTemplate {
            has_error: false,
            error: String::new(),
        }
        .render(),
    }
}

pub(crate) fn render_html(result: Result<String, askama::Error>) -> Response {
    match result {
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
    use finsight_core::score::{
        AiAnalysis, Breakdown, CategoryScore, Priority, Recommendation, ScoreSummary,
    };

    fn report() -> ScoreReport {
        let cat = |score, label: &str| CategoryScore {
            score,
            label: Some(label.to_string()),
        };
        ScoreReport {
            score: ScoreSummary {
                total_score: 715,
                rating: "Good".into(),
                trend: "+5 pts vs. last month".into(),
                breakdown: Breakdown {
                    payment_history: cat(80, "Payment History"),
                    financial_stability: cat(70, "Financial Stability"),
                    credit_utilization: cat(65, "Income-to-Rent"),
                    data_richness: cat(70, "Data Richness"),
                },
            },
            analysis: AiAnalysis {
                insights: vec!["Savings rate is above average.".into()],
                recommendations: vec![Recommendation {
                    title: "Trim rent burden".into(),
                    priority: Priority::High,
                    impact: "+20 pts".into(),
                    difficulty: "Hard".into(),
                }],
            },
        }
    }

    #[test]
    fn test_score_panel_renders_bars_and_labels() {
        let html = ScorePanelTemplate::from_report(&report()).render().unwrap();
        assert!(html.contains("width: 80%"));
        assert!(html.contains("80/100"));
        assert!(html.contains("Income-to-Rent"));
        assert!(html.contains("715"));
        assert!(html.contains("rec-priority high"));
    }

    #[test]
    fn test_score_panel_escapes_markup_in_text() {
        let mut rep = report();
        rep.analysis.insights = vec!["<script>alert(1)</script>".into()];
        let html = ScorePanelTemplate::from_report(&rep).render().unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_analysis_renders_placeholders() {
        let mut rep = report();
        rep.analysis = AiAnalysis {
            insights: vec![],
            recommendations: vec![],
        };
        let html = ScorePanelTemplate::from_report(&rep).render().unwrap();
        assert!(html.contains("Could not load AI insights."));
        assert!(html.contains("Could not load AI recommendations."));
    }

    #[test]
    fn test_workflow_fragment_follows_screen() {
        let mut workflow = ScoreWorkflow::new();
        assert!(workflow_fragment(&workflow).unwrap().contains("credit-form"));

        workflow.begin_submission(CreditProfile::sample());
        workflow.apply_report(report());
        assert!(workflow_fragment(&workflow)
            .unwrap()
            .contains("score-section"));
    }

    #[test]
    fn test_input_form_error_banner() {
        let template = InputFormTemplate {
            has_error: true,
            error: "Could not calculate score: server returned 500".into(),
        };
        let html = template.render().unwrap();
        assert!(html.contains("Could not calculate score"));
    }
}
