//! Scoring backend HTTP client.
//!
//! Two POSTs: `/api/score` with the credit profile, `/api/suggest_loan`
//! with the profile plus the computed score. Response bodies are validated
//! here so callers only ever see complete, typed payloads.

use finsight_core::loan::LoanSuggestion;
use finsight_core::profile::CreditProfile;
use finsight_core::score::{AiAnalysis, ScoreReport, ScoreSummary};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{extract_error_message, ApiError};

/// Default scoring backend base URL.
pub const DEFAULT_SCORING_URL: &str = "http://127.0.0.1:5000";

/// Scoring backend client.
#[derive(Clone)]
pub struct ScoringClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ScoreEnvelope {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    score: Option<ScoreSummary>,
    #[serde(default)]
    ai_analysis: Option<AiAnalysis>,
}

#[derive(Deserialize)]
struct LoanEnvelope {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    eligibility: Option<bool>,
    #[serde(default)]
    amount: f64,
    #[serde(default)]
    interest_rate: f64,
    #[serde(default)]
    term: u32,
    #[serde(default)]
    reason: String,
}

#[derive(Serialize)]
struct LoanRequest<'a> {
    #[serde(flatten)]
    profile: &'a CreditProfile,
    score: u32,
}

impl ScoringClient {
    /// Create a client for the given backend base URL.
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Submit a credit profile for scoring.
    pub async fn score(&self, profile: &CreditProfile) -> Result<ScoreReport, ApiError> {
        let body = self.post_json("/api/score", profile).await?;
        let report = validate_score_body(&body)?;
        debug!(total = report.score.total_score, "score received");
        Ok(report)
    }

    /// Request a loan suggestion for a previously scored profile.
    pub async fn suggest_loan(
        &self,
        profile: &CreditProfile,
        score: u32,
    ) -> Result<LoanSuggestion, ApiError> {
        let request = LoanRequest { profile, score };
        let body = self.post_json("/api/suggest_loan", &request).await?;
        let suggestion = validate_loan_body(&body)?;
        debug!(eligible = suggestion.eligibility, "loan suggestion received");
        Ok(suggestion)
    }

    async fn post_json<T: Serialize>(&self, path: &str, payload: &T) -> Result<String, ApiError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body)
                .unwrap_or_else(|| format!("scoring service failed with status {status}"));
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.text().await?)
    }
}

/// Validate a 2xx score body: an `error` field or a missing
/// `score`/`ai_analysis` section is a failure, not a partial success.
fn validate_score_body(body: &str) -> Result<ScoreReport, ApiError> {
    let envelope: ScoreEnvelope = serde_json::from_str(body)?;
    if let Some(error) = envelope.error {
        return Err(ApiError::Backend(error));
    }
    let score = envelope.score.ok_or(ApiError::Incomplete("score"))?;
    let analysis = envelope
        .ai_analysis
        .ok_or(ApiError::Incomplete("ai_analysis"))?;
    Ok(ScoreReport { score, analysis })
}

/// Validate a 2xx loan body against the flat suggestion contract.
fn validate_loan_body(body: &str) -> Result<LoanSuggestion, ApiError> {
    let envelope: LoanEnvelope = serde_json::from_str(body)?;
    if let Some(error) = envelope.error {
        return Err(ApiError::Backend(error));
    }
    let eligibility = envelope
        .eligibility
        .ok_or(ApiError::Incomplete("eligibility"))?;
    Ok(LoanSuggestion {
        eligibility,
        amount: envelope.amount,
        interest_rate: envelope.interest_rate,
        term: envelope.term,
        reason: envelope.reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_SCORE_BODY: &str = r#"{
        "score": {
            "total_score": 715,
            "rating": "Good",
            "trend": "+5 pts vs. last month",
            "breakdown": {
                "payment_history": {"score": 80, "label": "Payment History"},
                "financial_stability": {"score": 70, "label": "Financial Stability"},
                "credit_utilization": {"score": 65, "label": "Income-to-Rent"},
                "data_richness": {"score": 70, "label": "Data Richness"}
            }
        },
        "ai_analysis": {
            "insights": ["Your savings rate is above average."],
            "recommendations": [
                {"title": "Trim rent burden", "priority": "High", "impact": "+20 pts", "difficulty": "Hard"}
            ]
        }
    }"#;

    #[test]
    fn test_validate_good_score_body() {
        let report = validate_score_body(GOOD_SCORE_BODY).unwrap();
        assert_eq!(report.score.total_score, 715);
        assert_eq!(report.analysis.insights.len(), 1);
        assert_eq!(report.score.breakdown.payment_history.score, 80);
    }

    #[test]
    fn test_score_body_with_error_field_is_failure() {
        let body = r#"{"error": "Failed to process score request on the server.",
                       "score": null, "ai_analysis": {"insights": [], "recommendations": []}}"#;
        match validate_score_body(body) {
            Err(ApiError::Backend(msg)) => {
                assert_eq!(msg, "Failed to process score request on the server.")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_score_body_missing_sections_is_incomplete() {
        match validate_score_body(r#"{"score": null, "ai_analysis": null}"#) {
            Err(ApiError::Incomplete(field)) => assert_eq!(field, "score"),
            other => panic!("unexpected result: {other:?}"),
        }

        let body = r#"{"score": {"total_score": 1, "rating": "Poor", "trend": "flat",
            "breakdown": {"payment_history": {"score": 1}, "financial_stability": {"score": 1},
                          "credit_utilization": {"score": 1}, "data_richness": {"score": 1}}}}"#;
        match validate_score_body(body) {
            Err(ApiError::Incomplete(field)) => assert_eq!(field, "ai_analysis"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_score_body_malformed_json_is_failure() {
        assert!(matches!(
            validate_score_body("<html>bad gateway</html>"),
            Err(ApiError::Json(_))
        ));
    }

    #[test]
    fn test_validate_loan_bodies() {
        let loan = validate_loan_body(
            r#"{"eligibility": true, "amount": 15000, "interest_rate": 12.5, "term": 6,
                "reason": "Stable income."}"#,
        )
        .unwrap();
        assert!(loan.eligibility);
        assert_eq!(loan.term, 6);

        assert!(matches!(
            validate_loan_body(r#"{"error": "AI Agent offline"}"#),
            Err(ApiError::Backend(_))
        ));
        assert!(matches!(
            validate_loan_body(r#"{"reason": "no flag"}"#),
            Err(ApiError::Incomplete("eligibility"))
        ));
    }

    #[test]
    fn test_loan_request_body_is_flat() {
        let profile = CreditProfile::sample();
        let request = LoanRequest {
            profile: &profile,
            score: 715,
        };
        let value = serde_json::to_value(&request).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["score"], 715);
        assert_eq!(obj["monthlyIncome"], 4500.0);
        assert!(obj.get("userData").is_none());
    }
}
