//! Score response models as returned by the scoring backend.

use serde::{Deserialize, Serialize};

/// Validated success payload of a score submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: ScoreSummary,
    pub analysis: AiAnalysis,
}

/// The headline score plus its four-category breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub total_score: u32,
    pub rating: String,
    pub trend: String,
    pub breakdown: Breakdown,
}

/// Exactly four fixed sub-score categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Breakdown {
    pub payment_history: CategoryScore,
    pub financial_stability: CategoryScore,
    pub credit_utilization: CategoryScore,
    pub data_richness: CategoryScore,
}

impl Breakdown {
    /// Categories in fixed display order, with their default labels.
    pub fn categories(&self) -> [(&'static str, &CategoryScore); 4] {
        [
            ("Payment History", &self.payment_history),
            ("Financial Stability", &self.financial_stability),
            ("Credit Utilization", &self.credit_utilization),
            ("Data Richness", &self.data_richness),
        ]
    }
}

/// A single sub-score out of 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: u32,
    /// Display label supplied by the backend, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// AI-generated commentary attached to a score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiAnalysis {
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

/// One actionable recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub priority: Priority,
    pub impact: String,
    pub difficulty: String,
}

/// Recommendation priority. Drives CSS class selection and terminal
/// indicators only; never interpreted beyond display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "High", alias = "high")]
    High,
    #[serde(rename = "Medium", alias = "medium")]
    Medium,
    #[serde(rename = "Low", alias = "low")]
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Lowercased form used as a CSS class on recommendation badges.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_payload() {
        let json = r#"{
            "total_score": 715,
            "rating": "Good",
            "trend": "+5 pts vs. last month",
            "breakdown": {
                "payment_history": {"score": 80, "label": "Payment History"},
                "financial_stability": {"score": 70, "label": "Financial Stability"},
                "credit_utilization": {"score": 65, "label": "Income-to-Rent"},
                "data_richness": {"score": 70}
            }
        }"#;
        let summary: ScoreSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_score, 715);
        assert_eq!(summary.breakdown.payment_history.score, 80);
        assert_eq!(
            summary.breakdown.credit_utilization.label.as_deref(),
            Some("Income-to-Rent")
        );
        assert!(summary.breakdown.data_richness.label.is_none());
    }

    #[test]
    fn test_breakdown_order_is_fixed() {
        let summary: ScoreSummary = serde_json::from_str(
            r#"{"total_score":1,"rating":"Poor","trend":"flat","breakdown":{
                "payment_history":{"score":1},
                "financial_stability":{"score":2},
                "credit_utilization":{"score":3},
                "data_richness":{"score":4}}}"#,
        )
        .unwrap();
        let scores: Vec<u32> = summary
            .breakdown
            .categories()
            .iter()
            .map(|(_, c)| c.score)
            .collect();
        assert_eq!(scores, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_priority_wire_and_css() {
        let rec: Recommendation = serde_json::from_str(
            r#"{"title":"Lower rent burden","priority":"High","impact":"+20 pts","difficulty":"Hard"}"#,
        )
        .unwrap();
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.priority.css_class(), "high");
    }

    #[test]
    fn test_analysis_arrays_default_empty() {
        let analysis: AiAnalysis = serde_json::from_str("{}").unwrap();
        assert!(analysis.insights.is_empty());
        assert!(analysis.recommendations.is_empty());
    }
}
