//! Loan suggestion model as returned by the scoring backend.

use serde::{Deserialize, Serialize};

/// A single loan suggestion. Created per request, never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSuggestion {
    pub eligibility: bool,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub interest_rate: f64,
    /// Term in months.
    #[serde(default)]
    pub term: u32,
    #[serde(default)]
    pub reason: String,
}

impl LoanSuggestion {
    /// Amount with thousands grouping for display ("12,500").
    pub fn amount_display(&self) -> String {
        group_thousands(self.amount.round() as i64)
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_contract() {
        let json = r#"{
            "eligibility": true,
            "amount": 15000,
            "interest_rate": 12.5,
            "term": 6,
            "reason": "Stable income and a good payment record."
        }"#;
        let loan: LoanSuggestion = serde_json::from_str(json).unwrap();
        assert!(loan.eligibility);
        assert_eq!(loan.term, 6);
        assert_eq!(loan.amount_display(), "15,000");
    }

    #[test]
    fn test_ineligible_omits_terms() {
        let loan: LoanSuggestion =
            serde_json::from_str(r#"{"eligibility": false, "reason": "Score too low."}"#).unwrap();
        assert!(!loan.eligibility);
        assert_eq!(loan.amount, 0.0);
    }

    #[test]
    fn test_amount_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(2500000), "2,500,000");
    }
}
