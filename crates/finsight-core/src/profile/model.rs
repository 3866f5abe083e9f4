//! Credit profile models.
//!
//! Field names serialize camelCase to match the scoring backend contract.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FinsightError;

/// The eight financial inputs the scoring backend expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditProfile {
    pub monthly_income: f64,
    pub rent_amount: f64,
    pub rent_history: HistoryTier,
    pub avg_balance: f64,
    pub savings_rate: f64,
    pub overdrafts: u32,
    pub employment_stability: StabilityTier,
    pub utility_history: HistoryTier,
}

impl CreditProfile {
    /// Demo profile used by the "try sample data" affordance.
    pub fn sample() -> Self {
        Self {
            monthly_income: 4500.0,
            rent_amount: 1500.0,
            rent_history: HistoryTier::Good,
            avg_balance: 3500.0,
            savings_rate: 0.15,
            overdrafts: 1,
            employment_stability: StabilityTier::Medium,
            utility_history: HistoryTier::Good,
        }
    }
}

/// Payment-history quality tiers (rent and utilities).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HistoryTier {
    pub const ALL: &'static [Self] = &[Self::Excellent, Self::Good, Self::Fair, Self::Poor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

impl FromStr for HistoryTier {
    type Err = FinsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excellent" => Ok(Self::Excellent),
            "good" => Ok(Self::Good),
            "fair" => Ok(Self::Fair),
            "poor" => Ok(Self::Poor),
            other => Err(FinsightError::validation(format!(
                "unknown history tier '{other}' (expected excellent, good, fair or poor)"
            ))),
        }
    }
}

/// Employment stability tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StabilityTier {
    High,
    Medium,
    Low,
}

impl StabilityTier {
    pub const ALL: &'static [Self] = &[Self::High, Self::Medium, Self::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl FromStr for StabilityTier {
    type Err = FinsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(FinsightError::validation(format!(
                "unknown stability tier '{other}' (expected high, medium or low)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_wire_names() {
        let json = serde_json::to_value(CreditProfile::sample()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "monthlyIncome",
            "rentAmount",
            "rentHistory",
            "avgBalance",
            "savingsRate",
            "overdrafts",
            "employmentStability",
            "utilityHistory",
        ] {
            assert!(obj.contains_key(key), "missing wire field {key}");
        }
        assert_eq!(obj["rentHistory"], "good");
        assert_eq!(obj["employmentStability"], "medium");
    }

    #[test]
    fn test_tier_round_trip() {
        for tier in HistoryTier::ALL {
            assert_eq!(tier.as_str().parse::<HistoryTier>().unwrap(), *tier);
        }
        for tier in StabilityTier::ALL {
            assert_eq!(tier.as_str().parse::<StabilityTier>().unwrap(), *tier);
        }
    }

    #[test]
    fn test_tier_rejects_unknown() {
        assert!("stellar".parse::<HistoryTier>().is_err());
        assert!("wobbly".parse::<StabilityTier>().is_err());
    }
}
