//! Anesthesia risk model
//!
//! The fixed risk-factor checklist, ASA bounds, and the tier derived from
//! the total score.

use serde::{Deserialize, Serialize};

/// Lowest valid ASA physical status class
pub const ASA_MIN: i64 = 1;
/// Highest valid ASA physical status class
pub const ASA_MAX: i64 = 5;

/// One entry of the anesthesia risk checklist
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RiskFactor {
    pub id: &'static str,
    pub label: &'static str,
    pub weight: i64,
}

/// The fixed checklist. Weights sum to 16, so with ASA 1-5 the attainable
/// total is 1 through 21.
pub const RISK_FACTORS: [RiskFactor; 7] = [
    RiskFactor { id: "ars-senior", label: "Geriatric patient (senior life stage)", weight: 1 },
    RiskFactor { id: "ars-cardiac", label: "Cardiac disease or murmur", weight: 3 },
    RiskFactor { id: "ars-airway", label: "Brachycephalic or compromised airway", weight: 3 },
    RiskFactor { id: "ars-emergency", label: "Emergency or non-fasted procedure", weight: 3 },
    RiskFactor { id: "ars-anemia", label: "Anemia or hypoproteinemia", weight: 2 },
    RiskFactor { id: "ars-renal", label: "Renal or hepatic impairment", weight: 2 },
    RiskFactor { id: "ars-obese", label: "Obesity or poor body condition", weight: 2 },
];

/// Categorical risk bucket derived from the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Tier thresholds, inclusive upper bounds: <=3 Low, <=7 Moderate,
    /// else High.
    pub fn from_total(total: i64) -> Self {
        if total <= 3 {
            RiskTier::Low
        } else if total <= 7 {
            RiskTier::Moderate
        } else {
            RiskTier::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }

    /// Monitoring checklist text shown for this tier
    pub fn checklist(&self) -> &'static str {
        match self {
            RiskTier::Low => {
                "Standard monitoring, IV access, BP + SpO2 + ETCO2, and routine recovery checks."
            }
            RiskTier::Moderate => {
                "Pre-oxygenate, secure warming plan, repeat BP trends, and assign dedicated recovery supervision."
            }
            RiskTier::High => {
                "Stabilize before induction when possible, prepare vasopressor/fluids plan, and perform intensive post-op monitoring."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_weights_sum_to_16() {
        let sum: i64 = RISK_FACTORS.iter().map(|f| f.weight).sum();
        assert_eq!(sum, 16);
    }

    #[test]
    fn test_factor_ids_unique() {
        for (i, a) in RISK_FACTORS.iter().enumerate() {
            for b in &RISK_FACTORS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(RiskTier::from_total(1), RiskTier::Low);
        assert_eq!(RiskTier::from_total(3), RiskTier::Low);
        assert_eq!(RiskTier::from_total(4), RiskTier::Moderate);
        assert_eq!(RiskTier::from_total(7), RiskTier::Moderate);
        assert_eq!(RiskTier::from_total(8), RiskTier::High);
        assert_eq!(RiskTier::from_total(21), RiskTier::High);
    }

    #[test]
    fn test_tier_monotonic() {
        let mut prev = RiskTier::from_total(1);
        for total in 2..=21 {
            let tier = RiskTier::from_total(total);
            assert!(tier >= prev);
            prev = tier;
        }
    }
}
