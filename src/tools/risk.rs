//! Anesthesia risk MCP tools
//!
//! Builds the assessment response and the rendered output panel, and
//! exposes the static checklist table for discovery.

use serde::Serialize;

use crate::calc::risk::{assess_risk, RiskAssessment};
use crate::models::{RiskTier, ASA_MAX, ASA_MIN, RISK_FACTORS};

/// Rendered display strings for the four anesthesia output fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskPanel {
    /// Total score as text
    pub score: String,
    /// Tier display name
    pub tier: String,
    /// Monitoring checklist for the tier
    pub checklist: String,
    /// Score summary, with the escalation warning when it applies
    pub note: String,
}

impl From<&RiskAssessment> for RiskPanel {
    fn from(assessment: &RiskAssessment) -> Self {
        Self {
            score: assessment.total.to_string(),
            tier: assessment.tier.display_name().to_string(),
            checklist: assessment.checklist.to_string(),
            note: assessment.note.clone(),
        }
    }
}

/// Tier identifier with its display name
#[derive(Debug, Clone, Serialize)]
pub struct TierInfo {
    pub key: &'static str,
    pub display: &'static str,
}

impl From<RiskTier> for TierInfo {
    fn from(tier: RiskTier) -> Self {
        Self {
            key: tier.as_str(),
            display: tier.display_name(),
        }
    }
}

/// Response for assess_anesthesia_risk
#[derive(Debug, Clone, Serialize)]
pub struct AssessRiskResponse {
    pub asa: i64,
    pub points: i64,
    pub total: i64,
    pub tier: TierInfo,
    pub escalation: bool,
    pub matched_factors: Vec<&'static str>,
    pub panel: RiskPanel,
}

/// Run one full render pass of the anesthesia checklist. A missing ASA
/// field behaves like an empty control (normalizes to class 1).
pub fn assess(asa_raw: Option<&str>, checked_ids: &[String]) -> AssessRiskResponse {
    let assessment = assess_risk(asa_raw.unwrap_or(""), checked_ids);
    let panel = RiskPanel::from(&assessment);
    AssessRiskResponse {
        asa: assessment.asa,
        points: assessment.points,
        total: assessment.total,
        tier: assessment.tier.into(),
        escalation: assessment.escalation,
        matched_factors: assessment.matched_factors,
        panel,
    }
}

/// One checklist entry for discovery
#[derive(Debug, Clone, Serialize)]
pub struct RiskFactorInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub weight: i64,
}

/// Tier threshold row for discovery
#[derive(Debug, Clone, Serialize)]
pub struct TierThreshold {
    pub tier: TierInfo,
    /// Inclusive upper bound on the total, None for the open top tier
    pub max_total: Option<i64>,
}

/// Response for list_risk_factors
#[derive(Debug, Clone, Serialize)]
pub struct ListRiskFactorsResponse {
    pub factors: Vec<RiskFactorInfo>,
    pub asa_min: i64,
    pub asa_max: i64,
    pub tiers: Vec<TierThreshold>,
}

/// Expose the static factor table plus the ASA range and tier thresholds,
/// so clients need no out-of-band knowledge of valid ids.
pub fn list_risk_factors() -> ListRiskFactorsResponse {
    ListRiskFactorsResponse {
        factors: RISK_FACTORS
            .iter()
            .map(|f| RiskFactorInfo {
                id: f.id,
                label: f.label,
                weight: f.weight,
            })
            .collect(),
        asa_min: ASA_MIN,
        asa_max: ASA_MAX,
        tiers: vec![
            TierThreshold { tier: RiskTier::Low.into(), max_total: Some(3) },
            TierThreshold { tier: RiskTier::Moderate.into(), max_total: Some(7) },
            TierThreshold { tier: RiskTier::High.into(), max_total: None },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_strings() {
        let response = assess(Some("2"), &["ars-cardiac".to_string(), "ars-anemia".to_string()]);
        assert_eq!(response.total, 7);
        assert_eq!(response.panel.score, "7");
        assert_eq!(response.panel.tier, "Moderate");
        assert_eq!(
            response.panel.checklist,
            "Pre-oxygenate, secure warming plan, repeat BP trends, and assign dedicated recovery supervision."
        );
    }

    #[test]
    fn test_missing_asa_behaves_like_empty() {
        let response = assess(None, &[]);
        assert_eq!(response.asa, 1);
        assert_eq!(response.total, 1);
        assert_eq!(response.tier.key, "low");
    }

    #[test]
    fn test_escalation_flag_in_response() {
        let all: Vec<String> = RISK_FACTORS.iter().map(|f| f.id.to_string()).collect();
        let response = assess(Some("5"), &all);
        assert_eq!(response.total, 21);
        assert!(response.escalation);
        assert_eq!(response.tier.display, "High");
    }

    #[test]
    fn test_render_is_idempotent() {
        let checked = vec!["ars-renal".to_string()];
        let a = assess(Some("3"), &checked);
        let b = assess(Some("3"), &checked);
        assert_eq!(a.panel, b.panel);
    }

    #[test]
    fn test_list_exposes_seven_factors() {
        let listing = list_risk_factors();
        assert_eq!(listing.factors.len(), 7);
        assert_eq!(listing.asa_min, 1);
        assert_eq!(listing.asa_max, 5);
        let total_weight: i64 = listing.factors.iter().map(|f| f.weight).sum();
        assert_eq!(total_weight, 16);
    }
}
