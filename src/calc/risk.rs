//! Anesthesia risk engine
//!
//! Pure scoring over the fixed checklist: ASA base class plus weighted
//! risk-factor points, mapped to a tier and its monitoring checklist.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::{RiskTier, ASA_MAX, ASA_MIN, RISK_FACTORS};

/// Escalation sentence appended to the note when the total reaches 8
pub const ESCALATION_WARNING: &str =
    "Escalate: confirm senior clinician sign-off and a dedicated crash plan before induction.";

/// Full result of one risk assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    /// ASA class actually used after normalization
    pub asa: i64,
    /// Sum of the checked factor weights
    pub points: i64,
    /// asa + points
    pub total: i64,
    pub tier: RiskTier,
    /// Checklist factor ids that matched the fixed table
    pub matched_factors: Vec<&'static str>,
    /// Whether the escalation warning applies (total >= 8)
    pub escalation: bool,
    /// Monitoring checklist text for the tier
    pub checklist: &'static str,
    /// Human-readable summary of the score
    pub note: String,
}

/// Normalize a raw ASA control value. Non-numeric, non-finite, or
/// out-of-range input silently clamps to class 1; fractional in-range
/// values truncate to their integer class.
pub fn parse_asa(raw: &str) -> i64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= ASA_MIN as f64 && v <= ASA_MAX as f64 => v.trunc() as i64,
        _ => ASA_MIN,
    }
}

/// Score one checklist submission. Total over its domain: every input
/// produces an assessment, never an error.
pub fn assess_risk(asa_raw: &str, checked_ids: &[String]) -> RiskAssessment {
    let asa = parse_asa(asa_raw);

    // Set semantics: an id checked twice counts once; ids not in the
    // fixed table are ignored.
    let checked: HashSet<&str> = checked_ids.iter().map(|s| s.as_str()).collect();

    let mut points = 0;
    let mut matched_factors = Vec::new();
    for factor in &RISK_FACTORS {
        if checked.contains(factor.id) {
            points += factor.weight;
            matched_factors.push(factor.id);
        }
    }

    let total = asa + points;
    let tier = RiskTier::from_total(total);
    let escalation = total >= 8;

    let mut note = format!(
        "ASA {} base score with {} checklist point(s) for a total of {}.",
        asa, points, total
    );
    if escalation {
        note.push(' ');
        note.push_str(ESCALATION_WARNING);
    }

    RiskAssessment {
        asa,
        points,
        total,
        tier,
        matched_factors,
        escalation,
        checklist: tier.checklist(),
        note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_asa_in_range() {
        assert_eq!(parse_asa("1"), 1);
        assert_eq!(parse_asa("3"), 3);
        assert_eq!(parse_asa("5"), 5);
        assert_eq!(parse_asa(" 2 "), 2);
    }

    #[test]
    fn test_parse_asa_invalid_clamps_to_one() {
        assert_eq!(parse_asa(""), 1);
        assert_eq!(parse_asa("abc"), 1);
        assert_eq!(parse_asa("0"), 1);
        assert_eq!(parse_asa("6"), 1);
        assert_eq!(parse_asa("-3"), 1);
        assert_eq!(parse_asa("NaN"), 1);
        assert_eq!(parse_asa("inf"), 1);
    }

    #[test]
    fn test_parse_asa_fractional_truncates() {
        assert_eq!(parse_asa("2.9"), 2);
        assert_eq!(parse_asa("4.1"), 4);
    }

    #[test]
    fn test_no_factors_checked() {
        let result = assess_risk("2", &[]);
        assert_eq!(result.asa, 2);
        assert_eq!(result.points, 0);
        assert_eq!(result.total, 2);
        assert_eq!(result.tier, RiskTier::Low);
        assert!(!result.escalation);
    }

    #[test]
    fn test_cardiac_plus_anemia_moderate() {
        let result = assess_risk("2", &ids(&["ars-cardiac", "ars-anemia"]));
        assert_eq!(result.points, 5);
        assert_eq!(result.total, 7);
        assert_eq!(result.tier, RiskTier::Moderate);
        assert!(!result.escalation);
        assert_eq!(result.matched_factors, vec!["ars-cardiac", "ars-anemia"]);
    }

    #[test]
    fn test_all_factors_asa_5_high() {
        let all: Vec<String> = RISK_FACTORS.iter().map(|f| f.id.to_string()).collect();
        let result = assess_risk("5", &all);
        assert_eq!(result.points, 16);
        assert_eq!(result.total, 21);
        assert_eq!(result.tier, RiskTier::High);
        assert!(result.escalation);
        assert!(result.note.ends_with(ESCALATION_WARNING));
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let result = assess_risk("1", &ids(&["ars-unknown", "ars-cardiac"]));
        assert_eq!(result.points, 3);
        assert_eq!(result.matched_factors, vec!["ars-cardiac"]);
    }

    #[test]
    fn test_duplicate_ids_count_once() {
        let result = assess_risk("1", &ids(&["ars-cardiac", "ars-cardiac"]));
        assert_eq!(result.points, 3);
    }

    #[test]
    fn test_boundary_totals() {
        // total 3 -> Low, total 4 -> Moderate via ASA alone
        assert_eq!(assess_risk("3", &[]).tier, RiskTier::Low);
        assert_eq!(assess_risk("4", &[]).tier, RiskTier::Moderate);
        // total 7 -> Moderate, total 8 -> High
        assert_eq!(assess_risk("5", &ids(&["ars-anemia"])).tier, RiskTier::Moderate);
        assert_eq!(assess_risk("5", &ids(&["ars-cardiac"])).tier, RiskTier::High);
    }

    #[test]
    fn test_note_states_asa_and_points() {
        let result = assess_risk("3", &ids(&["ars-senior"]));
        assert!(result.note.contains("ASA 3"));
        assert!(result.note.contains("1 checklist point"));
        assert!(result.note.contains("total of 4"));
        assert!(!result.note.contains(ESCALATION_WARNING));
    }

    #[test]
    fn test_idempotent() {
        let checked = ids(&["ars-airway", "ars-obese"]);
        assert_eq!(assess_risk("4", &checked), assess_risk("4", &checked));
    }
}
