//! RER/MER energy engine
//!
//! Pure formula computation: resting energy requirement from body weight,
//! scaled by the plan/species factor into the maintenance requirement.

use serde::Serialize;
use thiserror::Error;

use crate::models::{NutritionPlan, Species};

/// Hard validation failures of the energy calculator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnergyInputError {
    /// Body weight missing, non-numeric, non-finite, or not positive
    #[error("Enter a valid body weight.")]
    InvalidWeight,
}

/// Successful energy computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyResult {
    pub species: Species,
    pub plan: NutritionPlan,
    /// MER multiplier from the plan factor table
    pub factor: f64,
    /// Resting energy requirement, kcal/day
    pub rer: f64,
    /// Maintenance energy requirement, kcal/day
    pub mer: f64,
    /// Cups per day, only when a valid caloric density was supplied
    pub cups: Option<f64>,
    /// Human-readable summary of the factor applied
    pub note: String,
}

/// Clinical reminder appended to every successful note
pub const REASSESS_REMINDER: &str =
    "Reassess body condition every 2-4 weeks and adjust the ration with your veterinarian.";

/// Resting energy requirement: 70 x weight^0.75 kcal/day
pub fn rer(weight_kg: f64) -> f64 {
    70.0 * weight_kg.powf(0.75)
}

/// Parse a body weight control value. Must be finite and positive.
fn parse_weight(raw: &str) -> Result<f64, EnergyInputError> {
    match raw.trim().parse::<f64>() {
        Ok(w) if w.is_finite() && w > 0.0 => Ok(w),
        _ => Err(EnergyInputError::InvalidWeight),
    }
}

/// Parse the optional kcal-per-cup field. Absent or invalid is not an
/// error, it just disables the cups output.
fn parse_kcal_per_cup(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    match raw.parse::<f64>() {
        Ok(k) if k.is_finite() && k > 0.0 => Some(k),
        _ => None,
    }
}

/// Compute one energy report from raw control values.
///
/// Species and plan normalize silently per the documented fallbacks; only
/// the body weight can fail, and it short-circuits the whole computation.
pub fn compute_energy(
    species_raw: &str,
    weight_raw: &str,
    plan_raw: &str,
    kcal_per_cup_raw: Option<&str>,
) -> Result<EnergyResult, EnergyInputError> {
    let weight = parse_weight(weight_raw)?;

    let species = Species::from_str(species_raw);
    let plan = NutritionPlan::parse(plan_raw).unwrap_or_else(|| {
        tracing::warn!(
            "Unrecognized nutrition plan '{}'. Falling back to maintenance_neutered.",
            plan_raw
        );
        NutritionPlan::MaintenanceNeutered
    });

    let factor = plan.factor(species);
    let rer = rer(weight);
    let mer = rer * factor;
    let cups = parse_kcal_per_cup(kcal_per_cup_raw).map(|kcal| mer / kcal);

    let note = format!(
        "Using factor {:.2} for a {}. {}",
        factor,
        species.display_name().to_lowercase(),
        REASSESS_REMINDER
    );

    Ok(EnergyResult {
        species,
        plan,
        factor,
        rer,
        mer,
        cups,
        note,
    })
}
