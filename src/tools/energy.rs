//! Energy calculator MCP tools
//!
//! Builds the RER/MER report and the rendered output panel, and exposes
//! the plan factor table for discovery.

use serde::Serialize;

use crate::calc::energy::{compute_energy, EnergyResult};
use crate::calc::format::{format_cups_per_day, format_factor, format_kcal_per_day, PLACEHOLDER};
use crate::models::{NutritionPlan, Species};

/// Rendered display strings for the four nutrition output fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnergyPanel {
    pub rer: String,
    pub mer: String,
    pub cups: String,
    pub note: String,
}

impl EnergyPanel {
    /// Panel shown when the weight failed validation: every numeric field
    /// is explicitly reset to the placeholder, nothing sticky survives.
    fn placeholder(message: &str) -> Self {
        Self {
            rer: PLACEHOLDER.to_string(),
            mer: PLACEHOLDER.to_string(),
            cups: PLACEHOLDER.to_string(),
            note: message.to_string(),
        }
    }
}

impl From<&EnergyResult> for EnergyPanel {
    fn from(result: &EnergyResult) -> Self {
        Self {
            rer: format_kcal_per_day(result.rer),
            mer: format_kcal_per_day(result.mer),
            cups: format_cups_per_day(result.cups),
            note: result.note.clone(),
        }
    }
}

/// Successful response for calculate_energy
#[derive(Debug, Clone, Serialize)]
pub struct EnergyReport {
    pub species: Species,
    pub plan: NutritionPlan,
    pub factor: f64,
    pub rer: f64,
    pub mer: f64,
    pub cups: Option<f64>,
    pub panel: EnergyPanel,
}

/// Input-error response for calculate_energy. This is user feedback, not
/// a protocol error.
#[derive(Debug, Clone, Serialize)]
pub struct EnergyInputErrorReport {
    pub error: String,
    pub panel: EnergyPanel,
}

/// Run one full render pass of the energy calculator. Missing fields
/// behave like empty controls.
pub fn calculate(
    species_raw: Option<&str>,
    weight_raw: Option<&str>,
    plan_raw: Option<&str>,
    kcal_per_cup_raw: Option<&str>,
) -> Result<EnergyReport, EnergyInputErrorReport> {
    match compute_energy(
        species_raw.unwrap_or(""),
        weight_raw.unwrap_or(""),
        plan_raw.unwrap_or(""),
        kcal_per_cup_raw,
    ) {
        Ok(result) => {
            let panel = EnergyPanel::from(&result);
            Ok(EnergyReport {
                species: result.species,
                plan: result.plan,
                factor: result.factor,
                rer: result.rer,
                mer: result.mer,
                cups: result.cups,
                panel,
            })
        }
        Err(err) => {
            let message = err.to_string();
            Err(EnergyInputErrorReport {
                panel: EnergyPanel::placeholder(&message),
                error: message,
            })
        }
    }
}

/// One plan row for discovery
#[derive(Debug, Clone, Serialize)]
pub struct NutritionPlanInfo {
    pub plan: NutritionPlan,
    pub display_name: &'static str,
    pub dog_factor: f64,
    pub cat_factor: f64,
}

/// Response for list_nutrition_plans
#[derive(Debug, Clone, Serialize)]
pub struct ListNutritionPlansResponse {
    pub plans: Vec<NutritionPlanInfo>,
    pub default_plan: NutritionPlan,
    pub default_species: Species,
}

/// Expose the plan factor table with per-species factors and display names.
pub fn list_nutrition_plans() -> ListNutritionPlansResponse {
    ListNutritionPlansResponse {
        plans: NutritionPlan::ALL
            .iter()
            .map(|&plan| NutritionPlanInfo {
                plan,
                display_name: plan.display_name(),
                dog_factor: plan.factor(Species::Dog),
                cat_factor: plan.factor(Species::Cat),
            })
            .collect(),
        default_plan: NutritionPlan::MaintenanceNeutered,
        default_species: Species::Dog,
    }
}
