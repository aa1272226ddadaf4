//! Nutrition plan model
//!
//! Feeding plans and the plan/species factor table used to scale RER
//! into MER.

use serde::{Deserialize, Serialize};

use super::Species;

/// Feeding plan enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionPlan {
    WeightLoss,
    MaintenanceNeutered,
    MaintenanceIntact,
    GrowthUnder4Mo,
    GrowthOver4Mo,
    Recovery,
}

impl NutritionPlan {
    /// All plans in display order
    pub const ALL: [NutritionPlan; 6] = [
        NutritionPlan::WeightLoss,
        NutritionPlan::MaintenanceNeutered,
        NutritionPlan::MaintenanceIntact,
        NutritionPlan::GrowthUnder4Mo,
        NutritionPlan::GrowthOver4Mo,
        NutritionPlan::Recovery,
    ];

    /// Parse a raw control value. Returns None for unrecognized values so
    /// the caller can apply (and log) the maintenance fallback.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weight_loss" => Some(NutritionPlan::WeightLoss),
            "maintenance_neutered" => Some(NutritionPlan::MaintenanceNeutered),
            "maintenance_intact" => Some(NutritionPlan::MaintenanceIntact),
            "growth_under_4mo" => Some(NutritionPlan::GrowthUnder4Mo),
            "growth_over_4mo" => Some(NutritionPlan::GrowthOver4Mo),
            "recovery" => Some(NutritionPlan::Recovery),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NutritionPlan::WeightLoss => "weight_loss",
            NutritionPlan::MaintenanceNeutered => "maintenance_neutered",
            NutritionPlan::MaintenanceIntact => "maintenance_intact",
            NutritionPlan::GrowthUnder4Mo => "growth_under_4mo",
            NutritionPlan::GrowthOver4Mo => "growth_over_4mo",
            NutritionPlan::Recovery => "recovery",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            NutritionPlan::WeightLoss => "Weight Loss",
            NutritionPlan::MaintenanceNeutered => "Maintenance (Neutered)",
            NutritionPlan::MaintenanceIntact => "Maintenance (Intact)",
            NutritionPlan::GrowthUnder4Mo => "Growth (Under 4 Months)",
            NutritionPlan::GrowthOver4Mo => "Growth (Over 4 Months)",
            NutritionPlan::Recovery => "Recovery",
        }
    }

    /// MER multiplier for this plan and species (the plan factor table)
    pub fn factor(&self, species: Species) -> f64 {
        match (self, species) {
            (NutritionPlan::WeightLoss, Species::Dog) => 1.0,
            (NutritionPlan::WeightLoss, Species::Cat) => 0.8,
            (NutritionPlan::MaintenanceNeutered, Species::Dog) => 1.6,
            (NutritionPlan::MaintenanceNeutered, Species::Cat) => 1.2,
            (NutritionPlan::MaintenanceIntact, Species::Dog) => 1.8,
            (NutritionPlan::MaintenanceIntact, Species::Cat) => 1.4,
            (NutritionPlan::GrowthUnder4Mo, Species::Dog) => 3.0,
            (NutritionPlan::GrowthUnder4Mo, Species::Cat) => 2.5,
            (NutritionPlan::GrowthOver4Mo, Species::Dog) => 2.0,
            (NutritionPlan::GrowthOver4Mo, Species::Cat) => 2.5,
            (NutritionPlan::Recovery, Species::Dog) => 1.3,
            (NutritionPlan::Recovery, Species::Cat) => 1.2,
        }
    }
}

impl Default for NutritionPlan {
    fn default() -> Self {
        NutritionPlan::MaintenanceNeutered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_plans() {
        assert_eq!(NutritionPlan::parse("weight_loss"), Some(NutritionPlan::WeightLoss));
        assert_eq!(NutritionPlan::parse("RECOVERY"), Some(NutritionPlan::Recovery));
        assert_eq!(
            NutritionPlan::parse(" maintenance_intact "),
            Some(NutritionPlan::MaintenanceIntact)
        );
    }

    #[test]
    fn test_parse_unknown_is_none() {
        assert_eq!(NutritionPlan::parse("keto"), None);
        assert_eq!(NutritionPlan::parse(""), None);
    }

    #[test]
    fn test_factor_table_anchors() {
        assert!((NutritionPlan::MaintenanceNeutered.factor(Species::Dog) - 1.6).abs() < 1e-9);
        assert!((NutritionPlan::WeightLoss.factor(Species::Cat) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_all_factors_positive() {
        for plan in NutritionPlan::ALL {
            for species in [Species::Dog, Species::Cat] {
                assert!(plan.factor(species) > 0.0);
            }
        }
    }
}
