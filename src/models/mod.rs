//! Data models
//!
//! Rust types for the calculator domain: species, feeding plans, and the
//! anesthesia risk checklist tables.

mod plan;
mod risk;
mod species;

pub use plan::NutritionPlan;
pub use risk::{RiskFactor, RiskTier, ASA_MAX, ASA_MIN, RISK_FACTORS};
pub use species::Species;
