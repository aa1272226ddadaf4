//! Calculation module
//!
//! Pure scoring and formula engines plus the display formatting helpers.

pub mod energy;
pub mod format;
pub mod risk;

pub use energy::{compute_energy, rer, EnergyInputError, EnergyResult};
pub use format::{format_factor, format_kcal_per_day, PLACEHOLDER};
pub use risk::{assess_risk, parse_asa, RiskAssessment};
