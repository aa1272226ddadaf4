//! vetcalc Tools module
//!
//! MCP tool implementations for the veterinary calculators.

pub mod energy;
pub mod risk;
pub mod status;
