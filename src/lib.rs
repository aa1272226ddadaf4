//! Veterinary Calculators (vetcalc) Library
//!
//! Core functionality for anesthesia risk and RER/MER energy scoring.

pub mod build_info;
pub mod calc;
pub mod mcp;
pub mod models;
pub mod tools;
