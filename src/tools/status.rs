//! vetcalc Status Tool
//!
//! Provides runtime status information about the vetcalc service, plus the
//! usage guide served by the calculator_instructions tool.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Calculator usage instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# vetcalc Calculator Instructions

This guide explains how to use the veterinary calculator tools.

## Overview

Two independent calculators are available:
1. **Anesthesia risk checklist** - ASA physical status class plus a weighted
   risk-factor checklist, producing a total score, a Low/Moderate/High tier,
   and the monitoring checklist for that tier.
2. **RER/MER energy calculator** - species, body weight, and feeding plan,
   producing resting and maintenance energy requirements and an optional
   cups-per-day portion.

Every call recomputes the full result from the values you submit. Nothing
is stored between calls, so always send the complete set of current values.

---

## Anesthesia Risk Assessment

**Tool:** `assess_anesthesia_risk`

| Parameter | Type | Notes |
|-----------|------|-------|
| asa | string (optional) | ASA class 1-5. Anything else silently uses 1. |
| factors | list of strings | Checklist factor ids, e.g. "ars-cardiac". |

**Workflow:**
1. Call `list_risk_factors` once to see the seven valid factor ids, their
   labels, and weights.
2. Call `assess_anesthesia_risk` with the patient's ASA class and every
   factor that applies.
3. Read `panel` for the display strings: total score, tier, the monitoring
   checklist, and the summary note.

**Scoring rules:**
- Total = ASA class + sum of checked factor weights.
- Tier: total of 3 or less is Low, 4-7 is Moderate, 8 or more is High.
- A total of 8 or more also sets `escalation: true` and appends the
  escalation warning to the note.
- Unknown factor ids are ignored; a factor listed twice counts once.
- An ASA value outside 1-5 (or non-numeric) is used as class 1, not
  rejected.

---

## RER/MER Energy Calculation

**Tool:** `calculate_energy`

| Parameter | Type | Notes |
|-----------|------|-------|
| species | string (optional) | "cat" selects cat; anything else is dog. |
| weight_kg | string (optional) | Body weight in kilograms. Must be positive. |
| plan | string (optional) | Feeding plan key; unknown keys fall back to maintenance_neutered. |
| kcal_per_cup | string (optional) | Caloric density of the food. Enables the cups/day output. |

**Workflow:**
1. Call `list_nutrition_plans` once to see the plan keys and the factor
   applied per species.
2. Call `calculate_energy` with the current values.
3. Read `panel` for the display strings: RER, MER, cups/day, and the note.

**Formulas:**
- RER = 70 x weight^0.75 kcal/day
- MER = RER x plan factor
- cups/day = MER / kcal_per_cup (only when kcal_per_cup is positive)

**Validation:**
- Body weight is the only hard requirement. A missing, non-numeric, or
  non-positive weight returns an input-error report with the message
  "Enter a valid body weight." and a panel of "-" placeholders. This is a
  normal tool result, not a protocol error - relay the message to the user.
- Species and plan never fail; unrecognized values use the documented
  defaults (dog, maintenance_neutered).
- A missing or invalid kcal_per_cup is not an error; the cups output is
  just "-".

---

## Quick Reference

| Task | Tool |
|------|------|
| Score an anesthesia checklist | `assess_anesthesia_risk` |
| Discover valid factor ids and weights | `list_risk_factors` |
| Compute RER/MER and portions | `calculate_energy` |
| Discover plan keys and factors | `list_nutrition_plans` |
| Service build and process info | `vetcalc_status` |

## Notes

- All numeric display strings come pre-formatted in `panel`: energy values
  as whole kcal/day, factors and cups to 2 decimal places, "-" for absent
  values.
- These calculators are educational aids. Results should be confirmed by
  the attending veterinarian before clinical use.
"#;

/// Runtime status of the vetcalc service
#[derive(Debug, Clone, Serialize)]
pub struct VetcalcStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,

    /// UTC timestamp of this status snapshot
    pub as_of: String,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> VetcalcStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        VetcalcStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            as_of: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
