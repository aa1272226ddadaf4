//! Display formatting helpers
//!
//! Shared number-to-display-string rules for both calculators.

/// Placeholder shown for absent or non-finite values
pub const PLACEHOLDER: &str = "-";

/// Format an energy value: 0 decimal places with a " kcal/day" suffix.
/// Non-finite values render as the placeholder.
pub fn format_kcal_per_day(value: f64) -> String {
    if value.is_finite() {
        format!("{:.0} kcal/day", value)
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Format a factor or cup count: 2 decimal places. Non-finite values render
/// as the placeholder.
pub fn format_factor(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Format a cups-per-day value: 2 decimal places with a " cups/day" suffix,
/// placeholder when absent or non-finite.
pub fn format_cups_per_day(cups: Option<f64>) -> String {
    match cups {
        Some(c) if c.is_finite() => format!("{:.2} cups/day", c),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kcal_rounds_to_whole() {
        assert_eq!(format_kcal_per_day(393.64), "394 kcal/day");
        assert_eq!(format_kcal_per_day(629.84), "630 kcal/day");
        assert_eq!(format_kcal_per_day(197.99), "198 kcal/day");
    }

    #[test]
    fn test_non_finite_is_placeholder() {
        assert_eq!(format_kcal_per_day(f64::NAN), "-");
        assert_eq!(format_kcal_per_day(f64::INFINITY), "-");
        assert_eq!(format_factor(f64::NAN), "-");
    }

    #[test]
    fn test_factor_two_decimals() {
        assert_eq!(format_factor(1.6), "1.60");
        assert_eq!(format_factor(0.8), "0.80");
    }

    #[test]
    fn test_cups_formatting() {
        assert_eq!(format_cups_per_day(Some(1.7995)), "1.80 cups/day");
        assert_eq!(format_cups_per_day(None), "-");
        assert_eq!(format_cups_per_day(Some(f64::NAN)), "-");
    }
}
