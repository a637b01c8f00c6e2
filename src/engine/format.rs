//! Result formatting.

use crate::config::{EngineConfig, NonFinitePolicy};

/// Render a result for the display.
///
/// Finite values use the shortest decimal form that reads back to the same
/// value, so `5.0` renders as `"5"` and very large or small magnitudes are
/// written out in full rather than in scientific notation. Negative zero
/// renders as `"0"`. Non-finite values follow the configured policy.
///
/// # Example
///
/// ```rust
/// use tally::config::EngineConfig;
/// use tally::engine::format_result;
///
/// let config = EngineConfig::default();
/// assert_eq!(format_result(20.0, &config), "20");
/// assert_eq!(format_result(7.5, &config), "7.5");
/// assert_eq!(format_result(f64::INFINITY, &config), "Error");
/// ```
pub fn format_result(value: f64, config: &EngineConfig) -> String {
    if value.is_finite() {
        return format_finite(value);
    }
    match config.non_finite {
        NonFinitePolicy::ErrorLabel => config.error_label.clone(),
        NonFinitePolicy::Passthrough => format_non_finite(value),
    }
}

pub(crate) fn format_finite(value: f64) -> String {
    if value == 0.0 {
        // -0.0 prints as "-0"
        return "0".to_string();
    }
    value.to_string()
}

pub(crate) fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}

/// Parse an operand buffer as a decimal number.
///
/// Accepts what the keypad can produce: digits, at most one point, and the
/// sign or non-finite words a previous result may have left behind.
pub(crate) fn parse_operand(buffer: &str) -> Option<f64> {
    match buffer {
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => buffer.parse::<f64>().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;

    #[test]
    fn whole_numbers_drop_fraction() {
        let config = EngineConfig::default();
        assert_eq!(format_result(5.0, &config), "5");
        assert_eq!(format_result(-3.0, &config), "-3");
        assert_eq!(format_result(-0.0, &config), "0");
    }

    #[test]
    fn large_values_avoid_scientific_notation() {
        let config = EngineConfig::default();
        assert_eq!(format_result(1e20, &config), "100000000000000000000");
        assert_eq!(format_result(1e-7, &config), "0.0000001");
    }

    #[test]
    fn fractions_use_shortest_form() {
        let config = EngineConfig::default();
        assert_eq!(format_result(0.1 + 0.2, &config), "0.30000000000000004");
        assert_eq!(format_result(2.25, &config), "2.25");
    }

    #[test]
    fn non_finite_uses_error_label_by_default() {
        let config = EngineConfig::default();
        assert_eq!(format_result(f64::NAN, &config), "Error");
        assert_eq!(format_result(f64::NEG_INFINITY, &config), "Error");

        let custom = ConfigBuilder::new().error_label("E").build().unwrap();
        assert_eq!(format_result(f64::INFINITY, &custom), "E");
    }

    #[test]
    fn passthrough_writes_non_finite_words() {
        let config = ConfigBuilder::new()
            .non_finite(NonFinitePolicy::Passthrough)
            .build()
            .unwrap();
        assert_eq!(format_result(f64::INFINITY, &config), "Infinity");
        assert_eq!(format_result(f64::NEG_INFINITY, &config), "-Infinity");
        assert_eq!(format_result(f64::NAN, &config), "NaN");
    }

    #[test]
    fn parse_operand_accepts_keypad_forms() {
        assert_eq!(parse_operand("12"), Some(12.0));
        assert_eq!(parse_operand("9."), Some(9.0));
        assert_eq!(parse_operand(".5"), Some(0.5));
        assert_eq!(parse_operand("-3"), Some(-3.0));
        assert_eq!(parse_operand("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_operand("."), None);
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("Error"), None);
    }
}
