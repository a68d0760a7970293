//! Display formatting of numeric results.
//!
//! Converts an `f64` into the canonical display string: plain decimal limited
//! to a significant-digit budget where possible, normalized exponential form
//! for very large or very small magnitudes, and the error token for anything
//! non-finite. Pure functions, independent of engine state.

/// Fixed display string for invalid results (division by zero, overflow).
pub const ERROR_TOKEN: &str = "Error";

/// Maximum number of digits shown (and accepted) in plain decimal form.
pub const MAX_DIGITS: usize = 12;

/// Magnitudes below this (except exact zero) fall back to exponential form.
const SCI_LOWER_BOUND: f64 = 1e-6;

/// Magnitudes at or above this no longer fit the digit budget as an integer.
const SCI_UPPER_BOUND: f64 = 1e12;

/// Fractional digits of the mantissa in exponential form.
const SCI_PRECISION: usize = 6;

/// Format a numeric result for display.
///
/// Non-finite input maps to [`ERROR_TOKEN`]; text like `"NaN"` or `"inf"` is
/// never produced. Finite values within `[1e-6, 1e12)` are rendered as plain
/// decimals with at most [`MAX_DIGITS`] significant digits, trailing zeros
/// and a lone trailing point trimmed. Everything else uses normalized
/// exponential form with a fixed mantissa precision.
pub fn format(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_TOKEN.to_string();
    }

    // Collapses negative zero as well.
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= SCI_UPPER_BOUND || magnitude < SCI_LOWER_BOUND {
        return format!("{:.*e}", SCI_PRECISION, value);
    }

    // Spend the digit budget that the integer part leaves over on decimals.
    let int_digits = magnitude.log10().floor().max(0.0) as usize + 1;
    let decimals = MAX_DIGITS.saturating_sub(int_digits);

    let rendered = format!("{:.*}", decimals, value);
    // Only fractional zeros may be trimmed; an integer rendering keeps all
    // of its digits.
    let trimmed = if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered.as_str()
    };

    // Rounding at the top of the range can carry into one digit more than
    // the budget allows ({:.0} of 999999999999.6 is a 13-digit string).
    if digit_count(trimmed) > MAX_DIGITS {
        return format!("{:.*e}", SCI_PRECISION, value);
    }

    trimmed.to_string()
}

/// Count the digit characters of a display string (sign and point excluded).
pub fn digit_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_render_plain() {
        assert_eq!(format(0.0), "0");
        assert_eq!(format(-0.0), "0");
        assert_eq!(format(7.0), "7");
        assert_eq!(format(-42.0), "-42");
        assert_eq!(format(999_999_999_999.0), "999999999999");
    }

    #[test]
    fn test_integer_results_keep_their_trailing_zeros() {
        // Renderings without a decimal point must never be trimmed.
        assert_eq!(format(100_000_000_000.0), "100000000000");
        assert_eq!(format(500_000_000_000.0), "500000000000");
        assert_eq!(format(-100_000_000_000.0), "-100000000000");
        assert_eq!(format(10.0), "10");
    }

    #[test]
    fn test_rounding_carry_past_budget_goes_exponential() {
        // {:.0} rounds this up to 13 digits; the budget forces exponential.
        assert_eq!(format(999_999_999_999.6), "1.000000e12");
        assert_eq!(format(-999_999_999_999.6), "-1.000000e12");
        // Rounding down at the same magnitude stays plain.
        assert_eq!(format(999_999_999_999.4), "999999999999");
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        assert_eq!(format(1.5), "1.5");
        assert_eq!(format(2.50), "2.5");
        assert_eq!(format(0.1 + 0.2), "0.3");
        assert_eq!(format(-0.25), "-0.25");
    }

    #[test]
    fn test_repeating_decimals_limited_to_budget() {
        // 1/3 with one integer digit leaves eleven decimals.
        assert_eq!(format(1.0 / 3.0), "0.33333333333");
        assert_eq!(format(2.0 / 3.0), "0.66666666667");
    }

    #[test]
    fn test_large_magnitudes_go_exponential() {
        assert_eq!(format(1e12), "1.000000e12");
        assert_eq!(format(-2.5e15), "-2.500000e15");
    }

    #[test]
    fn test_small_magnitudes_go_exponential() {
        assert_eq!(format(1e-7), "1.000000e-7");
        assert_eq!(format(-3.2e-9), "-3.200000e-9");
    }

    #[test]
    fn test_epsilon_boundary_stays_plain() {
        assert_eq!(format(1e-6), "0.000001");
    }

    #[test]
    fn test_non_finite_maps_to_error_token() {
        assert_eq!(format(f64::NAN), ERROR_TOKEN);
        assert_eq!(format(f64::INFINITY), ERROR_TOKEN);
        assert_eq!(format(f64::NEG_INFINITY), ERROR_TOKEN);
    }

    #[test]
    fn test_round_trip_within_plain_range() {
        for v in [0.5, 12.25, -3.125, 1024.0, 0.000001] {
            let parsed: f64 = format(v).parse().unwrap();
            assert_eq!(parsed, v);
        }
    }

    #[test]
    fn test_digit_count_ignores_sign_and_point() {
        assert_eq!(digit_count("0"), 1);
        assert_eq!(digit_count("-12.5"), 3);
        assert_eq!(digit_count("123456789012"), 12);
    }
}
