//! Numeric coercion and rounding shared by both estimators

use tracing::warn;

/// Coerce free-form text to a number the way a form field would be read.
///
/// Blank input is 0. Decimal and exponent literals parse normally, and
/// `0x`/`0o`/`0b` integer literals are accepted. Anything else, or a value
/// that is not finite, falls back to 0.
pub fn coerce_number(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }

    let parsed = parse_radix_literal(text).or_else(|| text.parse::<f64>().ok());
    match parsed {
        Some(value) if value.is_finite() => value,
        _ => {
            warn!(input = %text, "not a number, using 0");
            0.0
        }
    }
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let lower = text.to_ascii_lowercase();
    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else {
        return None;
    };

    u64::from_str_radix(digits, radix).ok().map(|v| v as f64)
}

/// Round to `decimals` places, halves going up: `floor(v * 10^d + 0.5) / 10^d`.
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let multiplier = 10f64.powi(decimals as i32);
    (value * multiplier + 0.5).floor() / multiplier
}

/// Round a day count to the nearest integer, never below zero.
pub fn round_days(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_plain_numbers() {
        assert_eq!(coerce_number("5"), 5.0);
        assert_eq!(coerce_number(" 12.5 "), 12.5);
        assert_eq!(coerce_number("-3"), -3.0);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number(".5"), 0.5);
    }

    #[test]
    fn test_coerce_radix_literals() {
        assert_eq!(coerce_number("0x10"), 16.0);
        assert_eq!(coerce_number("0B101"), 5.0);
        assert_eq!(coerce_number("0o17"), 15.0);
    }

    #[test]
    fn test_coerce_garbage_is_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("12kg"), 0.0);
        assert_eq!(coerce_number("0xZZ"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.125, 2), 0.13);
        assert_eq!(round_half_up(-0.125, 2), -0.12);
        assert_eq!(round_half_up(7.0 / 0.6, 2), 11.67);
        assert_eq!(round_half_up(27.0, 2), 27.0);
        assert_eq!(round_half_up(3.14159, 0), 3.0);
    }

    #[test]
    fn test_round_days() {
        assert_eq!(round_days(2.093), 2);
        assert_eq!(round_days(2.5), 3);
        assert_eq!(round_days(0.7000000000000001), 1);
        assert_eq!(round_days(-4.2), 0);
        assert_eq!(round_days(f64::NAN), 0);
    }
}
