//! Input coercion helpers shared by the form drafts and the command line.

use crate::defaults::FIRST_FOLIO;
use crate::error::{ConfigError, ConfigResult};
use crate::model::TaxRate;

/// Coerce free-form tax input into a rate.
///
/// The longest leading decimal number is used (`"16.5 %"` is `16.5`); input
/// without one becomes zero.
#[must_use]
pub fn coerce_tax_rate(input: &str) -> TaxRate {
    let prefix = numeric_prefix(input.trim_start());
    TaxRate::new(prefix.parse::<f64>().unwrap_or(0.0))
}

/// Upper-case and trim a code field such as an RFC or invoice series.
#[must_use]
pub fn normalize_upper(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Parse the optional folio field of the invoicing form.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the text is present but not a
/// positive integer.
pub fn parse_folio(input: &str) -> ConfigResult<Option<u32>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u32>() {
        Ok(folio) if folio >= FIRST_FOLIO => Ok(Some(folio)),
        _ => Err(ConfigError::InvalidField {
            field: "next_folio",
            value: trimmed.to_string(),
            reason: "must be a positive integer",
        }),
    }
}

fn numeric_prefix(input: &str) -> &str {
    let bytes = input.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return "";
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    &input[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(input: &str) -> f64 {
        coerce_tax_rate(input).percent()
    }

    #[test]
    fn coerces_like_a_lenient_number_field() {
        assert!((rate("16.5") - 16.5).abs() < f64::EPSILON);
        assert!((rate("  8") - 8.0).abs() < f64::EPSILON);
        assert!((rate("16.5 %") - 16.5).abs() < f64::EPSILON);
        assert!((rate(".5") - 0.5).abs() < f64::EPSILON);
        assert!((rate("1e1") - 10.0).abs() < f64::EPSILON);
        assert!((rate("7.") - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_numeric_input_becomes_zero() {
        for input in ["abc", "", "-", ".", "%16", "e5"] {
            assert!(rate(input).abs() < f64::EPSILON, "input {input:?}");
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert!((rate("250") - 100.0).abs() < f64::EPSILON);
        assert!(rate("-4").abs() < f64::EPSILON);
    }

    #[test]
    fn folio_accepts_blank_or_positive_integers() {
        assert_eq!(parse_folio("").ok(), Some(None));
        assert_eq!(parse_folio(" 42 ").ok(), Some(Some(42)));
        assert!(parse_folio("0").is_err());
        assert!(parse_folio("-1").is_err());
        assert!(parse_folio("1.5").is_err());
        assert!(parse_folio("abc").is_err());
    }

    #[test]
    fn codes_are_upper_cased() {
        assert_eq!(normalize_upper(" xaxx010101000"), "XAXX010101000");
    }
}
