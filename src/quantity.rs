//! # Quantity Normalizer
//!
//! Converts the numeric token captured in front of an ingredient line into a
//! floating-point amount. Three shapes are understood:
//!
//! - plain integers and decimals: `"2"`, `"1.5"`, `".25"`
//! - simple fractions: `"1/2"`
//! - mixed numbers: `"1 1/2"` (whole part, whitespace, fraction)
//!
//! No rounding is applied; the full precision is kept for proportional
//! nutrition scaling later on.

use crate::errors::QuantityError;
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

lazy_static! {
    static ref FRACTION_REGEX: Regex =
        Regex::new(r"^(?:(?P<whole>\d+)\s+)?(?P<num>\d+)\s*/\s*(?P<den>\d+)$")
            .expect("Fraction pattern should be valid");
}

/// Normalize a quantity token into a float
///
/// # Examples
///
/// ```rust
/// use nutriparse::quantity::normalize_quantity;
///
/// assert_eq!(normalize_quantity("2").unwrap(), 2.0);
/// assert_eq!(normalize_quantity("1/2").unwrap(), 0.5);
/// assert_eq!(normalize_quantity("1 1/2").unwrap(), 1.5);
/// assert!(normalize_quantity("1/0").is_err());
/// ```
pub fn normalize_quantity(token: &str) -> Result<f64, QuantityError> {
    let token = token.trim();
    let invalid = || QuantityError::InvalidQuantity(token.to_string());

    if let Some(captures) = FRACTION_REGEX.captures(token) {
        let numerator: f64 = captures["num"].parse().map_err(|_| invalid())?;
        let denominator: f64 = captures["den"].parse().map_err(|_| invalid())?;
        if denominator == 0.0 {
            return Err(invalid());
        }

        let whole: f64 = match captures.name("whole") {
            Some(m) => m.as_str().parse().map_err(|_| invalid())?,
            None => 0.0,
        };

        let value = whole + numerator / denominator;
        trace!("Normalized fractional quantity '{}' -> {}", token, value);
        return Ok(value);
    }

    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            trace!("Normalized quantity '{}' -> {}", token, value);
            Ok(value)
        }
        _ => Err(invalid()),
    }
}
