//! # Measurement Patterns Module
//!
//! This module contains the compiled regex patterns shared by the ingredient
//! line parser and the section splitter.

use crate::units::alias_alternation;
use lazy_static::lazy_static;
use regex::Regex;

/// Quantity token: mixed number, simple fraction, or integer/decimal (tried in that order)
pub const QUANTITY_PATTERN: &str = r"\d+\s+\d+/\d+|\d+/\d+|\d*\.?\d+";

/// Build the ingredient line grammar: optional quantity, optional unit, mandatory free text
///
/// The unit must be followed by whitespace or a comma (an optional period is
/// swallowed), so an alias never eats the start of a longer word.
fn ingredient_line_pattern() -> String {
    format!(
        r"(?i)^(?P<quantity>{quantity})?\s*(?:(?P<unit>{units})\.?(?:\s*,\s*|\s+))?\s*(?P<ingredient>.+)$",
        quantity = QUANTITY_PATTERN,
        units = alias_alternation(),
    )
}

// Lazy static regexes to avoid recompilation
lazy_static! {
    pub static ref INGREDIENT_LINE_REGEX: Regex = Regex::new(&ingredient_line_pattern())
        .expect("Ingredient line pattern should be valid");
    pub static ref DIGIT_REGEX: Regex = Regex::new(r"\d").expect("Digit pattern should be valid");
    pub static ref WORD_REGEX: Regex =
        Regex::new(r"\p{L}[\p{L}'\-]*").expect("Word pattern should be valid");
}
