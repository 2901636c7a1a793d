//! # Ingredient Parser
//!
//! This module turns single ingredient lines into [`ParsedIngredientLine`]s.
//!
//! One grammar is applied to the whole line, case-insensitively: an optional
//! quantity (integer, decimal, fraction or mixed number), an optional unit
//! drawn from the unit table's aliases, then the remaining free text. The
//! quantity is normalized to a float, the unit to its canonical name, and the
//! preparation extractor runs over the free text.
//!
//! Parsing never fails. A quantity that cannot be normalized is dropped, and a
//! line the grammar cannot match at all comes back as unstructured food text.
//!
//! ## Usage
//!
//! ```rust
//! use nutriparse::ingredient_parser::parse_ingredient_line;
//!
//! let parsed = parse_ingredient_line("3 apples, diced");
//! assert_eq!(parsed.quantity, Some(3.0));
//! assert_eq!(parsed.food_text, "apples");
//! assert_eq!(parsed.preparation.as_deref(), Some("diced"));
//! ```

use crate::ingredient_model::ParsedIngredientLine;
use crate::measurement_patterns::INGREDIENT_LINE_REGEX;
use crate::preparation::extract_preparation;
use crate::quantity::normalize_quantity;
use crate::units::normalize_unit;
use log::{debug, trace, warn};

/// Parse a single ingredient line
pub fn parse_ingredient_line(line: &str) -> ParsedIngredientLine {
    let line = line.trim();

    let Some(captures) = INGREDIENT_LINE_REGEX.captures(line) else {
        debug!("Ingredient grammar did not match '{}', keeping it unstructured", line);
        return ParsedIngredientLine::unstructured(line);
    };

    let quantity = captures
        .name("quantity")
        .and_then(|m| match normalize_quantity(m.as_str()) {
            Ok(amount) => Some(amount),
            Err(err) => {
                warn!("Dropping quantity in '{}': {}", line, err);
                None
            }
        });

    let unit = captures
        .name("unit")
        .and_then(|m| normalize_unit(m.as_str()))
        .map(str::to_string);

    let free_text = captures
        .name("ingredient")
        .map(|m| m.as_str().trim())
        .unwrap_or("");
    let (preparation, food_text) = extract_preparation(free_text);

    let parsed = ParsedIngredientLine {
        quantity,
        unit,
        food_text,
        preparation: preparation.map(str::to_string),
        original_text: line.to_string(),
    };
    trace!("Parsed ingredient line '{}' -> {:?}", line, parsed);
    parsed
}

/// Parse every non-blank line of an ingredients block, in order
pub fn parse_ingredient_lines(text: &str) -> Vec<ParsedIngredientLine> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_ingredient_line)
        .collect()
}
