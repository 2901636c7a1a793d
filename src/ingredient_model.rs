//! # Ingredient Data Model
//!
//! This module defines the records produced by the parsing pipeline and the
//! food matcher.
//!
//! ## Core Concepts
//!
//! - **ParsedIngredientLine**: one ingredient line split into quantity, unit,
//!   food text and preparation. Built once per line, never mutated afterwards.
//! - **ParseResult**: every parsed ingredient line, in input order, plus the
//!   instructions text.
//! - **MatchedIngredient**: a parsed line plus the catalog food and unit it
//!   resolved to. It is `resolved` exactly when a food is attached.
//!
//! ## Usage
//!
//! ```rust
//! use nutriparse::ingredient_model::ParsedIngredientLine;
//!
//! let line = ParsedIngredientLine::unstructured("a pinch of love");
//! assert!(!line.has_quantity());
//! assert_eq!(line.food_text, "a pinch of love");
//! ```

use crate::catalog::{FoodCatalogEntry, MeasurementUnit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One ingredient line decomposed into its parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredientLine {
    /// Amount, non-negative when present
    pub quantity: Option<f64>,
    /// Canonical unit name (e.g. "cup")
    pub unit: Option<String>,
    /// Remaining free text once quantity, unit and preparation are removed
    pub food_text: String,
    /// Preparation verb (e.g. "diced")
    pub preparation: Option<String>,
    /// The source line, verbatim
    pub original_text: String,
}

impl ParsedIngredientLine {
    /// A line with no recognized structure: the whole text is food text
    pub fn unstructured(line: &str) -> Self {
        Self {
            quantity: None,
            unit: None,
            food_text: line.to_string(),
            preparation: None,
            original_text: line.to_string(),
        }
    }

    /// Check if this line carries a quantity
    pub fn has_quantity(&self) -> bool {
        self.quantity.is_some()
    }
}

/// Output of one recipe parse
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Parsed ingredient lines, in input order
    pub ingredients: Vec<ParsedIngredientLine>,
    /// Instructions section text
    pub instructions: String,
}

impl ParseResult {
    /// True when nothing was found at all
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.instructions.is_empty()
    }
}

/// A parsed ingredient line resolved against a food catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedIngredient<'a> {
    /// The parsed line this match was made for
    #[serde(flatten)]
    pub parsed: ParsedIngredientLine,
    food: Option<&'a FoodCatalogEntry>,
    #[serde(rename = "resolved_unit")]
    unit: Option<&'a MeasurementUnit>,
    resolved: bool,
}

impl<'a> MatchedIngredient<'a> {
    /// Attach an optional food and unit to a parsed line
    pub fn new(
        parsed: ParsedIngredientLine,
        food: Option<&'a FoodCatalogEntry>,
        unit: Option<&'a MeasurementUnit>,
    ) -> Self {
        Self {
            parsed,
            food,
            unit,
            resolved: food.is_some(),
        }
    }

    /// The catalog food this ingredient resolved to
    pub fn food(&self) -> Option<&'a FoodCatalogEntry> {
        self.food
    }

    /// The catalog unit the parsed unit resolved to
    pub fn unit(&self) -> Option<&'a MeasurementUnit> {
        self.unit
    }

    /// Whether a food was attached
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

/// Format a quantity without a trailing ".0" for whole numbers
fn format_quantity(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{}", amount)
    }
}

impl fmt::Display for ParsedIngredientLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(quantity) = self.quantity {
            write!(f, "{} ", format_quantity(quantity))?;
        }
        if let Some(unit) = &self.unit {
            write!(f, "{} ", unit)?;
        }
        write!(f, "{}", self.food_text)?;

        if let Some(preparation) = &self.preparation {
            write!(f, " ({})", preparation)?;
        }

        Ok(())
    }
}

impl fmt::Display for MatchedIngredient<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.food {
            Some(food) => write!(f, "{} -> {}", self.parsed, food.name),
            None => write!(f, "{} -> ?", self.parsed),
        }
    }
}
