//! # Unit Table
//!
//! A fixed, ordered table mapping canonical cooking units to their surface
//! forms (abbreviations, plurals, British spellings). Lookups are
//! case-insensitive and exact: there is no partial or fuzzy unit matching.
//!
//! Alias lists are disjoint under case-insensitive comparison. Should an
//! overlap ever slip in, [`normalize_unit`] resolves it to the first entry
//! scanned.

use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// Volume units (cup, tablespoon, liter, ...)
    Volume,
    /// Weight units (gram, ounce, pound, ...)
    Weight,
    /// Count units (slice, clove, can, ...)
    Count,
}

impl UnitCategory {
    /// Parse a category name such as `"volume"`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "volume" => Some(UnitCategory::Volume),
            "weight" => Some(UnitCategory::Weight),
            "count" => Some(UnitCategory::Count),
            _ => None,
        }
    }

    /// Lowercase name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Volume => "volume",
            UnitCategory::Weight => "weight",
            UnitCategory::Count => "count",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One canonical unit and the surface forms that normalize to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitEntry {
    /// Canonical unit name (e.g. "tablespoon")
    pub name: &'static str,
    /// Unit category
    pub category: UnitCategory,
    /// Every accepted surface form, including the canonical name itself
    pub aliases: &'static [&'static str],
}

impl UnitEntry {
    /// Check whether an already case-folded and trimmed token is one of this unit's aliases
    fn has_alias(&self, folded: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| alias.to_lowercase() == folded)
    }

    /// Shortest alias, used as the display abbreviation
    pub fn abbreviation(&self) -> &'static str {
        self.aliases
            .iter()
            .copied()
            .min_by_key(|alias| alias.chars().count())
            .unwrap_or(self.name)
    }
}

static UNIT_TABLE: &[UnitEntry] = &[
    // Volume
    UnitEntry {
        name: "teaspoon",
        category: UnitCategory::Volume,
        aliases: &["tsp", "tsps", "teaspoon", "teaspoons", "t"],
    },
    UnitEntry {
        name: "tablespoon",
        category: UnitCategory::Volume,
        aliases: &["tbsp", "tbsps", "tablespoon", "tablespoons", "tbs"],
    },
    UnitEntry {
        name: "fluid ounce",
        category: UnitCategory::Volume,
        aliases: &["fl oz", "fluid ounce", "fluid ounces"],
    },
    UnitEntry {
        name: "cup",
        category: UnitCategory::Volume,
        aliases: &["c", "cup", "cups"],
    },
    UnitEntry {
        name: "pint",
        category: UnitCategory::Volume,
        aliases: &["pt", "pint", "pints"],
    },
    UnitEntry {
        name: "quart",
        category: UnitCategory::Volume,
        aliases: &["qt", "quart", "quarts"],
    },
    UnitEntry {
        name: "gallon",
        category: UnitCategory::Volume,
        aliases: &["gal", "gallon", "gallons"],
    },
    UnitEntry {
        name: "milliliter",
        category: UnitCategory::Volume,
        aliases: &["ml", "milliliter", "milliliters", "millilitre", "millilitres"],
    },
    UnitEntry {
        name: "liter",
        category: UnitCategory::Volume,
        aliases: &["l", "liter", "liters", "litre", "litres"],
    },
    // Weight
    UnitEntry {
        name: "pound",
        category: UnitCategory::Weight,
        aliases: &["lb", "lbs", "pound", "pounds"],
    },
    UnitEntry {
        name: "ounce",
        category: UnitCategory::Weight,
        aliases: &["oz", "ounce", "ounces"],
    },
    UnitEntry {
        name: "gram",
        category: UnitCategory::Weight,
        aliases: &["g", "gram", "grams", "gramme", "grammes"],
    },
    UnitEntry {
        name: "kilogram",
        category: UnitCategory::Weight,
        aliases: &["kg", "kilogram", "kilograms", "kilogramme", "kilogrammes"],
    },
    // Count
    UnitEntry {
        name: "slice",
        category: UnitCategory::Count,
        aliases: &["slice", "slices"],
    },
    UnitEntry {
        name: "piece",
        category: UnitCategory::Count,
        aliases: &["piece", "pieces"],
    },
    UnitEntry {
        name: "handful",
        category: UnitCategory::Count,
        aliases: &["handful", "handfuls"],
    },
    UnitEntry {
        name: "pinch",
        category: UnitCategory::Count,
        aliases: &["pinch", "pinches"],
    },
    UnitEntry {
        name: "dash",
        category: UnitCategory::Count,
        aliases: &["dash", "dashes"],
    },
    UnitEntry {
        name: "bunch",
        category: UnitCategory::Count,
        aliases: &["bunch", "bunches"],
    },
    UnitEntry {
        name: "can",
        category: UnitCategory::Count,
        aliases: &["can", "cans"],
    },
    UnitEntry {
        name: "clove",
        category: UnitCategory::Count,
        aliases: &["clove", "cloves"],
    },
];

/// The static unit table, in scan order
pub fn unit_table() -> &'static [UnitEntry] {
    UNIT_TABLE
}

/// Normalize a unit token to its canonical name
///
/// The token is trimmed and case-folded, then compared against every alias of
/// every unit in table order. Returns `None` when nothing matches exactly.
///
/// # Examples
///
/// ```rust
/// use nutriparse::units::normalize_unit;
///
/// assert_eq!(normalize_unit("Tbsp"), Some("tablespoon"));
/// assert_eq!(normalize_unit("cups"), Some("cup"));
/// assert_eq!(normalize_unit("not_a_unit"), None);
/// ```
pub fn normalize_unit(token: &str) -> Option<&'static str> {
    let folded = token.trim().to_lowercase();
    if folded.is_empty() {
        return None;
    }

    let found = UNIT_TABLE
        .iter()
        .find(|entry| entry.has_alias(&folded))
        .map(|entry| entry.name);
    trace!("Normalized unit token '{}' -> {:?}", token, found);
    found
}

/// Look up a canonical unit entry by name (case-insensitive)
pub fn lookup(canonical: &str) -> Option<&'static UnitEntry> {
    let folded = canonical.trim().to_lowercase();
    UNIT_TABLE.iter().find(|entry| entry.name == folded)
}

/// Category of a canonical unit, or of any of its aliases
pub fn categorize(unit: &str) -> Option<UnitCategory> {
    normalize_unit(unit)
        .and_then(lookup)
        .map(|entry| entry.category)
}

/// Regex alternation over every alias, longest first
///
/// Longer aliases must be tried before their prefixes ("cups" before "c"),
/// since regex alternation is leftmost-first.
pub fn alias_alternation() -> String {
    let mut aliases: Vec<&'static str> = UNIT_TABLE
        .iter()
        .flat_map(|entry| entry.aliases.iter().copied())
        .collect();
    aliases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    aliases
        .iter()
        .map(|alias| regex::escape(alias))
        .collect::<Vec<_>>()
        .join("|")
}
