//! # Food Catalog
//!
//! An immutable, ordered snapshot of the reference food database the matcher
//! resolves ingredients against. Each entry carries nutrition values per 100 g
//! and its own unit-to-gram conversion factors; the catalog also carries the
//! measurement-unit table that parsed unit names resolve to.
//!
//! Iteration order is the order entries were supplied in. Match tie-breaks
//! depend on it, so it is never re-sorted.
//!
//! ## JSON layout
//!
//! ```json
//! {
//!   "units": [{ "name": "cup", "abbreviation": "c", "type": "volume" }],
//!   "foods": [{
//!     "name": "All-purpose flour",
//!     "common_name": "flour",
//!     "search_terms": "wheat flour, plain flour",
//!     "calories": 364, "protein": 10.3, "carbohydrates": 76.3, "fat": 1.0,
//!     "conversions": { "cup": 125 }
//!   }]
//! }
//! ```
//!
//! A bare array of foods is accepted too, with the default unit table.

use crate::errors::CatalogError;
use crate::units::{normalize_unit, unit_table, UnitCategory};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::{debug, info, warn};

/// Nutrition values per 100 g of a food
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionPer100g {
    /// kcal
    pub calories: f64,
    /// grams
    pub protein: f64,
    /// grams
    pub carbohydrates: f64,
    /// grams
    pub fat: f64,
    /// grams
    pub fiber: f64,
    /// grams
    pub sugar: f64,
    /// grams
    pub saturated_fat: f64,
    /// mg
    pub cholesterol: f64,
    /// mg
    pub sodium: f64,
    /// mg
    pub potassium: f64,
    /// mg
    pub calcium: f64,
    /// mg
    pub iron: f64,
    /// mg
    pub vitamin_c: f64,
}

/// A measurement unit known to the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementUnit {
    /// Canonical unit name (e.g. "cup")
    pub name: String,
    /// Short display form (e.g. "c")
    #[serde(default)]
    pub abbreviation: String,
    /// Unit category
    #[serde(rename = "type")]
    pub category: UnitCategory,
}

/// One food of the reference catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCatalogEntry {
    /// Identity key
    pub id: u64,
    /// Display name (e.g. "All-purpose flour")
    pub name: String,
    /// Common or alias name (e.g. "flour"), may be empty
    pub alias_name: String,
    /// Free-form search terms, may be empty
    pub search_terms: String,
    /// Food group, when known
    pub food_group: Option<String>,
    /// Longer description, may be empty
    pub description: String,
    /// Nutrition values per 100 g
    pub nutrition: NutritionPer100g,
    /// Grams per one unit, keyed by canonical unit name
    pub conversions: BTreeMap<String, f64>,
}

impl FoodCatalogEntry {
    /// Create an entry with empty alias, search terms and nutrition
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            alias_name: String::new(),
            search_terms: String::new(),
            food_group: None,
            description: String::new(),
            nutrition: NutritionPer100g::default(),
            conversions: BTreeMap::new(),
        }
    }

    /// Set the alias name
    pub fn with_alias(mut self, alias_name: &str) -> Self {
        self.alias_name = alias_name.to_string();
        self
    }

    /// Set the search terms
    pub fn with_search_terms(mut self, search_terms: &str) -> Self {
        self.search_terms = search_terms.to_string();
        self
    }

    /// Set the nutrition values
    pub fn with_nutrition(mut self, nutrition: NutritionPer100g) -> Self {
        self.nutrition = nutrition;
        self
    }

    /// Add a conversion factor for a unit
    pub fn with_conversion(mut self, unit: &str, grams_per_unit: f64) -> Self {
        let key = normalize_unit(unit)
            .map(str::to_string)
            .unwrap_or_else(|| unit.trim().to_lowercase());
        self.conversions.insert(key, grams_per_unit);
        self
    }

    /// Grams in one `unit` of this food, if a specific conversion exists
    pub fn grams_per_unit(&self, unit: &str) -> Option<f64> {
        self.conversions.get(&unit.trim().to_lowercase()).copied()
    }
}

/// Read-only snapshot of foods and measurement units
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FoodCatalog {
    foods: Vec<FoodCatalogEntry>,
    units: Vec<MeasurementUnit>,
}

/// Measurement units for every canonical unit of the static unit table
pub fn default_measurement_units() -> Vec<MeasurementUnit> {
    unit_table()
        .iter()
        .map(|entry| MeasurementUnit {
            name: entry.name.to_string(),
            abbreviation: entry.abbreviation().to_string(),
            category: entry.category,
        })
        .collect()
}

impl FoodCatalog {
    /// Build a catalog from foods and an explicit unit table
    pub fn new(foods: Vec<FoodCatalogEntry>, units: Vec<MeasurementUnit>) -> Self {
        Self { foods, units }
    }

    /// Build a catalog from foods, using the default unit table
    pub fn with_default_units(foods: Vec<FoodCatalogEntry>) -> Self {
        Self::new(foods, default_measurement_units())
    }

    /// Foods, in catalog order
    pub fn foods(&self) -> &[FoodCatalogEntry] {
        &self.foods
    }

    /// Measurement units, in catalog order
    pub fn units(&self) -> &[MeasurementUnit] {
        &self.units
    }

    /// Number of foods
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the catalog holds no foods
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Find a measurement unit by name, case-insensitively
    pub fn find_unit(&self, name: &str) -> Option<&MeasurementUnit> {
        let folded = name.trim().to_lowercase();
        self.units
            .iter()
            .find(|unit| unit.name.to_lowercase() == folded)
    }

    /// Find a food by id
    pub fn get(&self, id: u64) -> Option<&FoodCatalogEntry> {
        self.foods.iter().find(|food| food.id == id)
    }

    /// Decode a catalog from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let (raw_units, raw_foods) = match document {
            CatalogDocument::Full { units, foods } => (units, foods),
            CatalogDocument::Foods(foods) => (None, foods),
        };

        let units = match raw_units {
            Some(units) => {
                let mut seen = HashSet::new();
                for unit in &units {
                    if !seen.insert(unit.name.to_lowercase()) {
                        return Err(CatalogError::Invalid(format!(
                            "duplicate measurement unit '{}'",
                            unit.name
                        )));
                    }
                }
                units
            }
            None => default_measurement_units(),
        };

        let mut catalog = Self::new(Vec::new(), units);
        let mut seen_ids = HashSet::new();
        let mut next_id: u64 = 1;

        for raw in raw_foods {
            let name = raw.name.trim();
            if name.is_empty() {
                warn!("Skipping catalog food without a name");
                continue;
            }

            let id = match raw.id {
                Some(id) => id,
                None => next_id,
            };
            // Saturates at u64::MAX; a later food without an id then collides below
            next_id = next_id.max(id).saturating_add(1);
            if !seen_ids.insert(id) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate food id {} ('{}')",
                    id, name
                )));
            }

            let mut entry = FoodCatalogEntry {
                id,
                name: name.to_string(),
                alias_name: raw.common_name.trim().to_string(),
                search_terms: raw.search_terms.trim().to_string(),
                food_group: raw
                    .food_group
                    .map(|group| group.trim().to_string())
                    .filter(|group| !group.is_empty()),
                description: raw.description.trim().to_string(),
                nutrition: raw.nutrition,
                conversions: BTreeMap::new(),
            };

            for (unit_key, grams) in raw.conversions {
                let unit_name = normalize_unit(&unit_key)
                    .map(str::to_string)
                    .unwrap_or_else(|| unit_key.trim().to_lowercase());
                let Some(unit) = catalog.find_unit(&unit_name) else {
                    warn!(
                        "Dropping conversion for unknown unit '{}' on food '{}'",
                        unit_key, entry.name
                    );
                    continue;
                };
                if !(grams.is_finite() && grams > 0.0) {
                    warn!(
                        "Dropping non-positive conversion {} g/{} on food '{}'",
                        grams, unit_key, entry.name
                    );
                    continue;
                }
                entry.conversions.insert(unit.name.to_lowercase(), grams);
            }

            debug!("Loaded catalog food {} '{}'", entry.id, entry.name);
            catalog.foods.push(entry);
        }

        info!(
            "Loaded food catalog with {} foods and {} units",
            catalog.foods.len(),
            catalog.units.len()
        );
        Ok(catalog)
    }

    /// Read and decode a catalog JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        info!("Reading food catalog from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

/// Top-level catalog document: either `{units, foods}` or a bare array of foods
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Full {
        #[serde(default)]
        units: Option<Vec<MeasurementUnit>>,
        foods: Vec<RawFood>,
    },
    Foods(Vec<RawFood>),
}

/// Food record as it appears in catalog files
#[derive(Debug, Deserialize)]
struct RawFood {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    common_name: String,
    #[serde(default)]
    search_terms: String,
    #[serde(default)]
    food_group: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(flatten)]
    nutrition: NutritionPer100g,
    #[serde(default)]
    conversions: BTreeMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_units_cover_unit_table() {
        let units = default_measurement_units();
        assert_eq!(units.len(), unit_table().len());
        let cup = units.iter().find(|u| u.name == "cup").unwrap();
        assert_eq!(cup.abbreviation, "c");
        assert_eq!(cup.category, UnitCategory::Volume);
    }

    #[test]
    fn test_find_unit_is_case_insensitive() {
        let catalog = FoodCatalog::with_default_units(Vec::new());
        assert_eq!(catalog.find_unit("Cup").unwrap().name, "cup");
        assert!(catalog.find_unit("scoop").is_none());
    }

    #[test]
    fn test_builder_normalizes_conversion_units() {
        let flour = FoodCatalogEntry::new(1, "All-purpose flour").with_conversion("Cups", 125.0);
        assert_eq!(flour.grams_per_unit("cup"), Some(125.0));
        assert_eq!(flour.grams_per_unit("tablespoon"), None);
    }

    #[test]
    fn test_from_json_full_document() {
        let json = r#"{
            "units": [
                {"name": "cup", "abbreviation": "c", "type": "volume"},
                {"name": "scoop", "abbreviation": "sc", "type": "count"}
            ],
            "foods": [
                {"name": "Oats", "common_name": "oatmeal", "calories": 389,
                 "conversions": {"cups": 81, "scoop": 40, "tbsp": 5}},
                {"name": "  ", "calories": 1},
                {"name": "Honey", "food_group": "Sweets", "calories": 304, "sugar": 82.1}
            ]
        }"#;

        let catalog = FoodCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.units().len(), 2);

        let oats = &catalog.foods()[0];
        assert_eq!(oats.id, 1);
        assert_eq!(oats.alias_name, "oatmeal");
        assert_eq!(oats.nutrition.calories, 389.0);
        assert_eq!(oats.nutrition.protein, 0.0);
        assert_eq!(oats.grams_per_unit("cup"), Some(81.0));
        assert_eq!(oats.grams_per_unit("scoop"), Some(40.0));
        // tablespoon is not in this catalog's unit table
        assert_eq!(oats.grams_per_unit("tablespoon"), None);

        let honey = &catalog.foods()[1];
        assert_eq!(honey.id, 2);
        assert_eq!(honey.food_group.as_deref(), Some("Sweets"));
        assert_eq!(honey.nutrition.sugar, 82.1);
    }

    #[test]
    fn test_from_json_bare_array_uses_default_units() {
        let json = r#"[{"id": 10, "name": "Apple", "common_name": "apple"}, {"name": "Pear"}]"#;
        let catalog = FoodCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.units().len(), unit_table().len());
        assert_eq!(catalog.get(10).unwrap().name, "Apple");
        assert_eq!(catalog.get(11).unwrap().name, "Pear");
    }

    #[test]
    fn test_from_json_rejects_duplicate_ids() {
        let json = r#"[{"id": 1, "name": "Apple"}, {"id": 1, "name": "Pear"}]"#;
        assert!(matches!(
            FoodCatalog::from_json_str(json),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_id_overflow() {
        let json = r#"[{"id": 18446744073709551615, "name": "Apple"}, {"name": "Pear"}]"#;
        assert!(matches!(
            FoodCatalog::from_json_str(json),
            Err(CatalogError::Invalid(_))
        ));

        let json = r#"[{"id": 18446744073709551615, "name": "Apple"}]"#;
        let catalog = FoodCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.foods()[0].id, u64::MAX);
    }

    #[test]
    fn test_from_json_rejects_malformed_json() {
        assert!(matches!(
            FoodCatalog::from_json_str("{\"foods\": ["),
            Err(CatalogError::Json(_))
        ));
    }
}
