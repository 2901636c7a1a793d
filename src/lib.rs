//! # nutriparse
//!
//! Parses pasted recipe text into structured ingredient lines and an
//! instructions block, then matches the ingredients against a food catalog
//! to attach nutrition records and canonical units.
//!
//! ```rust
//! use nutriparse::{match_ingredients, parse_recipe_text, FoodCatalog, FoodCatalogEntry};
//!
//! let recipe = parse_recipe_text("Ingredients:\n2 cups flour\nInstructions:\nBake");
//! let catalog = FoodCatalog::with_default_units(vec![FoodCatalogEntry::new(1, "Flour")]);
//! let matched = match_ingredients(&recipe.ingredients, &catalog);
//! assert!(matched[0].is_resolved());
//! ```

pub mod catalog;
pub mod config;
pub mod errors;
pub mod food_matcher;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod lexical_classifier;
pub mod measurement_patterns;
pub mod nutrition;
pub mod preparation;
pub mod quantity;
pub mod recipe_parser;
pub mod text_processing;
pub mod units;

pub use catalog::{FoodCatalog, FoodCatalogEntry, MeasurementUnit, NutritionPer100g};
pub use config::ParserConfig;
pub use errors::{CatalogError, QuantityError};
pub use food_matcher::{match_ingredients, FoodMatcher};
pub use ingredient_model::{MatchedIngredient, ParseResult, ParsedIngredientLine};
pub use ingredient_parser::parse_ingredient_line;
pub use lexical_classifier::{DictionaryClassifier, LexicalClassifier, RuleBasedClassifier};
pub use nutrition::{calculate_nutrition, NutritionTotals};
pub use preparation::extract_preparation;
pub use quantity::normalize_quantity;
pub use recipe_parser::{parse_recipe_text, RecipeParser};
pub use text_processing::{SectionSplit, SectionSplitter, SplitStrategy};
pub use units::{normalize_unit, UnitCategory};
