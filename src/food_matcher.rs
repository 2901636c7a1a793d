//! # Food Matcher
//!
//! Resolves parsed ingredient lines against a [`FoodCatalog`] snapshot.
//!
//! Matching is a linear scan in catalog order and the first hit wins:
//!
//! 1. exact, case-insensitive match of the food text against a food's name
//!    or alias name
//! 2. containment: the food text is a substring of the name, alias name or
//!    search terms, or the food's name is a substring of the food text
//!
//! Hits are not ranked by specificity. Units resolve independently of the
//! food, through the unit table and then the catalog's unit list.

use crate::catalog::{FoodCatalog, FoodCatalogEntry, MeasurementUnit};
use crate::ingredient_model::{MatchedIngredient, ParsedIngredientLine};
use crate::units::normalize_unit;
use tracing::{debug, trace};

/// Lower-cased lookup keys of one catalog food
#[derive(Debug, Clone)]
struct FoodKeys {
    name: String,
    alias_name: String,
    search_terms: String,
}

impl FoodKeys {
    fn new(food: &FoodCatalogEntry) -> Self {
        Self {
            name: food.name.trim().to_lowercase(),
            alias_name: food.alias_name.trim().to_lowercase(),
            search_terms: food.search_terms.to_lowercase(),
        }
    }

    fn is_exact(&self, needle: &str) -> bool {
        self.name == needle || (!self.alias_name.is_empty() && self.alias_name == needle)
    }

    fn contains(&self, needle: &str) -> bool {
        self.name.contains(needle)
            || self.alias_name.contains(needle)
            || self.search_terms.contains(needle)
            || (!self.name.is_empty() && needle.contains(self.name.as_str()))
    }
}

/// Matcher borrowing a catalog snapshot for its lifetime
#[derive(Debug, Clone)]
pub struct FoodMatcher<'a> {
    catalog: &'a FoodCatalog,
    keys: Vec<FoodKeys>,
}

impl<'a> FoodMatcher<'a> {
    /// Prepare a matcher over a catalog
    pub fn new(catalog: &'a FoodCatalog) -> Self {
        Self {
            catalog,
            keys: catalog.foods().iter().map(FoodKeys::new).collect(),
        }
    }

    /// Find the catalog food for a piece of food text
    pub fn match_food(&self, food_text: &str) -> Option<&'a FoodCatalogEntry> {
        let needle = food_text.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        let foods = self.catalog.foods();

        if let Some(index) = self.keys.iter().position(|keys| keys.is_exact(&needle)) {
            trace!(food_text, food = %foods[index].name, "exact match");
            return Some(&foods[index]);
        }

        let found = self
            .keys
            .iter()
            .position(|keys| keys.contains(&needle))
            .map(|index| &foods[index]);
        match found {
            Some(food) => trace!(food_text, food = %food.name, "containment match"),
            None => debug!(food_text, "no catalog food matched"),
        }
        found
    }

    /// Resolve a unit name to one of the catalog's measurement units
    pub fn resolve_unit(&self, unit: &str) -> Option<&'a MeasurementUnit> {
        let canonical = normalize_unit(unit).unwrap_or(unit);
        let resolved = self.catalog.find_unit(canonical);
        if resolved.is_none() {
            debug!(unit, "unit not in catalog");
        }
        resolved
    }

    /// Resolve one parsed line
    pub fn match_ingredient(&self, parsed: &ParsedIngredientLine) -> MatchedIngredient<'a> {
        let food = self.match_food(&parsed.food_text);
        let unit = parsed.unit.as_deref().and_then(|unit| self.resolve_unit(unit));
        MatchedIngredient::new(parsed.clone(), food, unit)
    }

    /// Resolve every parsed line, keeping input order
    pub fn match_all(&self, ingredients: &[ParsedIngredientLine]) -> Vec<MatchedIngredient<'a>> {
        let matched: Vec<MatchedIngredient<'a>> = ingredients
            .iter()
            .map(|parsed| self.match_ingredient(parsed))
            .collect();
        debug!(
            total = matched.len(),
            resolved = matched.iter().filter(|m| m.is_resolved()).count(),
            "matched ingredients against catalog"
        );
        matched
    }
}

/// Match parsed ingredient lines against a catalog
pub fn match_ingredients<'a>(
    ingredients: &[ParsedIngredientLine],
    catalog: &'a FoodCatalog,
) -> Vec<MatchedIngredient<'a>> {
    FoodMatcher::new(catalog).match_all(ingredients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient_parser::parse_ingredient_line;

    fn catalog() -> FoodCatalog {
        FoodCatalog::with_default_units(vec![
            FoodCatalogEntry::new(1, "All-purpose flour").with_alias("flour"),
            FoodCatalogEntry::new(2, "Apple").with_alias("apple"),
            FoodCatalogEntry::new(3, "Granulated sugar")
                .with_alias("sugar")
                .with_search_terms("white sugar, caster"),
            FoodCatalogEntry::new(4, "Salt"),
        ])
    }

    #[test]
    fn test_exact_match_on_name_and_alias() {
        let catalog = catalog();
        let matcher = FoodMatcher::new(&catalog);
        assert_eq!(matcher.match_food("ALL-PURPOSE FLOUR").map(|f| f.id), Some(1));
        assert_eq!(matcher.match_food("sugar").map(|f| f.id), Some(3));
    }

    #[test]
    fn test_exact_match_beats_earlier_containment() {
        let catalog = FoodCatalog::with_default_units(vec![
            FoodCatalogEntry::new(1, "Brown rice"),
            FoodCatalogEntry::new(2, "Rice"),
        ]);
        let matcher = FoodMatcher::new(&catalog);
        assert_eq!(matcher.match_food("rice").map(|f| f.id), Some(2));
    }

    #[test]
    fn test_containment_match() {
        let catalog = catalog();
        let matcher = FoodMatcher::new(&catalog);
        // needle inside search terms
        assert_eq!(matcher.match_food("caster").map(|f| f.id), Some(3));
        // food name inside needle
        assert_eq!(matcher.match_food("apples").map(|f| f.id), Some(2));
        assert_eq!(matcher.match_food("coarse sea salt").map(|f| f.id), Some(4));
    }

    #[test]
    fn test_first_containment_hit_wins() {
        let catalog = FoodCatalog::with_default_units(vec![
            FoodCatalogEntry::new(1, "Whole milk"),
            FoodCatalogEntry::new(2, "Skim milk"),
        ]);
        let matcher = FoodMatcher::new(&catalog);
        assert_eq!(matcher.match_food("milk").map(|f| f.id), Some(1));
    }

    #[test]
    fn test_no_match_and_empty_text() {
        let catalog = catalog();
        let matcher = FoodMatcher::new(&catalog);
        assert!(matcher.match_food("dragon fruit").is_none());
        assert!(matcher.match_food("   ").is_none());
    }

    #[test]
    fn test_unit_resolution_is_independent_of_food() {
        let catalog = catalog();
        let matched = match_ingredients(&[parse_ingredient_line("2 tbsp unicorn dust")], &catalog);
        assert!(!matched[0].is_resolved());
        assert_eq!(matched[0].unit().map(|u| u.name.as_str()), Some("tablespoon"));
    }

    #[test]
    fn test_unknown_catalog_unit_is_none() {
        let catalog = FoodCatalog::new(vec![FoodCatalogEntry::new(1, "Flour")], Vec::new());
        let matched = match_ingredients(&[parse_ingredient_line("2 cups flour")], &catalog);
        assert!(matched[0].is_resolved());
        assert!(matched[0].unit().is_none());
    }
}
