//! # Nutrition Totals
//!
//! Sums the nutrition of matched ingredients. Each ingredient that has a
//! food, a quantity and a resolved unit contributes
//! `quantity * grams_per_unit / 100` times the food's per-100 g values.
//! Foods without a conversion for the unit count one gram per unit.

use crate::ingredient_model::MatchedIngredient;
use serde::Serialize;
use std::ops::AddAssign;
use tracing::debug;

/// Grams assumed per unit when a food has no conversion for it
pub const DEFAULT_GRAMS_PER_UNIT: f64 = 1.0;

/// Nutrition totals for a recipe or a serving
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl NutritionTotals {
    /// Totals divided by the number of servings (zero counts as one)
    pub fn per_serving(&self, servings: u32) -> Self {
        let servings = f64::from(servings.max(1));
        Self {
            calories: self.calories / servings,
            protein: self.protein / servings,
            carbohydrates: self.carbohydrates / servings,
            fat: self.fat / servings,
            fiber: self.fiber / servings,
        }
    }
}

impl AddAssign for NutritionTotals {
    fn add_assign(&mut self, other: Self) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbohydrates += other.carbohydrates;
        self.fat += other.fat;
        self.fiber += other.fiber;
    }
}

/// Nutrition contributed by one matched ingredient, if it can be computed
pub fn ingredient_nutrition(ingredient: &MatchedIngredient<'_>) -> Option<NutritionTotals> {
    let food = ingredient.food()?;
    let unit = ingredient.unit()?;
    let quantity = ingredient.parsed.quantity?;

    let grams_per_unit = food.grams_per_unit(&unit.name).unwrap_or_else(|| {
        debug!(food = %food.name, unit = %unit.name, "no conversion, assuming 1 g per unit");
        DEFAULT_GRAMS_PER_UNIT
    });
    let proportion = quantity * grams_per_unit / 100.0;
    let per_100g = &food.nutrition;

    Some(NutritionTotals {
        calories: per_100g.calories * proportion,
        protein: per_100g.protein * proportion,
        carbohydrates: per_100g.carbohydrates * proportion,
        fat: per_100g.fat * proportion,
        fiber: per_100g.fiber * proportion,
    })
}

/// Sum the nutrition of every computable ingredient
pub fn calculate_nutrition(ingredients: &[MatchedIngredient<'_>]) -> NutritionTotals {
    let mut totals = NutritionTotals::default();
    let mut counted = 0;
    for contribution in ingredients.iter().filter_map(ingredient_nutrition) {
        totals += contribution;
        counted += 1;
    }
    debug!(
        counted,
        skipped = ingredients.len() - counted,
        calories = totals.calories,
        "calculated nutrition totals"
    );
    totals
}
