//! # Recipe Parser
//!
//! Orchestrates the section splitter and the ingredient line parser over one
//! recipe text.
//!
//! ```rust
//! use nutriparse::recipe_parser::parse_recipe_text;
//!
//! let result = parse_recipe_text("Ingredients:\n2 cups flour\nInstructions:\nBake");
//! assert_eq!(result.ingredients.len(), 1);
//! assert_eq!(result.instructions, "Bake");
//! ```

use crate::config::ParserConfig;
use crate::ingredient_model::ParseResult;
use crate::ingredient_parser::parse_ingredient_lines;
use crate::lexical_classifier::{LexicalClassifier, RuleBasedClassifier};
use crate::text_processing::SectionSplitter;
use log::debug;

/// Recipe text parser
#[derive(Debug, Clone)]
pub struct RecipeParser<C = RuleBasedClassifier> {
    splitter: SectionSplitter<C>,
}

impl RecipeParser<RuleBasedClassifier> {
    /// Create a parser with the default classifier and config
    pub fn new() -> Self {
        Self {
            splitter: SectionSplitter::new(),
        }
    }

    /// Create a parser with the default classifier and a custom config
    pub fn with_config(config: ParserConfig) -> Self {
        Self::with_classifier(RuleBasedClassifier::new(), config)
    }
}

impl Default for RecipeParser<RuleBasedClassifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: LexicalClassifier> RecipeParser<C> {
    /// Create a parser around another lexical classifier
    pub fn with_classifier(classifier: C, config: ParserConfig) -> Self {
        Self {
            splitter: SectionSplitter::with_classifier(classifier, config),
        }
    }

    /// The section splitter in use
    pub fn splitter(&self) -> &SectionSplitter<C> {
        &self.splitter
    }

    /// Parse a recipe text into ingredient lines and instructions
    ///
    /// Blank or whitespace-only input yields an empty result.
    pub fn parse(&self, text: &str) -> ParseResult {
        if text.trim().is_empty() {
            debug!("Empty recipe text, nothing to parse");
            return ParseResult::default();
        }

        let (ingredients_text, instructions_text) = self.splitter.split(text);
        let ingredients = parse_ingredient_lines(&ingredients_text);

        debug!(
            "Parsed recipe: {} ingredients, {} characters of instructions",
            ingredients.len(),
            instructions_text.trim().len()
        );

        ParseResult {
            ingredients,
            instructions: instructions_text.trim().to_string(),
        }
    }
}

/// Parse a recipe text with the default parser
pub fn parse_recipe_text(text: &str) -> ParseResult {
    RecipeParser::new().parse(text)
}
