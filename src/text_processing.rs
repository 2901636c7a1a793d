//! # Text Processing Module
//!
//! This module splits raw recipe text into an ingredients block and an
//! instructions block.
//!
//! ## Strategies
//!
//! The splitter tries, in order:
//!
//! - **Headers**: lines whose trimmed, lower-cased content is exactly one of
//!   the header vocabulary entries ("Ingredients:", "Directions", ...)
//! - **Heuristic**: when no header is present, lines that carry a digit and a
//!   noun-like or unit word, and are shorter than the configured threshold,
//!   are taken as ingredients
//! - **Positional**: when the heuristic marks nothing, the first half of the
//!   lines is ingredients and the second half instructions
//!
//! Splitting never fails.
//!
//! ## Usage
//!
//! ```rust
//! use nutriparse::text_processing::{SectionSplitter, SplitStrategy};
//!
//! let splitter = SectionSplitter::new();
//! let split = splitter.split_with_strategy("Ingredients:\n2 eggs\nMethod:\nWhisk");
//! assert_eq!(split.strategy, SplitStrategy::Headers);
//! assert_eq!(split.ingredients, "2 eggs");
//! assert_eq!(split.instructions, "Whisk");
//! ```

use crate::config::ParserConfig;
use crate::lexical_classifier::{LexicalClassifier, RuleBasedClassifier};
use crate::measurement_patterns::{DIGIT_REGEX, WORD_REGEX};
use crate::units::normalize_unit;
use log::{debug, trace};
use serde::Serialize;

/// Header lines that open the ingredients section, in match order
pub const INGREDIENT_HEADERS: &[&str] = &[
    "ingredients:",
    "ingredients",
    "you'll need:",
    "you'll need",
    "what you'll need:",
    "what you'll need",
    "what you need:",
    "what you need",
];

/// Header lines that open the instructions section, in match order
pub const INSTRUCTION_HEADERS: &[&str] = &[
    "instructions:",
    "instructions",
    "directions:",
    "directions",
    "method:",
    "method",
    "preparation:",
    "preparation",
    "steps:",
    "steps",
];

/// Which strategy produced a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitStrategy {
    /// Both section headers were found
    Headers,
    /// Only the ingredients header was found
    IngredientsHeaderOnly,
    /// Only the instructions header was found
    InstructionsHeaderOnly,
    /// No header; lines were picked by the lexical heuristic
    Heuristic,
    /// Nothing matched; lines were split at the midpoint
    Positional,
}

/// Result of splitting a recipe text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSplit {
    /// Ingredients section text
    pub ingredients: String,
    /// Instructions section text
    pub instructions: String,
    /// Strategy that produced this split
    pub strategy: SplitStrategy,
}

/// Section splitter over a pluggable lexical classifier
#[derive(Debug, Clone)]
pub struct SectionSplitter<C = RuleBasedClassifier> {
    classifier: C,
    config: ParserConfig,
}

impl SectionSplitter<RuleBasedClassifier> {
    /// Create a splitter with the rule-based classifier and default config
    pub fn new() -> Self {
        Self::with_classifier(RuleBasedClassifier::new(), ParserConfig::default())
    }
}

impl Default for SectionSplitter<RuleBasedClassifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: LexicalClassifier> SectionSplitter<C> {
    /// Create a splitter with a custom classifier and config
    pub fn with_classifier(classifier: C, config: ParserConfig) -> Self {
        Self { classifier, config }
    }

    /// The active configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Split text into `(ingredients, instructions)`
    pub fn split(&self, text: &str) -> (String, String) {
        let split = self.split_with_strategy(text);
        (split.ingredients, split.instructions)
    }

    /// Split text and report which strategy fired
    pub fn split_with_strategy(&self, text: &str) -> SectionSplit {
        let lines = split_lines(text);
        debug!("Splitting recipe text of {} lines", lines.len());

        let ingredients_header = find_header(&lines, INGREDIENT_HEADERS);
        let instructions_header = find_header(&lines, INSTRUCTION_HEADERS);

        let split = match (ingredients_header, instructions_header) {
            (Some(ing), Some(ins)) if ing < ins => SectionSplit {
                ingredients: lines[ing + 1..ins].join("\n"),
                instructions: lines[ins + 1..].join("\n"),
                strategy: SplitStrategy::Headers,
            },
            (Some(ing), Some(ins)) => SectionSplit {
                ingredients: lines[ing + 1..].join("\n"),
                instructions: lines[ins + 1..ing].join("\n"),
                strategy: SplitStrategy::Headers,
            },
            (Some(ing), None) => SectionSplit {
                ingredients: lines[ing + 1..].join("\n"),
                instructions: lines[..ing].join("\n"),
                strategy: SplitStrategy::IngredientsHeaderOnly,
            },
            (None, Some(ins)) => SectionSplit {
                ingredients: lines[..ins].join("\n"),
                instructions: lines[ins + 1..].join("\n"),
                strategy: SplitStrategy::InstructionsHeaderOnly,
            },
            (None, None) => self
                .split_heuristically(text, &lines)
                .unwrap_or_else(|| split_positionally(&lines)),
        };

        debug!("Split recipe text using {:?} strategy", split.strategy);
        split
    }

    /// Whether a line looks like an ingredient to the heuristic
    pub fn is_likely_ingredient(&self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() || line.chars().count() >= self.config.max_heuristic_line_length {
            return false;
        }
        if !DIGIT_REGEX.is_match(line) {
            return false;
        }
        WORD_REGEX.find_iter(line).any(|word| {
            let word = word.as_str();
            normalize_unit(word).is_some() || self.classifier.is_noun_like(word)
        })
    }

    fn split_heuristically(&self, text: &str, lines: &[&str]) -> Option<SectionSplit> {
        let marked: Vec<&str> = lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| self.is_likely_ingredient(line))
            .collect();

        if marked.is_empty() {
            debug!("Heuristic marked no ingredient lines");
            return None;
        }
        trace!("Heuristic marked lines: {:?}", marked);

        let mut instructions = text.to_string();
        for line in &marked {
            instructions = instructions.replacen(line, "", 1);
        }

        Some(SectionSplit {
            ingredients: marked.join("\n"),
            instructions,
            strategy: SplitStrategy::Heuristic,
        })
    }
}

/// Split text on '\n', dropping a trailing '\r' from each line
fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Index of the first line that is exactly one of the headers
fn find_header(lines: &[&str], headers: &[&str]) -> Option<usize> {
    lines.iter().position(|line| {
        let folded = line.trim().to_lowercase();
        headers.iter().any(|header| *header == folded)
    })
}

fn split_positionally(lines: &[&str]) -> SectionSplit {
    let mid = lines.len() / 2;
    SectionSplit {
        ingredients: lines[..mid].join("\n"),
        instructions: lines[mid..].join("\n"),
        strategy: SplitStrategy::Positional,
    }
}

/// Split text with the default splitter
pub fn split_sections(text: &str) -> (String, String) {
    SectionSplitter::new().split(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical_classifier::DictionaryClassifier;

    #[test]
    fn test_both_headers_in_order() {
        let splitter = SectionSplitter::new();
        let split = splitter.split_with_strategy(
            "Ingredients:\n2 cups flour\n1 cup sugar\nInstructions:\nMix\nBake",
        );
        assert_eq!(split.strategy, SplitStrategy::Headers);
        assert_eq!(split.ingredients, "2 cups flour\n1 cup sugar");
        assert_eq!(split.instructions, "Mix\nBake");
    }

    #[test]
    fn test_both_headers_reversed() {
        let splitter = SectionSplitter::new();
        let (ingredients, instructions) =
            splitter.split("DIRECTIONS\nMix well\n  What you need:  \n3 eggs");
        assert_eq!(ingredients, "3 eggs");
        assert_eq!(instructions, "Mix well");
    }

    #[test]
    fn test_only_ingredients_header() {
        let splitter = SectionSplitter::new();
        let split = splitter.split_with_strategy("My cake\nIngredients\n2 eggs\n1 cup milk");
        assert_eq!(split.strategy, SplitStrategy::IngredientsHeaderOnly);
        assert_eq!(split.ingredients, "2 eggs\n1 cup milk");
        assert_eq!(split.instructions, "My cake");
    }

    #[test]
    fn test_only_instructions_header_at_top() {
        let splitter = SectionSplitter::new();
        let split = splitter.split_with_strategy("Steps:\nBoil water\nAdd pasta");
        assert_eq!(split.strategy, SplitStrategy::InstructionsHeaderOnly);
        assert_eq!(split.ingredients, "");
        assert_eq!(split.instructions, "Boil water\nAdd pasta");
    }

    #[test]
    fn test_header_must_match_whole_line() {
        let splitter = SectionSplitter::new();
        let split = splitter.split_with_strategy("ingredients for two\nsome words\nmore words\nend");
        assert_eq!(split.strategy, SplitStrategy::Positional);
    }

    #[test]
    fn test_heuristic_split() {
        let splitter = SectionSplitter::new();
        let text = "2 cups flour\n1 tsp salt\nMix everything together.\nBake until golden.";
        let split = splitter.split_with_strategy(text);
        assert_eq!(split.strategy, SplitStrategy::Heuristic);
        assert_eq!(split.ingredients, "2 cups flour\n1 tsp salt");
        assert_eq!(
            split.instructions,
            "\n\nMix everything together.\nBake until golden."
        );
    }

    #[test]
    fn test_heuristic_removes_only_first_occurrence() {
        let splitter = SectionSplitter::new();
        let sentence = "Crack 1 egg into a large bowl, then whisk it together with the milk and the sugar for two full minutes until pale.";
        let text = format!("{}\n1 egg\n2 cups milk", sentence);

        let split = splitter.split_with_strategy(&text);
        assert_eq!(split.strategy, SplitStrategy::Heuristic);
        assert_eq!(split.ingredients, "1 egg\n2 cups milk");
        // The first textual occurrence sits inside the long sentence
        assert_eq!(
            split.instructions,
            "Crack  into a large bowl, then whisk it together with the milk and the sugar for two full minutes until pale.\n1 egg\n"
        );
        assert_eq!(split.instructions.matches("1 egg").count(), 1);
    }

    #[test]
    fn test_heuristic_ignores_long_lines() {
        let splitter =
            SectionSplitter::with_classifier(RuleBasedClassifier::new(), ParserConfig::default());
        let long_line = format!("1 {}", "flour ".repeat(30));
        assert!(!splitter.is_likely_ingredient(&long_line));
        assert!(splitter.is_likely_ingredient("1 flour"));
    }

    #[test]
    fn test_heuristic_with_custom_classifier() {
        let splitter = SectionSplitter::with_classifier(
            DictionaryClassifier::new(["eggs"]),
            ParserConfig::default(),
        );
        assert!(splitter.is_likely_ingredient("3 eggs"));
        assert!(splitter.is_likely_ingredient("2 tbsp zzz"));
        assert!(!splitter.is_likely_ingredient("3 zzz"));
    }

    #[test]
    fn test_positional_split() {
        let splitter = SectionSplitter::with_classifier(|_: &str| false, ParserConfig::default());
        let split = splitter.split_with_strategy("a\nb\nc\nd\ne");
        assert_eq!(split.strategy, SplitStrategy::Positional);
        assert_eq!(split.ingredients, "a\nb");
        assert_eq!(split.instructions, "c\nd\ne");
    }

    #[test]
    fn test_crlf_lines() {
        let (ingredients, instructions) =
            split_sections("Ingredients:\r\n2 eggs\r\nMethod:\r\nWhisk\r\n");
        assert_eq!(ingredients, "2 eggs");
        assert_eq!(instructions, "Whisk\n");
    }

    #[test]
    fn test_empty_text() {
        let split = SectionSplitter::new().split_with_strategy("");
        assert_eq!(split.ingredients, "");
        assert_eq!(split.instructions, "");
    }
}
