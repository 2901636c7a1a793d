//! # Parser Configuration Module
//!
//! This module defines the tunables of the recipe parsing pipeline.
//! The unit, preparation and header vocabularies are fixed tables and are
//! not configurable here.

// Constants for parser configuration
pub const DEFAULT_MAX_HEURISTIC_LINE_LENGTH: usize = 100;

/// Configuration structure for recipe parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Lines of this many characters or more are never guessed to be ingredients
    pub max_heuristic_line_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_heuristic_line_length: DEFAULT_MAX_HEURISTIC_LINE_LENGTH,
        }
    }
}

impl ParserConfig {
    /// Override the heuristic line-length threshold
    pub fn with_max_heuristic_line_length(mut self, length: usize) -> Self {
        self.max_heuristic_line_length = length;
        self
    }
}
