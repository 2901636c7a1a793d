//! # Error Types Module
//!
//! This module defines the error types surfaced by the library. Parsing and
//! matching never fail as a whole: a bad quantity token is recovered inside the
//! ingredient line parser, and missing food or unit matches are plain data.
//! The only fallible operations are quantity normalization and catalog loading.

use thiserror::Error;

/// Errors raised while normalizing a quantity token
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantityError {
    /// The token is not a number, fraction or mixed number, or divides by zero
    #[error("invalid quantity: {0:?}")]
    InvalidQuantity(String),
}

/// Errors raised while loading a food catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    /// The catalog document is not valid JSON for the expected layout
    #[error("failed to decode catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The catalog decoded but violates a structural rule
    #[error("invalid catalog: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_error_display() {
        let err = QuantityError::InvalidQuantity("1/0".to_string());
        assert_eq!(err.to_string(), "invalid quantity: \"1/0\"");
    }

    #[test]
    fn test_catalog_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CatalogError::from(json_err);
        assert!(err.to_string().starts_with("failed to decode catalog JSON"));
    }
}
