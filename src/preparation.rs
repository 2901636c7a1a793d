//! # Preparation Extractor
//!
//! Detects a known preparation verb ("diced", "minced", ...) in the free text
//! of an ingredient line and strips it out.
//!
//! The vocabulary is scanned in its fixed order and, for each verb, three
//! positions are tried: leading (`"diced tomatoes"`), trailing
//! (`"apples, diced"` / `"tomatoes diced"`) and embedded between commas
//! (`"onion, chopped, divided"`). The first hit wins. Matching is not ranked
//! by length or specificity, so a verb that is part of a food name (the
//! "ground" in "ground beef") is stripped like any other. Matching is
//! case-sensitive: "Minced garlic" keeps its text.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

/// Preparation verbs, in scan order
pub const PREPARATIONS: &[&str] = &[
    "diced", "chopped", "minced", "sliced", "grated", "peeled", "crushed", "ground", "mashed",
    "shredded", "julienned", "cubed", "trimmed", "rinsed", "washed", "dried", "cut", "halved",
];

lazy_static! {
    static ref EMBEDDED_PATTERNS: Vec<(&'static str, Regex)> = PREPARATIONS
        .iter()
        .map(|prep| {
            let pattern = format!(r", {}[,\s]", regex::escape(prep));
            (
                *prep,
                Regex::new(&pattern).expect("Preparation pattern should be valid"),
            )
        })
        .collect();
}

/// Extract a preparation verb from ingredient text
///
/// Returns the verb found (if any) and the residual text with the verb removed.
///
/// # Examples
///
/// ```rust
/// use nutriparse::preparation::extract_preparation;
///
/// assert_eq!(extract_preparation("apples, diced"), (Some("diced"), "apples".to_string()));
/// assert_eq!(extract_preparation("minced garlic"), (Some("minced"), "garlic".to_string()));
/// assert_eq!(extract_preparation("sugar"), (None, "sugar".to_string()));
/// ```
pub fn extract_preparation(text: &str) -> (Option<&'static str>, String) {
    let text = text.trim();

    for &(prep, ref embedded) in EMBEDDED_PATTERNS.iter() {
        let verb_len = prep.len();

        if text.starts_with(prep) && text[verb_len..].starts_with(' ') {
            let residual = text[verb_len..].trim().to_string();
            debug!("Leading preparation '{}' in '{}'", prep, text);
            return (Some(prep), residual);
        }

        if text.len() > verb_len
            && text.ends_with(prep)
            && text[..text.len() - verb_len].ends_with(' ')
        {
            let residual = text[..text.len() - verb_len - 1]
                .trim()
                .trim_end_matches(',')
                .trim_end()
                .to_string();
            debug!("Trailing preparation '{}' in '{}'", prep, text);
            return (Some(prep), residual);
        }

        if let Some(found) = embedded.find(text) {
            let head = text[..found.start()].trim();
            // The delimiter after the verb stays with the tail
            let delimiter_len = found.as_str().chars().last().map_or(0, char::len_utf8);
            let tail = text[found.end() - delimiter_len..].trim();
            let residual = if tail.is_empty() {
                head.to_string()
            } else if tail.starts_with(',') {
                format!("{}{}", head, tail)
            } else {
                format!("{} {}", head, tail)
            };
            debug!("Embedded preparation '{}' in '{}'", prep, text);
            return (Some(prep), residual);
        }
    }

    (None, text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_preparation() {
        assert_eq!(
            extract_preparation("chopped onion"),
            (Some("chopped"), "onion".to_string())
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(
            extract_preparation("Minced garlic"),
            (None, "Minced garlic".to_string())
        );
        assert_eq!(
            extract_preparation("garlic, MINCED"),
            (None, "garlic, MINCED".to_string())
        );
        assert_eq!(
            extract_preparation("onion, Chopped, divided"),
            (None, "onion, Chopped, divided".to_string())
        );
    }

    #[test]
    fn test_trailing_preparation() {
        assert_eq!(
            extract_preparation("apples, diced"),
            (Some("diced"), "apples".to_string())
        );
        assert_eq!(
            extract_preparation("carrots peeled"),
            (Some("peeled"), "carrots".to_string())
        );
    }

    #[test]
    fn test_embedded_preparation() {
        assert_eq!(
            extract_preparation("apples, diced, peeled"),
            (Some("diced"), "apples, peeled".to_string())
        );
        assert_eq!(
            extract_preparation("onion, chopped and browned"),
            (Some("chopped"), "onion and browned".to_string())
        );
    }

    #[test]
    fn test_vocabulary_order_wins_over_position() {
        // "sliced" precedes "peeled" in the vocabulary even though "peeled" leads
        assert_eq!(
            extract_preparation("peeled apples, sliced"),
            (Some("sliced"), "peeled apples".to_string())
        );
    }

    #[test]
    fn test_verb_inside_food_name_is_stripped() {
        assert_eq!(
            extract_preparation("ground beef"),
            (Some("ground"), "beef".to_string())
        );
    }

    #[test]
    fn test_no_preparation() {
        assert_eq!(extract_preparation("sugar"), (None, "sugar".to_string()));
        assert_eq!(extract_preparation("diced"), (None, "diced".to_string()));
        assert_eq!(
            extract_preparation("cutlets"),
            (None, "cutlets".to_string())
        );
        assert_eq!(extract_preparation(""), (None, String::new()));
    }
}
