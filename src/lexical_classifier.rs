//! # Lexical Classifier
//!
//! The section splitter's fallback heuristic needs to know whether a word
//! looks like a noun. That capability sits behind the [`LexicalClassifier`]
//! trait so a rule-based tagger, a dictionary, or an embedded model can be
//! swapped in without touching the splitter.

use std::collections::HashSet;

/// Decides whether a single word token is noun-like
pub trait LexicalClassifier {
    /// Return `true` if the token reads as a noun
    fn is_noun_like(&self, token: &str) -> bool;
}

impl<F> LexicalClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_noun_like(&self, token: &str) -> bool {
        self(token)
    }
}

/// Function words that are never nouns
const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "nor", "of", "to", "in", "on", "at", "by", "for",
    "with", "from", "into", "onto", "over", "under", "until", "till", "about", "as", "than",
    "then", "so", "if", "it", "its", "it's", "is", "are", "be", "been", "was", "were", "this",
    "that", "these", "those", "you", "your", "we", "our", "i", "me", "my", "they", "them",
    "their", "he", "she", "his", "her", "all", "each", "every", "some", "any", "more", "most",
    "less", "few", "very", "too", "not", "no", "up", "down", "out", "off", "again", "once",
    "also", "just", "only", "well", "while", "when", "per", "plus",
];

/// Verbs and adjectives common in recipe prose
const NON_NOUNS: &[&str] = &[
    "add", "bake", "beat", "blend", "boil", "bring", "combine", "cook", "cool", "cover",
    "drain", "fold", "fry", "heat", "knead", "let", "mix", "place", "pour", "preheat", "put",
    "reduce", "remove", "rest", "roast", "serve", "set", "simmer", "sprinkle", "stir", "store",
    "take", "toss", "transfer", "turn", "wait", "whisk", "use", "make", "keep", "allow", "season",
    "spread", "top", "grease", "line", "repeat", "check", "enjoy", "large", "small", "medium",
    "big", "hot", "cold", "warm", "fresh", "good", "nice", "low", "high", "golden", "brown",
    "soft", "smooth", "thick", "thin",
];

/// Suffixes marking adverbs and participles
const NON_NOUN_SUFFIXES: &[&str] = &["ly", "ing", "ed"];

/// Default rule-based classifier
///
/// A word is noun-like when it is alphabetic, at least two characters long,
/// not a function word or common recipe verb/adjective, and does not end in an
/// adverb or participle suffix. Words in the noun allow-list always pass, which
/// keeps food words such as "seed" or "pudding" from being rejected by suffix.
#[derive(Debug, Clone)]
pub struct RuleBasedClassifier {
    stop_words: HashSet<&'static str>,
    nouns: HashSet<String>,
}

/// Food nouns that would otherwise trip the suffix rules
const KNOWN_NOUNS: &[&str] = &[
    "seed", "seeds", "pudding", "stuffing", "icing", "frosting", "dressing", "filling", "topping",
    "bed", "shortening", "ring", "rings", "string", "bread", "ginger", "red",
];

impl RuleBasedClassifier {
    /// Create the default classifier
    pub fn new() -> Self {
        Self {
            stop_words: FUNCTION_WORDS.iter().chain(NON_NOUNS).copied().collect(),
            nouns: KNOWN_NOUNS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Extend the noun allow-list
    pub fn with_nouns<I, S>(mut self, nouns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.nouns
            .extend(nouns.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }
}

impl Default for RuleBasedClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalClassifier for RuleBasedClassifier {
    fn is_noun_like(&self, token: &str) -> bool {
        let word = token.trim().to_lowercase();
        if self.nouns.contains(&word) {
            return true;
        }
        if word.chars().count() < 2
            || !word
                .chars()
                .all(|c| c.is_alphabetic() || c == '-' || c == '\'')
        {
            return false;
        }
        if self.stop_words.contains(word.as_str()) {
            return false;
        }
        !NON_NOUN_SUFFIXES
            .iter()
            .any(|suffix| word.ends_with(suffix) && word.len() > suffix.len() + 2)
    }
}

/// Classifier backed by a fixed word list
#[derive(Debug, Clone, Default)]
pub struct DictionaryClassifier {
    words: HashSet<String>,
}

impl DictionaryClassifier {
    /// Build a classifier that accepts exactly the given words (case-insensitive)
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .collect(),
        }
    }
}

impl LexicalClassifier for DictionaryClassifier {
    fn is_noun_like(&self, token: &str) -> bool {
        self.words.contains(&token.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_based_accepts_food_nouns() {
        let classifier = RuleBasedClassifier::new();
        for word in ["flour", "Sugar", "apples", "butter", "seed", "pudding", "all-purpose"] {
            assert!(classifier.is_noun_like(word), "{} should be noun-like", word);
        }
    }

    #[test]
    fn test_rule_based_rejects_function_words_and_verbs() {
        let classifier = RuleBasedClassifier::new();
        for word in ["the", "and", "Mix", "stir", "quickly", "boiling", "chopped", "x", "350F"] {
            assert!(!classifier.is_noun_like(word), "{} should not be noun-like", word);
        }
    }

    #[test]
    fn test_rule_based_allow_list_extension() {
        let classifier = RuleBasedClassifier::new().with_nouns(["Dumpling"]);
        assert!(classifier.is_noun_like("dumpling"));
    }

    #[test]
    fn test_dictionary_classifier() {
        let classifier = DictionaryClassifier::new(["Flour", "egg"]);
        assert!(classifier.is_noun_like("flour"));
        assert!(classifier.is_noun_like("EGG"));
        assert!(!classifier.is_noun_like("sugar"));
    }

    #[test]
    fn test_closure_classifier() {
        let never = |_: &str| false;
        assert!(!never.is_noun_like("flour"));
    }
}
