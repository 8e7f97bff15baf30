//! Word-level capabilities used by the difficulty classifier and syllable counter.
//!
//! Each capability is a trait so callers can swap the bundled data for their
//! own lists or estimators. The bundled implementations are:
//!
//! - [`easy_words::DaleChallWords`] for [`EasyWords`]
//! - [`inflection::EnglishInflector`] for [`Singularize`]
//! - [`syllables::DictionarySyllables`] for [`SyllableOracle`]

use std::collections::HashSet;

pub mod easy_words;
pub mod inflection;
pub mod syllables;

/// Membership test against a set of familiar, lowercase base-form words.
pub trait EasyWords: Send + Sync {
    /// Returns `true` if `word` is considered easy.
    fn contains(&self, word: &str) -> bool;
}

/// Reduces a word to its singular base form.
pub trait Singularize: Send + Sync {
    /// Returns the singular form of `word`.
    fn to_singular(&self, word: &str) -> String;
}

/// Estimates syllables in lowercase, punctuation-free text.
pub trait SyllableOracle: Send + Sync {
    /// Total estimated syllables across every whitespace-separated word.
    fn estimate(&self, text: &str) -> usize;
}

impl EasyWords for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl EasyWords for HashSet<&'static str> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}
