//! Difficult-word detection for Dale-Chall and Gunning Fog.
//!
//! A token is difficult when its base form is not an easy word and the raw
//! token has at least `syllable_threshold` syllables. The base form is the
//! lowercased token, singularized, then passed through [`Readability::present_tense`].

use std::collections::HashSet;

use crate::readability::Readability;
use crate::text;

/// Default syllable threshold for Dale-Chall difficult words.
pub const DEFAULT_SYLLABLE_THRESHOLD: usize = 2;

/// Syllables at which a token counts as polysyllabic.
pub const POLYSYLLABLE: usize = 3;

/// Shortest word the tense heuristic touches.
const MIN_TENSE_WORD_LEN: usize = 6;

impl Readability {
    /// Reduce a long `-ed`/`-ing` form to its present-tense stem.
    ///
    /// Only words of at least six characters are touched. `-ed` words whose
    /// `-e` stem is easy keep the `e` ("closed" becomes "close"); others drop
    /// `-ed`. `-ing` words become the `-e` stem if that is easy ("dancing"
    /// becomes "dance"), else lose `-ing`.
    pub fn present_tense(&self, word: &str) -> String {
        if word.chars().count() < MIN_TENSE_WORD_LEN {
            return word.to_string();
        }
        if let Some(stem) = word.strip_suffix("ed") {
            let with_e = &word[..word.len() - 1];
            return if self.is_easy_word(with_e) {
                with_e.to_string()
            } else {
                stem.to_string()
            };
        }
        if let Some(stem) = word.strip_suffix("ing") {
            let with_e = format!("{stem}e");
            return if self.is_easy_word(&with_e) {
                with_e
            } else {
                stem.to_string()
            };
        }
        word.to_string()
    }

    /// Lowercase, singularize and de-inflect a token for easy-word lookup.
    pub fn base_form(&self, token: &str) -> String {
        let lower = text::lowercase(token, self.locale());
        self.present_tense(&self.singularizer().to_singular(&lower))
    }

    /// Distinct difficult tokens, by surface form, in first-seen order.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn difficult_word_list<'t>(&self, text: &'t str, syllable_threshold: usize) -> Vec<&'t str> {
        let mut seen = HashSet::new();
        let mut difficult = Vec::new();
        for token in text::word_tokens(text) {
            if seen.contains(token) {
                continue;
            }
            let base = self.base_form(token);
            if !self.is_easy_word(&base) && self.syllable_count(token) >= syllable_threshold {
                seen.insert(token);
                difficult.push(token);
            }
        }
        tracing::trace!(count = difficult.len(), "difficult words");
        difficult
    }

    /// Number of distinct difficult tokens. Zero when the text has no words.
    pub fn difficult_words(&self, text: &str, syllable_threshold: usize) -> usize {
        self.difficult_word_list(text, syllable_threshold).len()
    }

    /// Number of [`text::split`] tokens with three or more syllables.
    pub fn poly_syllable_count(&self, text: &str) -> usize {
        text::split(text)
            .into_iter()
            .filter(|word| self.syllable_count(word) >= POLYSYLLABLE)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_tense_leaves_short_words() {
        let engine = Readability::default();
        assert_eq!(engine.present_tense("liked"), "liked");
        assert_eq!(engine.present_tense("sing"), "sing");
        assert_eq!(engine.present_tense("happen"), "happen");
    }

    #[test]
    fn present_tense_ed() {
        let engine = Readability::default();
        assert_eq!(engine.present_tense("closed"), "close");
        assert_eq!(engine.present_tense("walked"), "walk");
        assert_eq!(engine.present_tense("needed"), "need");
    }

    #[test]
    fn present_tense_ing() {
        let engine = Readability::default();
        assert_eq!(engine.present_tense("dancing"), "dance");
        assert_eq!(engine.present_tense("jumping"), "jump");
    }

    #[test]
    fn base_form_handles_inflection() {
        let engine = Readability::default();
        assert_eq!(engine.base_form("Puppies"), "puppy");
        assert_eq!(engine.base_form("children"), "child");
        assert_eq!(engine.base_form("played"), "play");
    }

    #[test]
    fn easy_text_has_no_difficult_words() {
        let engine = Readability::default();
        assert_eq!(
            engine.difficult_words("The children played happily with puppies.", 2),
            0
        );
        assert_eq!(engine.difficult_words("", 2), 0);
        assert_eq!(engine.difficult_words("?!", 2), 0);
    }

    #[test]
    fn difficult_words_are_listed_once_by_surface_form() {
        let engine = Readability::default();
        let text = "The implementation was ubiquitous. Paradigm paradigm Paradigm.";
        assert_eq!(
            engine.difficult_word_list(text, 2),
            vec!["implementation", "ubiquitous", "Paradigm", "paradigm"]
        );
        assert_eq!(engine.difficult_words(text, 2), 4);
    }

    #[test]
    fn threshold_filters_short_difficult_words() {
        let engine = Readability::default();
        assert_eq!(engine.difficult_words("A problem.", 2), 1);
        assert_eq!(engine.difficult_words("A problem.", 3), 0);
        assert_eq!(engine.difficult_word_list("Two problems.", 2), vec!["problems"]);
    }

    #[test]
    fn extra_easy_words_are_not_difficult() {
        let engine = Readability::default().with_extra_easy_words(["paradigm"]);
        assert_eq!(engine.difficult_words("A paradigm.", 2), 0);
    }

    #[test]
    fn poly_syllables() {
        let engine = Readability::default();
        assert_eq!(engine.poly_syllable_count("beautiful elephant cat"), 2);
        assert_eq!(engine.poly_syllable_count(""), 0);
    }

    /// Counts ASCII vowels, so a dotless `ı` adds nothing.
    struct AsciiVowels;

    impl crate::dictionaries::SyllableOracle for AsciiVowels {
        fn estimate(&self, text: &str) -> usize {
            text.chars().filter(|c| "aeiou".contains(*c)).count()
        }
    }

    #[test]
    fn turkish_locale_reaches_syllables_and_base_forms() {
        let english =
            Readability::default().with_syllable_oracle(std::sync::Arc::new(AsciiVowels));
        let turkish = english.clone().with_locale(crate::Locale::Tr);

        assert_eq!(english.syllable_count("IRIS"), 2);
        assert_eq!(turkish.syllable_count("IRIS"), 0);

        assert_eq!(english.base_form("KIT"), "kit");
        assert_eq!(turkish.base_form("KIT"), "k\u{131}t");
        assert_eq!(turkish.base_form("\u{130}NK"), "ink");
    }
}
