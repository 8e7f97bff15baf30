//! Character, word, sentence and syllable counters, plus the per-word and
//! per-sentence averages the formulas are built from.
//!
//! Averages use [`crate::math::legacy_round`] and fall back to `0.0` when the ratio is
//! undefined (no words).

use crate::math::rounded_ratio;
use crate::readability::Readability;
use crate::text;

/// Sentences with this many lexicon words or fewer are not counted.
pub const DEGENERATE_SENTENCE_WORDS: usize = 2;

/// Number of characters, optionally excluding U+0020 spaces.
pub fn char_count(text: &str, ignore_spaces: bool) -> usize {
    if ignore_spaces {
        text.chars().filter(|&c| c != ' ').count()
    } else {
        text.chars().count()
    }
}

/// Number of characters once punctuation is removed, optionally excluding spaces.
pub fn letter_count(text: &str, ignore_spaces: bool) -> usize {
    text.chars()
        .filter(|&c| !(ignore_spaces && c == ' ') && !text::is_punctuation(c))
        .count()
}

/// The universal word count: tokens after optional punctuation removal.
pub fn lexicon_count(text: &str, remove_punctuation: bool) -> usize {
    if remove_punctuation {
        text::split(&text::remove_punctuation(text)).len()
    } else {
        text::split(text).len()
    }
}

/// Number of real sentences, never less than 1.
///
/// Sentences of [`DEGENERATE_SENTENCE_WORDS`] words or fewer are skipped.
pub fn sentence_count(text: &str) -> usize {
    text::split_sentences(text)
        .into_iter()
        .filter(|sentence| lexicon_count(sentence, true) > DEGENERATE_SENTENCE_WORDS)
        .count()
        .max(1)
}

/// Lexicon words per sentence, 1 dp.
pub fn average_sentence_length(text: &str) -> f64 {
    rounded_ratio(lexicon_count(text, true), sentence_count(text), 1)
}

/// Characters (spaces excluded) per lexicon word, 2 dp.
pub fn average_character_per_word(text: &str) -> f64 {
    rounded_ratio(char_count(text, true), lexicon_count(text, true), 2)
}

/// Letters (spaces and punctuation excluded) per lexicon word, 2 dp.
pub fn average_letter_per_word(text: &str) -> f64 {
    rounded_ratio(letter_count(text, true), lexicon_count(text, true), 2)
}

/// Sentences per lexicon word, 2 dp.
pub fn average_sentence_per_word(text: &str) -> f64 {
    rounded_ratio(sentence_count(text), lexicon_count(text, true), 2)
}

impl Readability {
    /// Syllables in `text` after locale lowercasing and punctuation removal.
    ///
    /// Empty input short-circuits to 0; anything else goes to the syllable
    /// oracle as a whole.
    pub fn syllable_count(&self, text: &str) -> usize {
        let cleaned = text::remove_punctuation(&text::lowercase(text, self.locale()));
        if cleaned.is_empty() {
            return 0;
        }
        self.syllable_oracle().estimate(&cleaned)
    }

    /// Syllables per lexicon word, 1 dp.
    pub fn average_syllable_per_word(&self, text: &str) -> f64 {
        rounded_ratio(self.syllable_count(text), lexicon_count(text, true), 1)
    }

    /// Lexicon words per sentence, 1 dp. Same as [`average_sentence_length`].
    pub fn average_sentence_length(&self, text: &str) -> f64 {
        average_sentence_length(text)
    }

    /// Characters per lexicon word, 2 dp.
    pub fn average_character_per_word(&self, text: &str) -> f64 {
        average_character_per_word(text)
    }

    /// Letters per lexicon word, 2 dp.
    pub fn average_letter_per_word(&self, text: &str) -> f64 {
        average_letter_per_word(text)
    }

    /// Sentences per lexicon word, 2 dp.
    pub fn average_sentence_per_word(&self, text: &str) -> f64 {
        average_sentence_per_word(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAT: &str = "The cat sat on the mat. The dog ran fast.";

    #[test]
    fn char_and_letter_counts() {
        assert_eq!(char_count("a b, c", true), 4);
        assert_eq!(char_count("a b, c", false), 6);
        assert_eq!(letter_count("a b, c", true), 3);
        assert_eq!(letter_count("a b, c", false), 5);
        assert_eq!(char_count("", true), 0);
        assert_eq!(char_count("naïve café", true), 9);
    }

    #[test]
    fn lexicon_count_of_simple_text() {
        assert_eq!(lexicon_count(CAT, true), 10);
        assert_eq!(lexicon_count("", true), 0);
        assert_eq!(lexicon_count("   ,,, \n", true), 0);
    }

    #[test]
    fn punctuation_only_tokens_vanish_from_lexicon() {
        assert_eq!(lexicon_count("wait - what", true), 2);
        assert_eq!(lexicon_count("wait - what", false), 3);
    }

    #[test]
    fn sentence_count_of_simple_text() {
        assert_eq!(sentence_count(CAT), 2);
    }

    #[test]
    fn sentence_count_skips_degenerate_sentences() {
        assert_eq!(sentence_count("Hi there. The dog ran fast. Go!"), 1);
        assert_eq!(
            sentence_count("Hi there. The dog ran fast. The cat sat still."),
            2
        );
    }

    #[test]
    fn sentence_count_is_at_least_one() {
        assert_eq!(sentence_count(""), 1);
        assert_eq!(sentence_count("Hi."), 1);
    }

    #[test]
    fn averages() {
        assert_eq!(average_sentence_length(CAT), 5.0);
        assert_eq!(average_sentence_per_word(CAT), 0.2);
        // 32 non-space characters, 30 letters, 10 words.
        assert_eq!(average_character_per_word(CAT), 3.2);
        assert_eq!(average_letter_per_word(CAT), 3.0);
    }

    #[test]
    fn averages_fall_back_to_zero_without_words() {
        assert_eq!(average_sentence_length(""), 0.0);
        assert_eq!(average_character_per_word("..."), 0.0);
        assert_eq!(average_letter_per_word(""), 0.0);
        assert_eq!(average_sentence_per_word(""), 0.0);
    }

    #[test]
    fn syllables_through_the_engine() {
        let engine = Readability::default();
        assert_eq!(engine.syllable_count(""), 0);
        assert_eq!(engine.syllable_count("!!!"), 0);
        assert_eq!(engine.syllable_count(CAT), 10);
        assert_eq!(engine.average_syllable_per_word(CAT), 1.0);
        assert_eq!(engine.average_syllable_per_word(""), 0.0);
    }
}
