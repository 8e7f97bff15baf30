//! The readability engine and its full report.
//!
//! [`Readability`] owns the three word-level capabilities and the lowercasing
//! locale. Every counter, formula and consensus function is a method on it
//! (see [`crate::counts`], [`crate::difficulty`], [`crate::formulas`] and
//! [`crate::consensus`]); each call re-derives what it needs from the text.
//!
//! ```
//! use readscore_core::Readability;
//!
//! let engine = Readability::default();
//! let report = engine.report("The cat sat on the mat. The dog ran fast.", false, None);
//! assert_eq!(report.lexicon_count, 10);
//! assert!(!report.over_max);
//! ```

use std::fmt;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::{Config, Locale};
use crate::consensus::TieBreak;
use crate::counts;
use crate::dictionaries::easy_words::DaleChallWords;
use crate::dictionaries::inflection::EnglishInflector;
use crate::dictionaries::syllables::DictionarySyllables;
use crate::dictionaries::{EasyWords, Singularize, SyllableOracle};
use crate::difficulty::DEFAULT_SYLLABLE_THRESHOLD;
use crate::formulas::Formula;
use crate::markdown;

/// Readability engine.
///
/// Cheap to clone and safe to share across threads.
#[derive(Clone)]
pub struct Readability {
    easy_words: Arc<dyn EasyWords>,
    singularizer: Arc<dyn Singularize>,
    syllables: Arc<dyn SyllableOracle>,
    locale: Locale,
    tie_break: TieBreak,
}

impl Default for Readability {
    fn default() -> Self {
        Self {
            easy_words: Arc::new(DaleChallWords::new()),
            singularizer: Arc::new(EnglishInflector),
            syllables: Arc::new(DictionarySyllables),
            locale: Locale::default(),
            tie_break: TieBreak::default(),
        }
    }
}

impl fmt::Debug for Readability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Readability")
            .field("locale", &self.locale)
            .field("tie_break", &self.tie_break)
            .finish_non_exhaustive()
    }
}

impl Readability {
    /// Engine with the bundled capabilities, `en-US` and last-seen tie-break.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine configured from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Self {
        let engine = Self::default()
            .with_locale(config.locale)
            .with_tie_break(config.tie_break);
        if config.extra_easy_words.is_empty() {
            engine
        } else {
            engine.with_extra_easy_words(&config.extra_easy_words)
        }
    }

    /// Replace the easy-word set.
    pub fn with_easy_words(mut self, easy_words: Arc<dyn EasyWords>) -> Self {
        self.easy_words = easy_words;
        self
    }

    /// Use the bundled easy-word list plus `words`.
    pub fn with_extra_easy_words<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.with_easy_words(Arc::new(DaleChallWords::new().with_extra(words)))
    }

    /// Replace the singularizer.
    pub fn with_singularizer(mut self, singularizer: Arc<dyn Singularize>) -> Self {
        self.singularizer = singularizer;
        self
    }

    /// Replace the syllable oracle.
    pub fn with_syllable_oracle(mut self, syllables: Arc<dyn SyllableOracle>) -> Self {
        self.syllables = syllables;
        self
    }

    /// Set the lowercasing locale.
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the consensus tie-break rule.
    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Lowercasing locale.
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Consensus tie-break rule.
    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// The syllable oracle in use.
    pub fn syllable_oracle(&self) -> &dyn SyllableOracle {
        self.syllables.as_ref()
    }

    /// The singularizer in use.
    pub fn singularizer(&self) -> &dyn Singularize {
        self.singularizer.as_ref()
    }

    /// Whether `word` is in the easy-word set. Expects a lowercase base form.
    pub fn is_easy_word(&self, word: &str) -> bool {
        self.easy_words.contains(word)
    }

    /// Run every counter, formula and consensus function over `text`.
    ///
    /// With `strip_md`, markdown is reduced to prose first. `over_max` is set
    /// when the consensus median exceeds `max_grade`.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len(), strip_md))]
    pub fn report(&self, text: &str, strip_md: bool, max_grade: Option<f64>) -> ReadabilityReport {
        let prose = if strip_md {
            markdown::strip_to_prose(text)
        } else {
            text.to_string()
        };
        let text = prose.as_str();

        let scores = Formula::ALL
            .into_iter()
            .map(|formula| FormulaScore {
                formula,
                score: self.score(formula, text),
            })
            .collect();
        let consensus = self.consensus(text);
        let text_median = self.text_median(text);
        let over_max = max_grade.is_some_and(|max| text_median > max);
        tracing::debug!(text_median, over_max, "report complete");

        ReadabilityReport {
            char_count: counts::char_count(text, true),
            letter_count: counts::letter_count(text, true),
            lexicon_count: counts::lexicon_count(text, true),
            sentence_count: counts::sentence_count(text),
            syllable_count: self.syllable_count(text),
            poly_syllable_count: self.poly_syllable_count(text),
            difficult_words: self
                .difficult_word_list(text, DEFAULT_SYLLABLE_THRESHOLD)
                .into_iter()
                .map(str::to_string)
                .collect(),
            average_sentence_length: self.average_sentence_length(text),
            average_syllable_per_word: self.average_syllable_per_word(text),
            average_character_per_word: self.average_character_per_word(text),
            average_letter_per_word: self.average_letter_per_word(text),
            average_sentence_per_word: self.average_sentence_per_word(text),
            scores,
            text_standard: consensus.grade,
            text_standard_label: consensus.label(),
            text_median,
            max_grade,
            over_max,
        }
    }
}

/// One formula's score inside a [`ReadabilityReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FormulaScore {
    /// The formula.
    pub formula: Formula,
    /// Its score.
    pub score: f64,
}

/// Every counter, formula and consensus value for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Characters, spaces excluded.
    pub char_count: usize,
    /// Characters, spaces and punctuation excluded.
    pub letter_count: usize,
    /// Words after punctuation removal.
    pub lexicon_count: usize,
    /// Sentences with more than two words (at least 1).
    pub sentence_count: usize,
    /// Estimated syllables.
    pub syllable_count: usize,
    /// Words with three or more syllables.
    pub poly_syllable_count: usize,
    /// Distinct difficult words, in first-seen order.
    pub difficult_words: Vec<String>,
    /// Words per sentence.
    pub average_sentence_length: f64,
    /// Syllables per word.
    pub average_syllable_per_word: f64,
    /// Characters per word.
    pub average_character_per_word: f64,
    /// Letters per word.
    pub average_letter_per_word: f64,
    /// Sentences per word.
    pub average_sentence_per_word: f64,
    /// Every formula, in [`Formula::ALL`] order.
    pub scores: Vec<FormulaScore>,
    /// Consensus grade by vote.
    pub text_standard: f64,
    /// Consensus grade as a label, e.g. "7th and 8th grade".
    pub text_standard_label: String,
    /// Median of the consensus formulas.
    pub text_median: f64,
    /// Maximum acceptable grade (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<f64>,
    /// Whether the median exceeds the maximum.
    pub over_max: bool,
}

impl ReadabilityReport {
    /// Score for one formula.
    pub fn score(&self, formula: Formula) -> Option<f64> {
        self.scores
            .iter()
            .find(|entry| entry.formula == formula)
            .map(|entry| entry.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAT: &str = "The cat sat on the mat. The dog ran fast.";

    #[test]
    fn basic_report() {
        let report = Readability::default().report(CAT, false, None);
        assert_eq!(report.lexicon_count, 10);
        assert_eq!(report.sentence_count, 2);
        assert_eq!(report.syllable_count, 10);
        assert!(report.difficult_words.is_empty());
        assert_eq!(report.scores.len(), Formula::ALL.len());
        assert_eq!(report.score(Formula::FleschKincaidGrade), Some(-1.9));
        assert_eq!(report.text_standard, 2.0);
        assert_eq!(report.text_standard_label, "1st and 2nd grade");
        assert!(!report.over_max);
    }

    #[test]
    fn over_max_grade() {
        let text = "The implementation of the comprehensive organizational restructuring \
                    initiative necessitated the establishment of interdepartmental \
                    communication protocols that facilitated the dissemination of \
                    procedural documentation.";
        let report = Readability::default().report(text, false, Some(5.0));
        assert!(report.over_max);
        assert_eq!(report.max_grade, Some(5.0));
        assert!(!report.difficult_words.is_empty());
    }

    #[test]
    fn empty_input_reports_zeros() {
        let report = Readability::default().report("", false, Some(1.0));
        assert_eq!(report.lexicon_count, 0);
        assert_eq!(report.sentence_count, 1);
        assert!(report.scores.iter().all(|entry| entry.score == 0.0));
        assert_eq!(report.text_median, 0.0);
        assert!(!report.over_max);
    }

    #[test]
    fn markdown_stripping() {
        let md = "# Title\n\nThe cat sat on the mat. The dog ran fast.\n\n```rust\nlet x = 1;\n```";
        let report = Readability::default().report(md, true, None);
        assert_eq!(report.lexicon_count, 10);
    }

    #[test]
    fn report_serializes_formula_names() {
        let report = Readability::default().report(CAT, false, None);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["scores"][0]["formula"], "flesch-reading-ease");
        assert!(json.get("max_grade").is_none());
    }

    #[test]
    fn from_config_applies_settings() {
        let config = Config {
            locale: Locale::Tr,
            tie_break: TieBreak::FirstSeen,
            extra_easy_words: vec!["paradigm".into()],
            ..Config::default()
        };
        let engine = Readability::from_config(&config);
        assert_eq!(engine.locale(), Locale::Tr);
        assert_eq!(engine.tie_break(), TieBreak::FirstSeen);
        assert!(engine.is_easy_word("paradigm"));
        assert!(engine.is_easy_word("cat"));
    }

    #[test]
    fn engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Readability>();

        let engine = Readability::default();
        let handle = {
            let engine = engine.clone();
            std::thread::spawn(move || engine.lix(CAT))
        };
        assert_eq!(handle.join().unwrap(), engine.lix(CAT));
    }

    #[test]
    fn debug_omits_capabilities() {
        let debug = format!("{:?}", Readability::default());
        assert!(debug.contains("EnUs"));
        assert!(debug.contains("LastSeen"));
    }
}
