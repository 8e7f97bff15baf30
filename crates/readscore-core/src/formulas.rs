//! Readability formulas.
//!
//! Each formula is a pure function of the counters, rounded with
//! [`round_finite`] at its published precision. Text without words scores
//! `0.0` on every formula.
//!
//! | Formula | Definition |
//! |---|---|
//! | Flesch reading ease | `206.835 - 1.015*ASL - 84.6*ASW` |
//! | Flesch-Kincaid grade | `0.39*ASL + 11.8*ASW - 15.59` |
//! | SMOG | `1.043*sqrt(30*poly/sentences) + 3.1291`, 3+ sentences only |
//! | Coleman-Liau | `0.058*L - 0.296*S - 15.8` |
//! | ARI | `4.71*chars/words + 0.5*words/sentences - 21.43` |
//! | Dale-Chall | `0.1579*pct_difficult + 0.0496*ASL (+3.6365)` |
//! | Linsear Write | weighted first 100 words per sentence |
//! | Gunning Fog | `0.4*(ASL + pct_difficult_3)` |
//! | LIX | `ASL + pct_long_words` |
//! | RIX | `long_words/sentences` |

// Fused multiply-add changes results on rounding ties.
#![allow(clippy::suboptimal_flops)]

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::counts::{char_count, lexicon_count, sentence_count};
use crate::difficulty::{DEFAULT_SYLLABLE_THRESHOLD, POLYSYLLABLE};
use crate::error::AnalysisError;
use crate::math::{round_finite, rounded_ratio};
use crate::readability::Readability;
use crate::text;

/// Linsear Write only looks at this many leading words.
const LINSEAR_SAMPLE_WORDS: usize = 100;

/// Words longer than this many characters are "long" for LIX and RIX.
const LONG_WORD_CHARS: usize = 6;

/// Map a Flesch reading-ease score to a school grade.
pub const fn flesch_reading_ease_to_grade(score: f64) -> f64 {
    if score < 100.0 && score >= 90.0 {
        5.0
    } else if score < 90.0 && score >= 80.0 {
        6.0
    } else if score < 80.0 && score >= 70.0 {
        7.0
    } else if score < 70.0 && score >= 60.0 {
        8.5
    } else if score < 60.0 && score >= 50.0 {
        11.0
    } else if score < 50.0 && score >= 40.0 {
        13.0
    } else if score < 40.0 && score >= 30.0 {
        15.0
    } else {
        16.0
    }
}

/// Map a Dale-Chall score to a school grade.
pub const fn dale_chall_to_grade(score: f64) -> f64 {
    if score <= 4.9 {
        4.0
    } else if score < 5.9 {
        5.0
    } else if score < 6.9 {
        7.0
    } else if score < 7.9 {
        9.0
    } else if score < 8.9 {
        11.0
    } else if score < 9.9 {
        13.0
    } else {
        16.0
    }
}

fn has_words(text: &str) -> bool {
    lexicon_count(text, true) > 0
}

fn long_word_count(words: &[&str]) -> usize {
    words
        .iter()
        .filter(|word| word.chars().count() > LONG_WORD_CHARS)
        .count()
}

impl Readability {
    /// Flesch reading ease, 2 dp. Higher is easier.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn flesch_reading_ease(&self, text: &str) -> f64 {
        if !has_words(text) {
            return 0.0;
        }
        let asl = self.average_sentence_length(text);
        let asw = self.average_syllable_per_word(text);
        round_finite(206.835 - 1.015 * asl - 84.6 * asw, 2)
    }

    /// Flesch-Kincaid grade level, 1 dp.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn flesch_kincaid_grade(&self, text: &str) -> f64 {
        if !has_words(text) {
            return 0.0;
        }
        let asl = self.average_sentence_length(text);
        let asw = self.average_syllable_per_word(text);
        round_finite(0.39 * asl + 11.8 * asw - 15.59, 1)
    }

    /// SMOG index, 1 dp. Zero for fewer than three sentences.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn smog_index(&self, text: &str) -> f64 {
        let sentences = sentence_count(text);
        if sentences < 3 {
            return 0.0;
        }
        let poly = self.poly_syllable_count(text) as f64;
        round_finite(1.043 * (30.0 * (poly / sentences as f64)).sqrt() + 3.1291, 1)
    }

    /// Coleman-Liau index, 2 dp.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn coleman_liau_index(&self, text: &str) -> f64 {
        if !has_words(text) {
            return 0.0;
        }
        let letters = round_finite(self.average_letter_per_word(text) * 100.0, 2);
        let sentences = round_finite(self.average_sentence_per_word(text) * 100.0, 2);
        round_finite(0.058 * letters - 0.296 * sentences - 15.8, 2)
    }

    /// Automated readability index, 1 dp.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn automated_readability_index(&self, text: &str) -> f64 {
        let words = lexicon_count(text, true);
        if words == 0 {
            return 0.0;
        }
        let chars_per_word = rounded_ratio(char_count(text, true), words, 2);
        let words_per_sentence = rounded_ratio(words, sentence_count(text), 2);
        round_finite(4.71 * chars_per_word + 0.5 * words_per_sentence - 21.43, 1)
    }

    /// Linsear Write over the first hundred words, 1 dp.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn linsear_write_formula(&self, text: &str) -> f64 {
        if !has_words(text) {
            return 0.0;
        }
        let sample: Vec<&str> = text::split(text)
            .into_iter()
            .take(LINSEAR_SAMPLE_WORDS)
            .collect();
        let (easy, hard) = sample.iter().fold((0usize, 0usize), |(easy, hard), word| {
            if self.syllable_count(word) < POLYSYLLABLE {
                (easy + 1, hard)
            } else {
                (easy, hard + 1)
            }
        });
        let weight = (easy + 3 * hard) as f64;
        let raw = weight / sentence_count(&sample.join(" ")) as f64;
        let value = if raw <= 20.0 { (raw - 2.0) / 2.0 } else { raw / 2.0 };
        round_finite(value, 1)
    }

    /// Dale-Chall readability score, 2 dp.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn dale_chall_readability_score(&self, text: &str) -> f64 {
        let words = lexicon_count(text, true);
        if words == 0 {
            return 0.0;
        }
        let difficult = self.difficult_words(text, DEFAULT_SYLLABLE_THRESHOLD) as f64;
        let pct_easy = (words as f64 - difficult) / words as f64 * 100.0;
        let pct_difficult = 100.0 - pct_easy;
        let mut score = 0.1579 * pct_difficult + 0.0496 * self.average_sentence_length(text);
        if pct_difficult > 5.0 {
            score += 3.6365;
        }
        round_finite(score, 2)
    }

    /// Gunning Fog index, 2 dp. Difficult words need three syllables here.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn gunning_fog(&self, text: &str) -> f64 {
        let words = lexicon_count(text, true);
        if words == 0 {
            return 0.0;
        }
        let pct_difficult = self.difficult_words(text, POLYSYLLABLE) as f64 / words as f64 * 100.0;
        round_finite(0.4 * (self.average_sentence_length(text) + pct_difficult), 2)
    }

    /// LIX: sentence length plus the percentage of long words, 2 dp.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn lix(&self, text: &str) -> f64 {
        let words = text::split(text);
        if words.is_empty() || !has_words(text) {
            return 0.0;
        }
        let pct_long = long_word_count(&words) as f64 * 100.0 / words.len() as f64;
        round_finite(self.average_sentence_length(text) + pct_long, 2)
    }

    /// RIX: long words per sentence, 2 dp.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn rix(&self, text: &str) -> f64 {
        if !has_words(text) {
            return 0.0;
        }
        rounded_ratio(long_word_count(&text::split(text)), sentence_count(text), 2)
    }

    /// Run one formula by name.
    ///
    /// Text without words scores `0.0` here too, including the two grade
    /// mappings, whose bucket tables would otherwise give 16 and 4.
    pub fn score(&self, formula: Formula, text: &str) -> f64 {
        match formula {
            Formula::FleschReadingEase => self.flesch_reading_ease(text),
            Formula::FleschReadingEaseGrade => {
                if has_words(text) {
                    flesch_reading_ease_to_grade(self.flesch_reading_ease(text))
                } else {
                    0.0
                }
            }
            Formula::FleschKincaidGrade => self.flesch_kincaid_grade(text),
            Formula::SmogIndex => self.smog_index(text),
            Formula::ColemanLiauIndex => self.coleman_liau_index(text),
            Formula::AutomatedReadabilityIndex => self.automated_readability_index(text),
            Formula::DaleChallReadabilityScore => self.dale_chall_readability_score(text),
            Formula::DaleChallGrade => {
                if has_words(text) {
                    dale_chall_to_grade(self.dale_chall_readability_score(text))
                } else {
                    0.0
                }
            }
            Formula::LinsearWriteFormula => self.linsear_write_formula(text),
            Formula::GunningFog => self.gunning_fog(text),
            Formula::Lix => self.lix(text),
            Formula::Rix => self.rix(text),
        }
    }
}

/// A named readability formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Formula {
    /// Flesch reading ease (0-100+, higher is easier).
    FleschReadingEase,
    /// Flesch reading ease mapped to a school grade.
    FleschReadingEaseGrade,
    /// Flesch-Kincaid grade level.
    FleschKincaidGrade,
    /// SMOG index.
    SmogIndex,
    /// Coleman-Liau index.
    ColemanLiauIndex,
    /// Automated readability index.
    AutomatedReadabilityIndex,
    /// Dale-Chall readability score.
    DaleChallReadabilityScore,
    /// Dale-Chall score mapped to a school grade.
    DaleChallGrade,
    /// Linsear Write formula.
    LinsearWriteFormula,
    /// Gunning Fog index.
    GunningFog,
    /// LIX (Läsbarhetsindex).
    Lix,
    /// RIX.
    Rix,
}

impl Formula {
    /// Every formula, in report order.
    pub const ALL: [Self; 12] = [
        Self::FleschReadingEase,
        Self::FleschReadingEaseGrade,
        Self::FleschKincaidGrade,
        Self::SmogIndex,
        Self::ColemanLiauIndex,
        Self::AutomatedReadabilityIndex,
        Self::DaleChallReadabilityScore,
        Self::DaleChallGrade,
        Self::LinsearWriteFormula,
        Self::GunningFog,
        Self::Lix,
        Self::Rix,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::FleschReadingEase => "flesch-reading-ease",
            Self::FleschReadingEaseGrade => "flesch-reading-ease-grade",
            Self::FleschKincaidGrade => "flesch-kincaid-grade",
            Self::SmogIndex => "smog-index",
            Self::ColemanLiauIndex => "coleman-liau-index",
            Self::AutomatedReadabilityIndex => "automated-readability-index",
            Self::DaleChallReadabilityScore => "dale-chall-readability-score",
            Self::DaleChallGrade => "dale-chall-grade",
            Self::LinsearWriteFormula => "linsear-write-formula",
            Self::GunningFog => "gunning-fog",
            Self::Lix => "lix",
            Self::Rix => "rix",
        }
    }

    /// One-line description for listings.
    pub const fn description(self) -> &'static str {
        match self {
            Self::FleschReadingEase => "Flesch reading ease; higher scores read more easily",
            Self::FleschReadingEaseGrade => "Flesch reading ease as a school grade",
            Self::FleschKincaidGrade => "Flesch-Kincaid grade level",
            Self::SmogIndex => "SMOG grade from polysyllables (needs 3+ sentences)",
            Self::ColemanLiauIndex => "Coleman-Liau index from letters and sentences per word",
            Self::AutomatedReadabilityIndex => "Automated readability index from characters per word",
            Self::DaleChallReadabilityScore => "Dale-Chall score from unfamiliar words",
            Self::DaleChallGrade => "Dale-Chall score as a school grade",
            Self::LinsearWriteFormula => "Linsear Write over the first 100 words",
            Self::GunningFog => "Gunning Fog index from complex words",
            Self::Lix => "LIX: sentence length plus percentage of long words",
            Self::Rix => "RIX: long words per sentence",
        }
    }

    /// Comma-separated list of every formula name.
    pub fn available() -> String {
        Self::ALL.map(Self::name).join(", ")
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Formula {
    type Err = AnalysisError;

    /// Case-insensitive; underscores and hyphens are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|formula| formula.name() == wanted)
            .ok_or_else(|| AnalysisError::UnknownFormula {
                name: s.to_string(),
                available: Self::available(),
            })
    }
}
