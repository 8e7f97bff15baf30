//! Core library for readscore.
//!
//! Counts characters, words, sentences and syllables in English text, runs a
//! dozen readability formulas over those counts, and combines them into a
//! consensus grade.
//!
//! # Modules
//!
//! - [`text`] - Punctuation removal, tokenization and sentence splitting
//! - [`counts`] - Counters and per-word/per-sentence averages
//! - [`difficulty`] - Difficult-word detection
//! - [`formulas`] - Readability formulas and the [`Formula`] enum
//! - [`consensus`] - Vote and median consensus grades
//! - [`readability`] - The [`Readability`] engine and its report
//! - [`dictionaries`] - Easy words, singularizer and syllable oracle
//! - [`markdown`] - Markdown to prose
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use readscore_core::{Formula, Readability};
//!
//! let engine = Readability::default();
//! let text = "The cat sat on the mat. The dog ran fast.";
//!
//! assert_eq!(engine.flesch_kincaid_grade(text), -1.9);
//! assert_eq!(engine.score(Formula::Lix, text), 5.0);
//! println!("{}", engine.text_standard(text, false));
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod consensus;
pub mod counts;
pub mod dictionaries;
pub mod difficulty;
pub mod error;
pub mod formulas;
pub mod markdown;
pub mod math;
pub mod readability;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, Locale, LogLevel};
pub use consensus::{Consensus, GradeTally, TextStandard, TieBreak};
pub use dictionaries::{EasyWords, Singularize, SyllableOracle};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use formulas::Formula;
pub use readability::{FormulaScore, Readability, ReadabilityReport};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
