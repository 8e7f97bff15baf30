//! Error types for readscore-core.
//!
//! Scoring itself never fails: undefined ratios fall back to `0.0`. These
//! errors cover configuration and by-name formula lookup.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when selecting what to compute.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// An unknown formula name was provided.
    #[error("unknown formula: {name}. Use: {available}")]
    UnknownFormula {
        /// The formula name that was requested.
        name: String,
        /// Comma-separated list of available formula names.
        available: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
