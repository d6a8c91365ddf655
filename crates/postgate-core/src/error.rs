//! Error types for postgate-core.

use thiserror::Error;

use crate::channel::Channel;

/// Errors that can occur when loading or compiling configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A configured vocabulary pattern is not a valid regular expression.
    #[error("invalid pattern in vocabulary list `{list}`: {pattern}")]
    InvalidPattern {
        /// Name of the vocabulary list holding the pattern.
        list: &'static str,
        /// The offending pattern text.
        pattern: String,
        /// Underlying compile error.
        #[source]
        source: Box<regex::Error>,
    },

    /// A substring list could not be turned into a matcher.
    #[error("invalid phrase list `{list}`: {source}")]
    InvalidPhrases {
        /// Name of the vocabulary list.
        list: &'static str,
        /// Underlying builder error.
        #[source]
        source: aho_corasick::BuildError,
    },

    /// Length thresholds for a channel are inconsistent.
    #[error("invalid thresholds for {channel}: min {min} / max {max}")]
    InvalidThresholds {
        /// Channel the thresholds belong to.
        channel: Channel,
        /// Configured minimum length.
        min: usize,
        /// Configured maximum length.
        max: usize,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;
