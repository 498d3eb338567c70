//! Error types for Empath.

use thiserror::Error;

/// Errors raised while loading lexicon resources.
///
/// All variants are fatal: a store that failed to load must not be retried
/// without fixing the underlying resource. Once a lexicon has loaded,
/// analysis itself can never fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LexiconError {
    /// A resource was missing or unreadable.
    #[error("failed to read lexicon resource '{resource}'")]
    Io {
        /// The resource that could not be read.
        resource: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A lexicon line did not have a word plus seven weight fields.
    #[error("{resource}:{line}: expected a word and seven weights, found {found} fields")]
    FieldCount {
        /// The resource containing the malformed line.
        resource: String,
        /// One-based line number.
        line: usize,
        /// Number of whitespace-delimited fields actually present.
        found: usize,
    },

    /// A weight field failed to parse as a decimal number.
    #[error("{resource}:{line}: invalid weight '{value}'")]
    InvalidWeight {
        /// The resource containing the malformed line.
        resource: String,
        /// One-based line number.
        line: usize,
        /// The offending field text.
        value: String,
        /// The underlying parse error.
        #[source]
        source: std::num::ParseFloatError,
    },

    /// A required word list was absent from the configuration resource.
    #[error("word list '{key}' missing from '{resource}'")]
    MissingWordList {
        /// The configuration resource.
        resource: String,
        /// The missing key.
        key: String,
    },
}
