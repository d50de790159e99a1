//! Error types for catalog loading and message dispatch.

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use strsim::levenshtein;
use thiserror::Error;

/// Error type returned by message sinks.
pub type SinkError = Box<dyn StdError + Send + Sync>;

/// Invalid catalog construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Catalogs must be tagged with a non-empty language id.
    #[error("language id must not be empty")]
    EmptyId,
}

/// Errors that occur while loading or saving catalogs and receiver data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a file or directory.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File I/O error when writing a file or creating a directory.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed file contents, with the location reported by the format parser.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// A language file whose top level is not a key/value mapping.
    #[error("'{path}' does not contain a key/value mapping")]
    NotAMapping { path: PathBuf },

    /// The language directory does not exist and no bundled defaults create it.
    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    /// A receiver id in a data file that does not parse as the receiver type.
    #[error("invalid receiver '{key}' in '{path}': {message}")]
    InvalidReceiver {
        path: PathBuf,
        key: String,
        message: String,
    },

    /// A loaded catalog failed validation.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors raised while handing a rendered message to a sink.
///
/// The sink's own error is kept as the source; nothing is retried.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The sink rejected the message rendered from `key`.
    #[error("failed to deliver '{key}': {source}")]
    Rejected {
        key: String,
        #[source]
        source: SinkError,
    },

    /// The sink rejected an already translated message.
    #[error("failed to deliver translated message: {source}")]
    RejectedTranslated {
        #[source]
        source: SinkError,
    },
}

/// Issues found when comparing a translation against the default language.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadWarning {
    /// A key defined in the translation but not in the default language.
    #[error("'{key}' in '{language}' is not defined in '{source_language}'")]
    UnknownKey {
        key: String,
        language: String,
        source_language: String,
    },

    /// A key whose highest placeholder position differs from the default language.
    #[error(
        "'{key}' in '{language}' uses {translation_arity} arguments, '{source_language}' uses {source_arity}"
    )]
    ArityMismatch {
        key: String,
        language: String,
        source_language: String,
        source_arity: usize,
        translation_arity: usize,
    },
}

/// Compute "did you mean" suggestions for a missing message key.
///
/// - Uses Levenshtein distance
/// - Max distance: 1 for keys up to 3 characters, 2 for longer keys
/// - Limit to 3 suggestions, sorted by distance then name
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &String)> = available
        .iter()
        .filter_map(|candidate| {
            let distance = levenshtein(key, candidate);
            if distance <= max_distance && distance > 0 {
                Some((distance, candidate))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort();
    suggestions.dedup();
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
