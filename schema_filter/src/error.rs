//! Errors produced while loading filter configuration.
//!
//! Filtering itself never fails; only reading configuration from disk or from
//! figment providers can.

use std::path::PathBuf;

use figment::Error as FigmentError;
use thiserror::Error;

/// Errors that can occur while loading a filter configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FilterError {
    /// Error originating from a configuration file.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying error reported by the reader or parser.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The file extension does not map to a supported format.
    #[error("unsupported configuration format '{extension}' for '{path}'")]
    UnsupportedFormat {
        /// Path whose extension was rejected.
        path: PathBuf,
        /// The rejected extension, lowercased.
        extension: String,
    },

    /// Error while gathering configuration from figment providers.
    #[error("Failed to gather configuration: {0}")]
    Gathering(#[from] Box<FigmentError>),
}

impl From<FigmentError> for FilterError {
    fn from(err: FigmentError) -> Self {
        Self::Gathering(Box::new(err))
    }
}

/// Result alias for configuration loading.
pub type FilterResult<T> = Result<T, FilterError>;
