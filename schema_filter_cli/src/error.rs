//! Error types for `schema-filter`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the `schema-filter` pipeline.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] schema_filter::FilterError),

    #[error("failed to parse schema '{path}': {source}")]
    Schema {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("failed to install log subscriber: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}
