//! Error types for the download → flatten → write pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a pipeline run.
#[derive(Error, Debug)]
pub enum EtlError {
    /// The configured source URL does not parse.
    #[error("invalid source URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request failed or the server answered with a non-success status.
    #[error("fetching {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body is not valid JSON.
    #[error("parsing JSON from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON document does not have the period → region → type nesting.
    #[error("unexpected shape at '{path}': {reason}")]
    Shape { path: String, reason: String },

    /// The output table could not be written.
    #[error("writing {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl EtlError {
    pub(crate) fn shape(keys: &[String], reason: impl Into<String>) -> Self {
        EtlError::Shape {
            path: if keys.is_empty() {
                "<root>".to_string()
            } else {
                keys.join(" / ")
            },
            reason: reason.into(),
        }
    }
}
