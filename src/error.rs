// src/error.rs
use thiserror::Error;

/// Failures that stop a lookup. Extraction failures are expected outcomes
/// (wrong case number, portal returned a blank form) and callers usually
/// report them instead of bailing out.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Case details not found or invalid input.")]
    TableNotFound,

    #[error("{0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
