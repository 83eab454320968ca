//! Error types for the client crate

use quotefeed_core::QuoteError;
use thiserror::Error;

use crate::config::ConfigError;

/// Feed-level errors (decoding and reporting)
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Failed to read quotes: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode quotes: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid quote: {0}")]
    Quote(#[from] QuoteError),

    #[error("Malformed quote record: {0}")]
    Record(#[from] RecordError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// A single feed record that could not be decoded into a quote
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("record {index}: {reason}")]
pub struct RecordError {
    /// Position of the record in the feed payload
    pub index: usize,
    pub reason: String,
}

pub type Result<T> = std::result::Result<T, FeedError>;
