//! Quotefeed Client
//!
//! Offline client for the stock quote feed: decodes quote records from
//! JSON, extracts data points and reports the ratio between two stocks.

pub mod config;
pub mod error;
pub mod feed;
pub mod report;

pub use config::{ClientConfig, ConfigError, RatioPair};
pub use error::{FeedError, RecordError, Result};
pub use feed::{FeedRecord, decode_quotes, decode_records, read_quotes, read_records};
pub use report::QuoteReport;
