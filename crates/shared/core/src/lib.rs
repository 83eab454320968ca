//! Quotefeed Core Domain
//!
//! Pure domain types for the quote feed client: quote records,
//! data point extraction and ratio math.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod analytics;
pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use analytics::compute_ratio;
pub use entities::{BookLevel, DataPoint, Quote, QuoteSide, extract_data_point};
pub use error::{QuoteError, QuoteResult};
pub use values::{Price, Size, Symbol, Timestamp};
