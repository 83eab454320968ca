//! Quote feed decoding
//!
//! The feed delivers JSON: either one quote object or an array of them.
//! Array elements are decoded one by one so a malformed record does not
//! take the rest of the batch down with it.

use std::io::Read;

use log::debug;
use quotefeed_core::Quote;
use serde_json::Value;

use crate::error::{FeedError, RecordError, Result};

/// One decoded feed record: a quote, or why the record was rejected
pub type FeedRecord = std::result::Result<Quote, RecordError>;

/// Decode a JSON payload into per-record results, preserving feed order
///
/// Fails as a whole only when the payload is not JSON, or is neither an
/// object nor an array.
pub fn decode_records(json: &str) -> Result<Vec<FeedRecord>> {
    let records = match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| decode_record(index, item))
            .collect(),
        // re-decode from text so the error carries the position of the bad field
        Value::Object(_) => {
            let record = serde_json::from_str::<Quote>(json).map_err(|e| RecordError {
                index: 0,
                reason: e.to_string(),
            });
            vec![record]
        }
        other => {
            return Err(FeedError::Decode(serde::de::Error::custom(format!(
                "expected a quote object or an array of quotes, found {other}"
            ))));
        }
    };
    debug!("Decoded {} record(s)", records.len());
    Ok(records)
}

fn decode_record(index: usize, item: Value) -> FeedRecord {
    serde_json::from_value(item).map_err(|e| RecordError {
        index,
        reason: e.to_string(),
    })
}

/// Decode a JSON payload into quotes, failing on the first malformed record
pub fn decode_quotes(json: &str) -> Result<Vec<Quote>> {
    let quotes = decode_records(json)?
        .into_iter()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(quotes)
}

fn read_to_string<R: Read>(mut reader: R) -> Result<String> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

/// Read the whole input and decode it into per-record results
pub fn read_records<R: Read>(reader: R) -> Result<Vec<FeedRecord>> {
    decode_records(&read_to_string(reader)?)
}

/// Read the whole input and decode it, failing on the first malformed record
pub fn read_quotes<R: Read>(reader: R) -> Result<Vec<Quote>> {
    decode_quotes(&read_to_string(reader)?)
}
