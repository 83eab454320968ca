use chrono::NaiveDateTime;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{QuoteError, QuoteResult};
use crate::values::{Price, Size, Symbol, Timestamp};

/// Format used by the feed for `timestamp`, e.g. `2019-02-11 22:06:30.572453`
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Which side of the top of book a level belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteSide {
    Bid,
    Ask,
}

impl QuoteSide {
    /// Field path of the level in the quote record
    pub fn level_field(&self) -> &'static str {
        match self {
            QuoteSide::Bid => "top_bid",
            QuoteSide::Ask => "top_ask",
        }
    }

    /// Field path of the level's price in the quote record
    pub fn price_field(&self) -> &'static str {
        match self {
            QuoteSide::Bid => "top_bid.price",
            QuoteSide::Ask => "top_ask.price",
        }
    }
}

/// Best bid or best ask level (price + size)
///
/// Both fields are optional on the wire; a missing price is only an
/// error once something asks for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BookLevel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    /// Ignored by extraction; a value of the wrong type decodes as `None`
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<Size>,
}

impl BookLevel {
    /// Create a level with price and size
    pub fn new(price: Price, size: Size) -> Self {
        Self {
            price: Some(price),
            size: Some(size),
        }
    }

    /// Create a level carrying only a price
    pub fn with_price(price: Price) -> Self {
        Self {
            price: Some(price),
            size: None,
        }
    }
}

/// Quote record as published by the stock feed
///
/// Only `stock` is required to decode. The stock identifier may arrive as
/// a JSON string or number; numbers are normalised to their decimal text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Stock identifier
    #[serde(deserialize_with = "symbol")]
    pub stock: Symbol,
    /// Best bid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_bid: Option<BookLevel>,
    /// Best ask
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_ask: Option<BookLevel>,
    /// Feed timestamp, kept as the raw string; non-strings decode as `None`
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<String>,
    /// Feed-assigned quote id; non-strings decode as `None`
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
}

/// Decode an optional field, turning a type mismatch into `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    #[allow(dead_code)]
    enum Lenient<T> {
        Value(T),
        Other(IgnoredAny),
    }

    Ok(match Option::<Lenient<T>>::deserialize(deserializer)? {
        Some(Lenient::Value(value)) => Some(value),
        _ => None,
    })
}

/// Decode a stock identifier from a string or a number
fn symbol<'de, D>(deserializer: D) -> Result<Symbol, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawSymbol {
        Text(String),
        Signed(i64),
        Unsigned(u64),
        Float(f64),
    }

    Ok(match RawSymbol::deserialize(deserializer)? {
        RawSymbol::Text(s) => s,
        RawSymbol::Signed(n) => n.to_string(),
        RawSymbol::Unsigned(n) => n.to_string(),
        RawSymbol::Float(n) => n.to_string(),
    })
}

impl Quote {
    /// Create a quote with both sides populated
    pub fn new(stock: impl Into<Symbol>, top_bid: BookLevel, top_ask: BookLevel) -> Self {
        Self {
            stock: stock.into(),
            top_bid: Some(top_bid),
            top_ask: Some(top_ask),
            timestamp: None,
            id: None,
        }
    }

    /// Set the feed timestamp
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Set the feed id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Get the level for one side, if present
    pub fn level(&self, side: QuoteSide) -> Option<&BookLevel> {
        match side {
            QuoteSide::Bid => self.top_bid.as_ref(),
            QuoteSide::Ask => self.top_ask.as_ref(),
        }
    }

    /// Price on one side, or `MissingField` naming the absent path
    pub fn price(&self, side: QuoteSide) -> QuoteResult<Price> {
        let level = self
            .level(side)
            .ok_or_else(|| self.missing(side.level_field()))?;
        level.price.ok_or_else(|| self.missing(side.price_field()))
    }

    /// Best bid price
    pub fn bid_price(&self) -> QuoteResult<Price> {
        self.price(QuoteSide::Bid)
    }

    /// Best ask price
    pub fn ask_price(&self) -> QuoteResult<Price> {
        self.price(QuoteSide::Ask)
    }

    /// Parse the feed timestamp; `None` when absent or malformed
    pub fn parsed_timestamp(&self) -> Option<Timestamp> {
        let raw = self.timestamp.as_deref()?;
        NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()
    }

    fn missing(&self, field: &'static str) -> QuoteError {
        QuoteError::MissingField {
            stock: self.stock.clone(),
            field,
        }
    }
}
