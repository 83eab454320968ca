use serde::{Deserialize, Serialize};

use super::Quote;
use crate::error::QuoteResult;
use crate::values::{Price, Symbol};

/// Prices derived from a single quote
///
/// `price` is the midpoint of bid and ask. No ordering between bid and
/// ask is enforced; a crossed quote still averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub stock: Symbol,
    pub bid_price: Price,
    pub ask_price: Price,
    pub price: Price,
}

impl DataPoint {
    /// Build from bid and ask, computing the midpoint
    pub fn new(stock: impl Into<Symbol>, bid_price: Price, ask_price: Price) -> Self {
        Self {
            stock: stock.into(),
            bid_price,
            ask_price,
            price: (bid_price + ask_price) / 2.0,
        }
    }

    /// Extract from a quote record
    pub fn from_quote(quote: &Quote) -> QuoteResult<Self> {
        let bid_price = quote.bid_price()?;
        let ask_price = quote.ask_price()?;
        Ok(Self::new(quote.stock.clone(), bid_price, ask_price))
    }

    /// Bid/ask spread (negative for a crossed quote)
    pub fn spread(&self) -> Price {
        self.ask_price - self.bid_price
    }

    /// Positional form: (stock, bid, ask, midpoint)
    pub fn into_tuple(self) -> (Symbol, Price, Price, Price) {
        (self.stock, self.bid_price, self.ask_price, self.price)
    }
}

impl TryFrom<&Quote> for DataPoint {
    type Error = crate::error::QuoteError;

    fn try_from(quote: &Quote) -> Result<Self, Self::Error> {
        Self::from_quote(quote)
    }
}

/// Extract stock, bid, ask and midpoint price from a quote
///
/// Fails with `QuoteError::MissingField` if either side or its price is
/// absent. The bid side is checked first.
pub fn extract_data_point(quote: &Quote) -> QuoteResult<DataPoint> {
    DataPoint::from_quote(quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::BookLevel;
    use crate::error::QuoteError;

    const EPS: f64 = 1e-9;

    fn quote(stock: &str, bid: f64, ask: f64) -> Quote {
        Quote::new(stock, BookLevel::with_price(bid), BookLevel::with_price(ask))
    }

    #[test]
    fn test_extract_basic_quotes() {
        let quotes = [
            quote("AAPL", 100.0, 110.0),
            quote("GOOG", 500.0, 520.0),
            quote("MSFT", 200.0, 210.0),
        ];

        for q in &quotes {
            let (stock, bid, ask, price) = extract_data_point(q).unwrap().into_tuple();
            assert_eq!(stock, q.stock);
            assert!((bid - q.top_bid.unwrap().price.unwrap()).abs() < EPS);
            assert!((ask - q.top_ask.unwrap().price.unwrap()).abs() < EPS);
            assert!((price - (bid + ask) / 2.0).abs() < EPS);
        }
    }

    #[test]
    fn test_midpoint_values() {
        let dp = extract_data_point(&quote("ABC", 120.48, 121.2)).unwrap();
        assert!((dp.price - 120.84).abs() < EPS);
        assert!((dp.spread() - 0.72).abs() < EPS);
    }

    #[test]
    fn test_crossed_quote_is_averaged() {
        let dp = extract_data_point(&quote("ABC", 120.48, 119.2)).unwrap();
        assert!(dp.bid_price > dp.ask_price);
        assert!((dp.price - 119.84).abs() < EPS);
        assert!(dp.spread() < 0.0);
    }

    #[test]
    fn test_missing_top_bid() {
        let mut q = quote("AAPL", 100.0, 110.0);
        q.top_bid = None;

        let err = extract_data_point(&q).unwrap_err();
        assert!(matches!(err, QuoteError::MissingField { field: "top_bid", .. }));
    }

    #[test]
    fn test_missing_top_ask() {
        let mut q = quote("AAPL", 100.0, 110.0);
        q.top_ask = None;

        let err = extract_data_point(&q).unwrap_err();
        assert!(matches!(err, QuoteError::MissingField { field: "top_ask", .. }));
    }

    #[test]
    fn test_bid_checked_before_ask() {
        let q = Quote {
            stock: "AAPL".to_string(),
            top_bid: None,
            top_ask: None,
            timestamp: None,
            id: None,
        };
        assert_eq!(extract_data_point(&q).unwrap_err().field(), "top_bid");
    }

    #[test]
    fn test_try_from_quote() {
        let q = quote("DEF", 117.87, 121.68);
        let dp = DataPoint::try_from(&q).unwrap();
        assert_eq!(dp, DataPoint::new("DEF", 117.87, 121.68));
    }
}
