//! Quote report
//!
//! Turns a batch of quotes into data points and, when a ratio pair is
//! configured, the ratio of the two stocks' latest midpoint prices.

use std::collections::HashMap;
use std::fmt;

use log::{debug, info, warn};
use quotefeed_core::{
    DataPoint, Price, Quote, QuoteError, Symbol, compute_ratio, extract_data_point,
};

use crate::config::ClientConfig;
use crate::error::{RecordError, Result};
use crate::feed::FeedRecord;

/// Data points extracted from one batch of quotes
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteReport {
    /// Data points in feed order
    pub data_points: Vec<DataPoint>,
    /// Quotes that failed extraction (only when skipping is enabled)
    pub skipped: Vec<QuoteError>,
    /// Feed records that could not be decoded (only when skipping is enabled)
    pub rejected: Vec<RecordError>,
    /// Latest midpoint per stock
    pub prices: HashMap<Symbol, Price>,
    /// Ratio of the configured pair, if both stocks were priced
    pub ratio: Option<f64>,
    precision: usize,
}

impl QuoteReport {
    /// Build a report from quotes in feed order
    ///
    /// With `skip_invalid` off, the first extraction failure is returned
    /// and no report is produced.
    pub fn build(quotes: &[Quote], config: &ClientConfig) -> Result<Self> {
        Self::from_records(quotes.iter().cloned().map(Ok), config)
    }

    /// Build a report from decoded feed records in feed order
    ///
    /// Malformed records and quotes failing extraction share one policy:
    /// skipped with a warning, or the first one aborts the report.
    pub fn from_records<I>(records: I, config: &ClientConfig) -> Result<Self>
    where
        I: IntoIterator<Item = FeedRecord>,
    {
        let mut data_points = Vec::new();
        let mut skipped = Vec::new();
        let mut rejected = Vec::new();
        let mut prices = HashMap::new();

        for record in records {
            let quote = match record {
                Ok(quote) => quote,
                Err(e) if config.skip_invalid => {
                    warn!("Skipping malformed {}", e);
                    rejected.push(e);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            match extract_data_point(&quote) {
                Ok(dp) => {
                    debug!(
                        "{}: bid={} ask={} mid={}",
                        dp.stock, dp.bid_price, dp.ask_price, dp.price
                    );
                    prices.insert(dp.stock.clone(), dp.price);
                    data_points.push(dp);
                }
                Err(e) if config.skip_invalid => {
                    warn!("Skipping quote: {}", e);
                    skipped.push(e);
                }
                Err(e) => return Err(e.into()),
            }
        }

        let ratio = config.ratio.as_ref().and_then(|pair| {
            match (prices.get(&pair.numerator), prices.get(&pair.denominator)) {
                (Some(&num), Some(&den)) => Some(compute_ratio(num, den)),
                _ => {
                    warn!(
                        "Cannot compute ratio {}/{}: stock not priced in this batch",
                        pair.numerator, pair.denominator
                    );
                    None
                }
            }
        });

        info!(
            "Report built: {} data point(s), {} skipped, {} malformed",
            data_points.len(),
            skipped.len(),
            rejected.len()
        );

        Ok(Self {
            data_points,
            skipped,
            rejected,
            prices,
            ratio,
            precision: config.precision,
        })
    }

    /// Latest midpoint for a stock
    pub fn price_of(&self, stock: &str) -> Option<Price> {
        self.prices.get(stock).copied()
    }
}

impl fmt::Display for QuoteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precision;
        for dp in &self.data_points {
            writeln!(
                f,
                "Quoted {} at (bid:{:.p$}, ask:{:.p$}, price:{:.p$})",
                dp.stock, dp.bid_price, dp.ask_price, dp.price
            )?;
        }
        if let Some(ratio) = self.ratio {
            writeln!(f, "Ratio {:.p$}", ratio)?;
        }
        Ok(())
    }
}
