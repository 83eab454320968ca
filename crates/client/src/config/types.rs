use quotefeed_core::Symbol;
use serde::{Deserialize, Serialize};

/// Largest number of decimal places the report will print
pub const MAX_PRECISION: usize = 10;

/// Which two stocks to compare in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioPair {
    pub numerator: Symbol,
    pub denominator: Symbol,
}

impl RatioPair {
    pub fn new(numerator: impl Into<Symbol>, denominator: impl Into<Symbol>) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }
}

/// Client configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Stocks whose midpoint prices are divided at the end of the report
    #[serde(default)]
    pub ratio: Option<RatioPair>,
    /// Decimal places for printed prices and ratio
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Skip quotes that fail extraction instead of aborting
    #[serde(default = "default_skip_invalid")]
    pub skip_invalid: bool,
}

fn default_precision() -> usize {
    2
}

fn default_skip_invalid() -> bool {
    true
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ratio: None,
            precision: default_precision(),
            skip_invalid: default_skip_invalid(),
        }
    }
}

impl ClientConfig {
    /// Set the ratio pair
    pub fn with_ratio(
        mut self,
        numerator: impl Into<Symbol>,
        denominator: impl Into<Symbol>,
    ) -> Self {
        self.ratio = Some(RatioPair::new(numerator, denominator));
        self
    }

    /// Set the printed precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Abort on the first quote that fails extraction
    pub fn strict(mut self) -> Self {
        self.skip_invalid = false;
        self
    }
}
