use thiserror::Error;

/// Domain-level errors for quote extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// A required nested field (`top_bid`, `top_ask.price`, ...) is absent
    #[error("Missing field in quote for {stock}: {field}")]
    MissingField { stock: String, field: &'static str },
}

impl QuoteError {
    /// Dotted path of the missing field
    pub fn field(&self) -> &'static str {
        match self {
            QuoteError::MissingField { field, .. } => field,
        }
    }
}

pub type QuoteResult<T> = std::result::Result<T, QuoteError>;
