mod data_point;
mod quote;

pub use data_point::{DataPoint, extract_data_point};
pub use quote::{BookLevel, Quote, QuoteSide};
