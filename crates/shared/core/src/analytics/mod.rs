//! Numeric helpers applied to extracted prices

mod ratio;

pub use ratio::compute_ratio;
