use chrono::NaiveDateTime;

/// Price value as delivered by the quote feed
/// Kept as f64 so ratios follow IEEE-754 division (x/0 = inf)
pub type Price = f64;

/// Size (lot count) at a book level
pub type Size = u64;

/// Quote feed timestamp (the feed sends wall-clock times without an offset)
pub type Timestamp = NaiveDateTime;

/// Stock identifier
pub type Symbol = String;
