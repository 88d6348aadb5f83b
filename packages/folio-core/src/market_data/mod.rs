//! Historical market data retrieval.
//!
//! Downloads per-ticker daily closing prices from a quote source and
//! assembles them into a date-aligned [`PriceTable`](crate::types::PriceTable).

mod manager;
mod yahoo;

pub use manager::DataManager;
pub use yahoo::{DateRange, QuoteSource, YahooSource};
