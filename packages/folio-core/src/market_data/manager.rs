//! Price download loop and table assembly.

use tracing::{info, warn};

use super::{DateRange, QuoteSource, YahooSource};
use crate::types::PriceTable;
use crate::Result;

/// Downloads historical prices and assembles them into a [`PriceTable`].
///
/// Holds no state between calls other than its quote source; each
/// `download_data` call builds a fresh table owned by the caller.
pub struct DataManager<S = YahooSource> {
    source: S,
}

impl DataManager<YahooSource> {
    /// Manager backed by Yahoo Finance.
    pub fn new() -> Self {
        Self {
            source: YahooSource::new(),
        }
    }
}

impl Default for DataManager<YahooSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: QuoteSource> DataManager<S> {
    /// Manager over a custom quote source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Download daily closing prices for `tickers` over `range`.
    ///
    /// Tickers are fetched one at a time, in input order, and aligned by
    /// date with outer-join semantics. A ticker the provider has no data
    /// for is logged and omitted from the table; a provider failure aborts
    /// the whole download with no partial table and no retry.
    pub async fn download_data(&self, tickers: &[String], range: &DateRange) -> Result<PriceTable> {
        let mut series = Vec::with_capacity(tickers.len());

        for ticker in tickers {
            info!("downloading data for {ticker}");
            let closes = self.source.daily_closes(ticker, range).await?;

            if closes.is_empty() {
                warn!("no data found for {ticker}");
                continue;
            }
            series.push((ticker.clone(), closes));
        }

        Ok(PriceTable::from_series(series))
    }
}
