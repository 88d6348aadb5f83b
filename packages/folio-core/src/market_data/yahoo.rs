//! Yahoo Finance quote source.

use chrono::{DateTime, NaiveDate, NaiveTime};
use time::OffsetDateTime;
use yahoo_finance_api::{YahooConnector, YahooError};

use crate::Result;

/// Date coverage of a historical quote request.
#[derive(Debug, Clone, PartialEq)]
pub enum DateRange {
    /// Relative lookback window using the provider's range tokens
    /// ("1mo", "1y", "5y", ...).
    Lookback(String),
    /// Explicit calendar window; `end` is exclusive.
    Between { start: NaiveDate, end: NaiveDate },
}

impl DateRange {
    /// Lookback window from a provider range token.
    pub fn lookback(token: &str) -> Self {
        Self::Lookback(token.to_string())
    }

    /// Explicit calendar window.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::Between { start, end }
    }
}

impl Default for DateRange {
    /// Five years of history.
    fn default() -> Self {
        Self::Lookback("5y".to_string())
    }
}

/// Single-ticker retrieval boundary over an external quote provider.
///
/// Implementations return the daily closing series for one ticker, empty
/// when the provider has no data for it. Any other provider failure is an
/// error and aborts the caller's batch.
#[allow(async_fn_in_trait)]
pub trait QuoteSource {
    /// Daily closing prices for `ticker` over `range`, in no particular
    /// order and possibly containing duplicate dates.
    async fn daily_closes(&self, ticker: &str, range: &DateRange) -> Result<Vec<(NaiveDate, f64)>>;
}

/// [`QuoteSource`] backed by the Yahoo Finance chart API.
pub struct YahooSource {
    connector: YahooConnector,
}

impl YahooSource {
    pub fn new() -> Self {
        Self {
            connector: YahooConnector::new(),
        }
    }
}

impl Default for YahooSource {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteSource for YahooSource {
    async fn daily_closes(&self, ticker: &str, range: &DateRange) -> Result<Vec<(NaiveDate, f64)>> {
        let response = match range {
            DateRange::Lookback(token) => {
                self.connector.get_quote_range(ticker, "1d", token).await
            }
            DateRange::Between { start, end } => {
                self.connector
                    .get_quote_history(ticker, day_start(*start), day_start(*end))
                    .await
            }
        };

        let quotes = match response.and_then(|r| r.quotes()) {
            Ok(quotes) => quotes,
            // An unknown or delisted ticker is not fatal to the batch
            Err(YahooError::EmptyDataSet) => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(quotes
            .into_iter()
            .filter_map(|quote| {
                DateTime::from_timestamp(quote.timestamp as i64, 0)
                    .map(|ts| (ts.date_naive(), quote.close))
            })
            .collect())
    }
}

/// Midnight UTC of a calendar date, in the provider's time representation.
fn day_start(date: NaiveDate) -> OffsetDateTime {
    let secs = date.and_time(NaiveTime::MIN).and_utc().timestamp();
    OffsetDateTime::from_unix_timestamp(secs).unwrap_or(OffsetDateTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_is_five_years() {
        assert_eq!(DateRange::default(), DateRange::Lookback("5y".to_string()));
    }

    #[test]
    fn test_day_start_conversion() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let converted = day_start(date);

        // 2024-01-02T00:00:00Z
        assert_eq!(converted.unix_timestamp(), 1_704_153_600);
    }
}
