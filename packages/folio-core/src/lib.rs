//! Folio Core - historical price retrieval and portfolio statistics.
//!
//! This crate downloads daily closing prices for a set of tickers, derives
//! period-over-period returns from them, and computes annualized portfolio
//! statistics for a fixed weight vector:
//!
//! - **Price retrieval**: per-ticker daily closes from Yahoo Finance,
//!   outer-joined by date into a [`PriceTable`]
//! - **Return derivation**: fractional change per column, gap rows dropped
//! - **Portfolio metrics**: annualized expected return and volatility for a
//!   weight vector, using the unbiased sample covariance
//!
//! # Example
//!
//! ```rust,no_run
//! use folio_core::{calculate_returns, DataManager, DateRange, PortfolioAnalyzer};
//!
//! # async fn run() -> folio_core::Result<()> {
//! let manager = DataManager::new();
//! let tickers = vec!["AAPL".to_string(), "MSFT".to_string()];
//!
//! // Download five years of daily closes
//! let prices = manager.download_data(&tickers, &DateRange::default()).await?;
//! let returns = calculate_returns(&prices)?;
//!
//! // Annualized metrics for a 50/50 portfolio
//! let mut analyzer = PortfolioAnalyzer::new();
//! analyzer.set_data(returns);
//! let metrics = analyzer.calculate_portfolio_metrics(&[0.5, 0.5])?;
//! println!(
//!     "return {:.2}%, volatility {:.2}%",
//!     metrics.expected_return * 100.0,
//!     metrics.volatility * 100.0
//! );
//! # Ok(())
//! # }
//! ```

pub mod market_data;
pub mod portfolio;
pub mod types;

// Re-export commonly used types
pub use types::{PriceTable, ReturnsTable};

// Re-export main functionality
pub use market_data::{DataManager, DateRange, QuoteSource, YahooSource};
pub use portfolio::{
    asset_statistics, calculate_returns, correlation_matrix, mean_returns, sample_covariance,
    AssetStats, PortfolioAnalyzer, PortfolioMetrics, TRADING_DAYS_PER_YEAR,
};

/// Error types for folio-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("provider request failed: {0}")]
    Provider(#[from] yahoo_finance_api::YahooError),

    #[error("not enough price data: {0}")]
    EmptyInput(String),

    #[error("no returns data bound; call set_data first")]
    UnboundData,

    #[error("weights length {got} does not match asset count {expected}")]
    InvalidWeights { expected: usize, got: usize },
}

/// Result type for folio-core operations.
pub type Result<T> = std::result::Result<T, Error>;
