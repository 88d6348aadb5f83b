//! Portfolio returns and statistics.
//!
//! Derives daily return series from price history and computes
//! weight-conditioned annualized portfolio metrics.

mod metrics;
mod returns;

pub use metrics::{
    asset_statistics, correlation_matrix, mean_returns, sample_covariance, AssetStats,
    PortfolioAnalyzer, PortfolioMetrics, TRADING_DAYS_PER_YEAR,
};
pub use returns::calculate_returns;
