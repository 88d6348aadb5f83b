//! Weight-conditioned portfolio statistics.
//!
//! Provides annualized expected return and volatility for a weight vector,
//! plus the mean/covariance/correlation helpers they are built from.

use serde::{Deserialize, Serialize};

use crate::types::ReturnsTable;
use crate::{Error, Result};

/// Trading periods assumed per year when annualizing daily statistics.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Annualized return/risk pair for one weight vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    /// Annualized expected portfolio return (fractional; 0.25 = 25%)
    pub expected_return: f64,
    /// Annualized portfolio volatility (fractional)
    pub volatility: f64,
}

/// Per-asset annualized summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetStats {
    /// Asset identifier
    pub symbol: String,
    /// Annualized mean return in percent
    pub annual_return_percent: f64,
    /// Annualized volatility in percent
    pub annual_volatility_percent: f64,
}

/// Computes portfolio metrics over a bound returns dataset.
///
/// The analyzer starts unbound; [`set_data`](Self::set_data) binds a
/// returns table, and rebinding replaces it wholesale. Metric computation
/// is a pure function of the bound table and the supplied weights.
#[derive(Debug, Clone)]
pub struct PortfolioAnalyzer {
    returns: Option<ReturnsTable>,
    periods_per_year: f64,
}

impl PortfolioAnalyzer {
    /// Unbound analyzer annualizing with [`TRADING_DAYS_PER_YEAR`].
    pub fn new() -> Self {
        Self {
            returns: None,
            periods_per_year: TRADING_DAYS_PER_YEAR,
        }
    }

    /// Unbound analyzer with a custom annualization factor.
    ///
    /// The factor is a fixed constant, not inferred from the data's date
    /// index; pass 52 for weekly observations, 12 for monthly.
    pub fn with_periods_per_year(periods_per_year: f64) -> Self {
        Self {
            returns: None,
            periods_per_year,
        }
    }

    /// Bind a returns table as the active dataset.
    pub fn set_data(&mut self, returns: ReturnsTable) {
        self.returns = Some(returns);
    }

    /// Identifiers of the bound dataset, in column order.
    pub fn assets(&self) -> Option<&[String]> {
        self.returns.as_ref().map(|r| r.columns())
    }

    /// Annualized expected return and volatility for `weights`.
    ///
    /// `expected_return = sum_i(mean(returns_i) * w_i) * periods_per_year`
    /// and `volatility = sqrt(w' * cov * periods_per_year * w)` with the
    /// unbiased sample covariance.
    ///
    /// # Errors
    ///
    /// `Error::UnboundData` before any `set_data` call;
    /// `Error::InvalidWeights` when `weights` does not match the bound
    /// column count.
    pub fn calculate_portfolio_metrics(&self, weights: &[f64]) -> Result<PortfolioMetrics> {
        let returns = self.returns.as_ref().ok_or(Error::UnboundData)?;

        let assets = returns.column_count();
        if weights.len() != assets {
            return Err(Error::InvalidWeights {
                expected: assets,
                got: weights.len(),
            });
        }

        let means = mean_returns(returns);
        let expected_return = means
            .iter()
            .zip(weights)
            .map(|(mean, weight)| mean * weight)
            .sum::<f64>()
            * self.periods_per_year;

        let covariance = sample_covariance(returns);
        let mut variance = 0.0;
        for (i, wi) in weights.iter().enumerate() {
            for (j, wj) in weights.iter().enumerate() {
                variance += wi * covariance[i][j] * self.periods_per_year * wj;
            }
        }

        Ok(PortfolioMetrics {
            expected_return,
            volatility: variance.sqrt(),
        })
    }
}

impl Default for PortfolioAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Mean of each return column.
pub fn mean_returns(returns: &ReturnsTable) -> Vec<f64> {
    let n = returns.row_count() as f64;
    (0..returns.column_count())
        .map(|a| (0..returns.row_count()).map(|t| returns.get(t, a)).sum::<f64>() / n)
        .collect()
}

/// Unbiased sample covariance matrix of the return columns.
///
/// Uses the N-1 denominator; a single-row table therefore yields NaN
/// entries rather than a silently zeroed matrix.
pub fn sample_covariance(returns: &ReturnsTable) -> Vec<Vec<f64>> {
    let n = returns.row_count() as f64;
    let cols = returns.column_count();
    let means = mean_returns(returns);

    let mut covariance = vec![vec![0.0; cols]; cols];
    for i in 0..cols {
        for j in i..cols {
            let acc: f64 = (0..returns.row_count())
                .map(|t| (returns.get(t, i) - means[i]) * (returns.get(t, j) - means[j]))
                .sum();
            let value = acc / (n - 1.0);
            covariance[i][j] = value;
            covariance[j][i] = value;
        }
    }
    covariance
}

/// Pairwise correlation of the return columns.
///
/// Each entry is the covariance divided by the product of the two
/// columns' standard deviations; a zero-variance column yields NaN.
pub fn correlation_matrix(returns: &ReturnsTable) -> Vec<Vec<f64>> {
    let covariance = sample_covariance(returns);
    let cols = returns.column_count();

    let mut correlation = vec![vec![0.0; cols]; cols];
    for i in 0..cols {
        for j in 0..cols {
            correlation[i][j] =
                covariance[i][j] / (covariance[i][i].sqrt() * covariance[j][j].sqrt());
        }
    }
    correlation
}

/// Annualized per-asset return and volatility summaries.
pub fn asset_statistics(returns: &ReturnsTable, periods_per_year: f64) -> Vec<AssetStats> {
    let means = mean_returns(returns);
    let covariance = sample_covariance(returns);

    returns
        .columns()
        .iter()
        .enumerate()
        .map(|(i, symbol)| AssetStats {
            symbol: symbol.clone(),
            annual_return_percent: means[i] * periods_per_year * 100.0,
            annual_volatility_percent: covariance[i][i].sqrt() * periods_per_year.sqrt() * 100.0,
        })
        .collect()
}
