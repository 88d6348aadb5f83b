//! Daily return derivation from price history.

use tracing::debug;

use crate::types::{PriceTable, ReturnsTable};
use crate::{Error, Result};

/// Convert a price table into period-over-period fractional returns.
///
/// `returns[t][a] = prices[t][a] / prices[t-1][a] - 1`. The first row is
/// consumed as the baseline, and any row with a gap in itself or in its
/// predecessor is dropped entirely, so the result is dense.
///
/// # Errors
///
/// `Error::EmptyInput` when the table has fewer than two rows, or when no
/// complete consecutive row pair exists - no return can be derived either
/// way.
pub fn calculate_returns(prices: &PriceTable) -> Result<ReturnsTable> {
    if prices.row_count() < 2 {
        return Err(Error::EmptyInput(format!(
            "need at least 2 price rows to compute returns, got {}",
            prices.row_count()
        )));
    }

    let cols = prices.column_count();
    let mut dates = Vec::new();
    let mut rows = Vec::new();

    for t in 1..prices.row_count() {
        let mut row = Vec::with_capacity(cols);
        for a in 0..cols {
            match (prices.get(t - 1, a), prices.get(t, a)) {
                (Some(prev), Some(curr)) => row.push(curr / prev - 1.0),
                _ => break,
            }
        }
        if row.len() == cols {
            dates.push(prices.dates()[t]);
            rows.push(row);
        }
    }

    if rows.is_empty() {
        return Err(Error::EmptyInput(
            "no complete consecutive price observations".to_string(),
        ));
    }

    debug!(
        rows = rows.len(),
        assets = cols,
        "calculated returns from price table"
    );

    Ok(ReturnsTable::new(prices.columns().to_vec(), dates, rows))
}
