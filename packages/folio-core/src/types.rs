//! Date-indexed tables of prices and returns.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closing prices indexed by trading date, one column per asset.
///
/// Rows are the union of all assets' dates, ascending; a cell is `None`
/// where an asset has no observation for that date. Built once per
/// retrieval and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    /// Trading dates, ascending and deduplicated
    dates: Vec<NaiveDate>,
    /// Asset identifiers, in input order
    columns: Vec<String>,
    /// Row-major cells; `values[row][col]`
    values: Vec<Vec<Option<f64>>>,
}

impl PriceTable {
    /// Assemble a table from per-asset series, aligning by date.
    ///
    /// The row set is the union of all series' dates (outer join); column
    /// order follows the input order. Duplicate dates within one series
    /// collapse to the last observation.
    pub fn from_series(series: Vec<(String, Vec<(NaiveDate, f64)>)>) -> Self {
        let deduped: Vec<(String, BTreeMap<NaiveDate, f64>)> = series
            .into_iter()
            .map(|(symbol, observations)| (symbol, observations.into_iter().collect()))
            .collect();

        let dates: Vec<NaiveDate> = deduped
            .iter()
            .flat_map(|(_, observations)| observations.keys().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let columns: Vec<String> = deduped.iter().map(|(symbol, _)| symbol.clone()).collect();

        let values = dates
            .iter()
            .map(|date| {
                deduped
                    .iter()
                    .map(|(_, observations)| observations.get(date).copied())
                    .collect()
            })
            .collect();

        Self {
            dates,
            columns,
            values,
        }
    }

    /// Trading dates, ascending.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Asset identifiers, in column order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows (trading dates).
    pub fn row_count(&self) -> usize {
        self.dates.len()
    }

    /// Number of columns (assets).
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table holds no observations at all.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() || self.columns.is_empty()
    }

    /// Cell at `(row, col)`; `None` for a gap.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values[row][col]
    }

    /// Column index of an asset identifier.
    pub fn column_index(&self, symbol: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == symbol)
    }
}

/// Period-over-period fractional returns derived from a [`PriceTable`].
///
/// Same columns as the source table; rows are only those dates where every
/// asset has both a price and a predecessor price, so cells are dense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnsTable {
    dates: Vec<NaiveDate>,
    columns: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl ReturnsTable {
    /// Build a returns table from dense rows.
    ///
    /// Every row must have one value per column.
    pub fn new(columns: Vec<String>, dates: Vec<NaiveDate>, values: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(dates.len(), values.len());
        debug_assert!(values.iter().all(|row| row.len() == columns.len()));
        Self {
            dates,
            columns,
            values,
        }
    }

    /// Dates of the retained return rows, ascending.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Asset identifiers, in column order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of return rows.
    pub fn row_count(&self) -> usize {
        self.dates.len()
    }

    /// Number of columns (assets).
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Return at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    /// All returns of one column, in date order.
    pub fn column(&self, col: usize) -> Vec<f64> {
        self.values.iter().map(|row| row[col]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_outer_join_alignment() {
        let table = PriceTable::from_series(vec![
            (
                "AAPL".to_string(),
                vec![(date(2024, 1, 2), 100.0), (date(2024, 1, 3), 101.0)],
            ),
            (
                "MSFT".to_string(),
                vec![(date(2024, 1, 3), 200.0), (date(2024, 1, 4), 202.0)],
            ),
        ]);

        // Union of dates, ascending
        assert_eq!(
            table.dates(),
            &[date(2024, 1, 2), date(2024, 1, 3), date(2024, 1, 4)]
        );
        assert_eq!(table.columns(), &["AAPL".to_string(), "MSFT".to_string()]);

        // Gaps where an asset lacks a date
        assert_eq!(table.get(0, 0), Some(100.0));
        assert_eq!(table.get(0, 1), None);
        assert_eq!(table.get(1, 0), Some(101.0));
        assert_eq!(table.get(1, 1), Some(200.0));
        assert_eq!(table.get(2, 0), None);
        assert_eq!(table.get(2, 1), Some(202.0));
    }

    #[test]
    fn test_column_order_follows_input() {
        let table = PriceTable::from_series(vec![
            ("ZZZ".to_string(), vec![(date(2024, 1, 2), 1.0)]),
            ("AAA".to_string(), vec![(date(2024, 1, 2), 2.0)]),
        ]);

        // No implicit sorting of identifiers
        assert_eq!(table.columns(), &["ZZZ".to_string(), "AAA".to_string()]);
        assert_eq!(table.column_index("AAA"), Some(1));
        assert_eq!(table.column_index("MSFT"), None);
    }

    #[test]
    fn test_duplicate_dates_collapse_to_last() {
        let table = PriceTable::from_series(vec![(
            "AAPL".to_string(),
            vec![
                (date(2024, 1, 2), 100.0),
                (date(2024, 1, 2), 105.0),
                (date(2024, 1, 3), 101.0),
            ],
        )]);

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some(105.0));
    }

    #[test]
    fn test_unsorted_input_dates_are_sorted() {
        let table = PriceTable::from_series(vec![(
            "AAPL".to_string(),
            vec![(date(2024, 1, 3), 101.0), (date(2024, 1, 2), 100.0)],
        )]);

        assert_eq!(table.dates(), &[date(2024, 1, 2), date(2024, 1, 3)]);
        assert_eq!(table.get(0, 0), Some(100.0));
    }

    #[test]
    fn test_empty_series_set() {
        let table = PriceTable::from_series(vec![]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_price_table_json_round_trip() {
        let table = PriceTable::from_series(vec![(
            "AAPL".to_string(),
            vec![(date(2024, 1, 2), 100.0), (date(2024, 1, 3), 101.0)],
        )]);

        let json = serde_json::to_string(&table).unwrap();
        let back: PriceTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_returns_table_column() {
        let returns = ReturnsTable::new(
            vec!["AAPL".to_string(), "MSFT".to_string()],
            vec![date(2024, 1, 3), date(2024, 1, 4)],
            vec![vec![0.01, 0.02], vec![-0.01, 0.03]],
        );

        assert_eq!(returns.column(0), vec![0.01, -0.01]);
        assert_eq!(returns.column(1), vec![0.02, 0.03]);
        assert_eq!(returns.get(1, 1), 0.03);
    }
}
