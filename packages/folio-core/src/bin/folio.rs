//! Folio CLI - download price history and print portfolio statistics.
//!
//! Example:
//!
//! ```text
//! folio stats --tickers AAPL,MSFT,GOOGL --period 5y --weights 0.4,0.3,0.3
//! folio correlation --tickers AAPL,MSFT,GOOGL --period 1y
//! ```

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use folio_core::{
    asset_statistics, calculate_returns, correlation_matrix, DataManager, DateRange,
    PortfolioAnalyzer, ReturnsTable, TRADING_DAYS_PER_YEAR,
};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Historical price retrieval and portfolio statistics")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Annualized per-asset and portfolio statistics
    Stats {
        /// Ticker symbols (comma-separated)
        #[arg(short, long, value_delimiter = ',', required = true)]
        tickers: Vec<String>,
        /// Lookback window ("1mo", "1y", "5y", ...)
        #[arg(short, long, default_value = "5y")]
        period: String,
        /// Start date (YYYY-MM-DD); used with --end instead of --period
        #[arg(long, requires = "end")]
        start: Option<NaiveDate>,
        /// End date (YYYY-MM-DD, exclusive)
        #[arg(long, requires = "start")]
        end: Option<NaiveDate>,
        /// Portfolio weights (comma-separated; defaults to equal weights)
        #[arg(short, long, value_delimiter = ',')]
        weights: Option<Vec<f64>>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Pairwise return correlation matrix
    Correlation {
        /// Ticker symbols (comma-separated)
        #[arg(short, long, value_delimiter = ',', required = true)]
        tickers: Vec<String>,
        /// Lookback window ("1mo", "1y", "5y", ...)
        #[arg(short, long, default_value = "5y")]
        period: String,
    },
}

#[tokio::main]
async fn main() -> folio_core::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stats {
            tickers,
            period,
            start,
            end,
            weights,
            json,
        } => {
            let range = resolve_range(period, start, end);
            let prices = DataManager::new().download_data(&tickers, &range).await?;
            let returns = calculate_returns(&prices)?;

            let weights = weights.unwrap_or_else(|| {
                vec![1.0 / returns.column_count() as f64; returns.column_count()]
            });
            let stats = asset_statistics(&returns, TRADING_DAYS_PER_YEAR);

            let mut analyzer = PortfolioAnalyzer::new();
            analyzer.set_data(returns);
            let metrics = analyzer.calculate_portfolio_metrics(&weights)?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "assets": stats,
                        "weights": weights,
                        "portfolio": metrics,
                    }))
                    .unwrap_or_default()
                );
            } else {
                println!("Annualized statistics:");
                for stat in &stats {
                    println!(
                        "  {:<8} return {:>8.2}%   volatility {:>8.2}%",
                        stat.symbol, stat.annual_return_percent, stat.annual_volatility_percent
                    );
                }
                println!();
                println!(
                    "Portfolio expected return: {:>8.2}%",
                    metrics.expected_return * 100.0
                );
                println!(
                    "Portfolio volatility:      {:>8.2}%",
                    metrics.volatility * 100.0
                );
            }
        }
        Commands::Correlation { tickers, period } => {
            let prices = DataManager::new()
                .download_data(&tickers, &DateRange::Lookback(period))
                .await?;
            let returns = calculate_returns(&prices)?;
            print_correlation(&returns);
        }
    }

    Ok(())
}

fn resolve_range(period: String, start: Option<NaiveDate>, end: Option<NaiveDate>) -> DateRange {
    match (start, end) {
        (Some(start), Some(end)) => DateRange::Between { start, end },
        _ => DateRange::Lookback(period),
    }
}

/// Render the correlation matrix as an aligned terminal table.
fn print_correlation(returns: &ReturnsTable) {
    let corr = correlation_matrix(returns);

    print!("{:<8}", "");
    for symbol in returns.columns() {
        print!("{:>8}", symbol);
    }
    println!();

    for (i, symbol) in returns.columns().iter().enumerate() {
        print!("{:<8}", symbol);
        for value in &corr[i] {
            print!("{:>8.2}", value);
        }
        println!();
    }
}
