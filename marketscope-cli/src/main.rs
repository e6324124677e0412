//! MarketScope CLI — run the screener from the terminal.
//!
//! Commands:
//! - `screen` — fetch, enrich, and print the summary table for a sector or
//!   an explicit symbol list
//! - `sectors` — list the catalog's sectors and tickers

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use marketscope_core::data::{
    QuoteProvider, SectorCatalog, StdoutProgress, SyntheticProvider, YahooProvider,
};
use marketscope_core::report::{format, render_text};
use marketscope_core::screen::{run_screen, trailing_year, ScreenReport};
use marketscope_core::select::{resolve, Selection};

#[derive(Parser)]
#[command(name = "marketscope", about = "MarketScope CLI — sector stock screener")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one year of history plus fundamentals and print the table.
    Screen {
        /// Symbols to screen (e.g., RELIANCE.NS TCS.NS). Max 10.
        symbols: Vec<String>,

        /// Screen an entire catalog sector instead of explicit symbols.
        #[arg(long, conflicts_with = "symbols")]
        sector: Option<String>,

        /// Path to a sector catalog TOML file. Defaults to the built-in
        /// NSE lists.
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Use deterministic synthetic data instead of Yahoo Finance.
        #[arg(long, default_value_t = false)]
        synthetic: bool,

        /// End date of the one-year window (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        end: Option<String>,
    },
    /// List the catalog's sectors and their tickers.
    Sectors {
        /// Path to a sector catalog TOML file.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Screen {
            symbols,
            sector,
            catalog,
            synthetic,
            end,
        } => run_screen_cmd(symbols, sector, catalog, synthetic, end),
        Commands::Sectors { catalog } => run_sectors_cmd(catalog),
    }
}

fn load_catalog(path: Option<PathBuf>) -> Result<SectorCatalog> {
    match path {
        Some(p) => SectorCatalog::from_file(&p)
            .map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("loading catalog from {}", p.display())),
        None => Ok(SectorCatalog::default_nse()),
    }
}

fn parse_end_date(end: Option<String>) -> Result<NaiveDate> {
    match end {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .with_context(|| format!("invalid end date: {s}")),
        None => Ok(Local::now().date_naive()),
    }
}

fn run_screen_cmd(
    symbols: Vec<String>,
    sector: Option<String>,
    catalog: Option<PathBuf>,
    synthetic: bool,
    end: Option<String>,
) -> Result<()> {
    let catalog = load_catalog(catalog)?;

    let selection = match sector {
        Some(name) => Selection::Sector(name),
        None => Selection::Symbols(symbols),
    };
    let resolved = resolve(&selection, &catalog).map_err(|e| anyhow::anyhow!(e))?;

    let provider: Box<dyn QuoteProvider> = if synthetic {
        Box::new(SyntheticProvider::new())
    } else {
        Box::new(YahooProvider::new().map_err(|e| anyhow::anyhow!(e.to_string()))?)
    };

    let (start, end) = trailing_year(parse_end_date(end)?);
    let report = run_screen(provider.as_ref(), &resolved, start, end, &StdoutProgress);

    if report.is_empty() {
        bail!("no data for any selected symbol");
    }

    println!();
    print!("{}", render_text(&report.rows()));
    print_indicator_summary(&report);

    println!("\nNote: prices in INR. N/A marks values the provider did not report.");
    Ok(())
}

/// Latest indicator readings, one line per surviving symbol.
fn print_indicator_summary(report: &ScreenReport) {
    println!("\nLatest indicators:");
    for result in &report.results {
        let series = &result.series;
        let last = series.len().saturating_sub(1);
        let (ma, rsi, macd, signal) = if series.is_empty() {
            (f64::NAN, f64::NAN, f64::NAN, f64::NAN)
        } else {
            (
                series.ma50[last],
                series.rsi14[last],
                series.macd[last],
                series.macd_signal[last],
            )
        };
        println!(
            "  {:12} MA50 {}  RSI {}  MACD {} / {}",
            series.symbol.label,
            format::series_value(ma),
            format::series_value(rsi),
            format::series_value(macd),
            format::series_value(signal),
        );
    }
}

fn run_sectors_cmd(catalog: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    for sector in catalog.sector_names() {
        let tickers = catalog.sector_tickers(sector).unwrap_or(&[]);
        println!("{sector} ({})", tickers.len());
        for ticker in tickers {
            println!("  {ticker}");
        }
    }
    println!("\n{} tickers across {} sectors", catalog.ticker_count(), catalog.sector_names().len());
    Ok(())
}
