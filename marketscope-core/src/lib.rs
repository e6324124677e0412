//! MarketScope Core — sector screener engine.
//!
//! This crate contains everything below the presentation layer:
//! - Domain types (bars, symbols, fundamentals snapshots)
//! - Sector catalog with the built-in NSE sector lists
//! - Selection resolution (sector mode / individual picks, capped at 10)
//! - Data provider trait with Yahoo Finance and synthetic implementations
//! - Indicator computation (MA50, RSI-14, MACD 12/26/9) with NaN warmup
//! - Screen pipeline: fetch → enrich → format, one pass per request
//! - Display formatting (INR grouping, market-cap scaling, N/A handling)

pub mod data;
pub mod domain;
pub mod indicators;
pub mod report;
pub mod screen;
pub mod select;
