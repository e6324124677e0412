//! Yahoo Finance quote provider.
//!
//! History comes from the v8 chart API, fundamentals from the v10
//! quoteSummary API. One request per call, no retry layer: a failed request
//! becomes a per-symbol skip upstream.
//!
//! Yahoo Finance has no official API and is subject to unannounced format
//! changes; parse failures surface as `DataError::ResponseFormatChanged`.

use super::provider::{DataError, QuoteProvider};
use crate::domain::{Bar, FundamentalsSnapshot};
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;

// ---- v8 chart response ----

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<QuoteColumns>,
    adjclose: Option<Vec<AdjCloseColumn>>,
}

#[derive(Debug, Deserialize)]
struct QuoteColumns {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseColumn {
    adjclose: Vec<Option<f64>>,
}

// ---- v10 quoteSummary response ----

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: SummaryResult,
}

#[derive(Debug, Deserialize)]
struct SummaryResult {
    result: Option<Vec<SummaryModules>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct SummaryModules {
    price: Option<PriceModule>,
    #[serde(rename = "summaryDetail")]
    summary_detail: Option<SummaryDetailModule>,
    #[serde(rename = "defaultKeyStatistics")]
    key_statistics: Option<KeyStatisticsModule>,
}

#[derive(Debug, Deserialize)]
struct PriceModule {
    #[serde(rename = "marketCap")]
    market_cap: Option<RawNum>,
}

#[derive(Debug, Deserialize)]
struct SummaryDetailModule {
    #[serde(rename = "trailingPE")]
    trailing_pe: Option<RawNum>,
    #[serde(rename = "dividendYield")]
    dividend_yield: Option<RawNum>,
    #[serde(rename = "fiftyTwoWeekHigh")]
    fifty_two_week_high: Option<RawNum>,
    #[serde(rename = "fiftyTwoWeekLow")]
    fifty_two_week_low: Option<RawNum>,
}

#[derive(Debug, Deserialize)]
struct KeyStatisticsModule {
    #[serde(rename = "trailingEps")]
    trailing_eps: Option<RawNum>,
}

/// Yahoo wraps numeric fields as `{"raw": 1.23, "fmt": "1.23"}`.
#[derive(Debug, Default, Deserialize)]
struct RawNum {
    raw: Option<f64>,
}

impl RawNum {
    fn value(field: Option<Self>) -> Option<f64> {
        field.and_then(|n| n.raw)
    }
}

/// Yahoo Finance provider: v8 chart for history, v10 quoteSummary for
/// fundamentals.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
}

impl YahooProvider {
    pub fn new() -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .map_err(|e| DataError::Other(format!("build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    fn chart_url(symbol: &str, start: NaiveDate, end: NaiveDate) -> String {
        let start_ts = start
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or(0);
        let end_ts = end
            .and_hms_opt(23, 59, 59)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or(0);
        format!(
            "https://query2.finance.yahoo.com/v8/finance/chart/{symbol}\
             ?period1={start_ts}&period2={end_ts}&interval=1d\
             &includeAdjustedClose=true"
        )
    }

    fn summary_url(symbol: &str) -> String {
        format!(
            "https://query2.finance.yahoo.com/v10/finance/quoteSummary/{symbol}\
             ?modules=price,summaryDetail,defaultKeyStatistics"
        )
    }

    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        symbol: &str,
    ) -> Result<T, DataError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| DataError::NetworkUnreachable(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DataError::SymbolNotFound {
                symbol: symbol.to_string(),
            });
        }
        if !status.is_success() {
            return Err(DataError::HttpStatus {
                status: status.as_u16(),
                symbol: symbol.to_string(),
            });
        }

        resp.json().map_err(|e| {
            DataError::ResponseFormatChanged(format!("parse response for {symbol}: {e}"))
        })
    }

    fn parse_chart(symbol: &str, resp: ChartResponse) -> Result<Vec<Bar>, DataError> {
        let result = resp.chart.result.ok_or_else(|| {
            if let Some(err) = resp.chart.error {
                if err.code == "Not Found" {
                    DataError::SymbolNotFound {
                        symbol: symbol.to_string(),
                    }
                } else {
                    DataError::ResponseFormatChanged(format!("{}: {}", err.code, err.description))
                }
            } else {
                DataError::ResponseFormatChanged("empty result with no error".into())
            }
        })?;

        let data = result
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("result array is empty".into()))?;

        let timestamps = data
            .timestamp
            .ok_or_else(|| DataError::ResponseFormatChanged("no timestamps".into()))?;

        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("no quote data".into()))?;

        let adj_closes = data
            .indicators
            .adjclose
            .and_then(|v| v.into_iter().next())
            .map(|a| a.adjclose);

        let mut bars = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let date = chrono::DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.naive_utc().date())
                .ok_or_else(|| {
                    DataError::ResponseFormatChanged(format!("invalid timestamp: {ts}"))
                })?;

            let open = quote.open.get(i).copied().flatten();
            let high = quote.high.get(i).copied().flatten();
            let low = quote.low.get(i).copied().flatten();
            let close = quote.close.get(i).copied().flatten();
            let volume = quote.volume.get(i).copied().flatten();
            let adj_close = adj_closes.as_ref().and_then(|v| v.get(i).copied().flatten());

            // All-None rows are holidays / non-trading sessions.
            if open.is_none()
                && high.is_none()
                && low.is_none()
                && close.is_none()
                && volume.is_none()
            {
                continue;
            }

            bars.push(Bar {
                symbol: symbol.to_string(),
                date,
                open: open.unwrap_or(f64::NAN),
                high: high.unwrap_or(f64::NAN),
                low: low.unwrap_or(f64::NAN),
                close: close.unwrap_or(f64::NAN),
                volume: volume.unwrap_or(0),
                adj_close: adj_close.unwrap_or(f64::NAN),
            });
        }

        if bars.is_empty() {
            return Err(DataError::EmptyHistory {
                symbol: symbol.to_string(),
            });
        }

        Ok(bars)
    }

    fn parse_summary(symbol: &str, resp: SummaryResponse) -> Result<FundamentalsSnapshot, DataError> {
        let result = resp.quote_summary.result.ok_or_else(|| {
            if let Some(err) = resp.quote_summary.error {
                DataError::ResponseFormatChanged(format!("{}: {}", err.code, err.description))
            } else {
                DataError::SymbolNotFound {
                    symbol: symbol.to_string(),
                }
            }
        })?;

        let modules = result
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("result array is empty".into()))?;

        let detail = modules.summary_detail;
        let (trailing_pe, dividend_yield, high, low) = match detail {
            Some(d) => (
                RawNum::value(d.trailing_pe),
                RawNum::value(d.dividend_yield),
                RawNum::value(d.fifty_two_week_high),
                RawNum::value(d.fifty_two_week_low),
            ),
            None => (None, None, None, None),
        };

        Ok(FundamentalsSnapshot {
            market_cap: modules.price.and_then(|p| RawNum::value(p.market_cap)),
            trailing_pe,
            dividend_yield,
            fifty_two_week_high: high,
            fifty_two_week_low: low,
            trailing_eps: modules
                .key_statistics
                .and_then(|k| RawNum::value(k.trailing_eps)),
        })
    }
}

impl QuoteProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, DataError> {
        let url = Self::chart_url(symbol, start, end);
        let chart: ChartResponse = self.get_json(&url, symbol)?;
        Self::parse_chart(symbol, chart)
    }

    fn fundamentals(&self, symbol: &str) -> Result<FundamentalsSnapshot, DataError> {
        let url = Self::summary_url(symbol);
        let summary: SummaryResponse = self.get_json(&url, symbol)?;
        Self::parse_summary(symbol, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_url_covers_full_days() {
        let start = NaiveDate::from_ymd_opt(2024, 8, 7).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
        let url = YahooProvider::chart_url("TCS.NS", start, end);
        assert!(url.contains("/v8/finance/chart/TCS.NS"));
        assert!(url.contains("interval=1d"));
        assert!(url.contains("includeAdjustedClose=true"));
    }

    #[test]
    fn parses_chart_rows_and_skips_holidays() {
        let json = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1722816000, 1722902400, 1722988800],
                    "indicators": {
                        "quote": [{
                            "open":   [100.0, null, 102.0],
                            "high":   [105.0, null, 106.0],
                            "low":    [99.0,  null, 101.0],
                            "close":  [103.0, null, 104.0],
                            "volume": [1000,  null, 1200]
                        }],
                        "adjclose": [{"adjclose": [103.0, null, 104.0]}]
                    }
                }],
                "error": null
            }
        }"#;
        let resp: ChartResponse = serde_json::from_str(json).unwrap();
        let bars = YahooProvider::parse_chart("TEST.NS", resp).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].close, 103.0);
        assert_eq!(bars[1].close, 104.0);
        assert!(bars[0].date < bars[1].date);
    }

    #[test]
    fn partial_row_fills_nan_not_zero() {
        let json = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1722816000],
                    "indicators": {
                        "quote": [{
                            "open":   [null],
                            "high":   [105.0],
                            "low":    [99.0],
                            "close":  [103.0],
                            "volume": [1000]
                        }]
                    }
                }],
                "error": null
            }
        }"#;
        let resp: ChartResponse = serde_json::from_str(json).unwrap();
        let bars = YahooProvider::parse_chart("TEST.NS", resp).unwrap();
        assert!(bars[0].open.is_nan());
        assert!(bars[0].adj_close.is_nan());
    }

    #[test]
    fn chart_not_found_maps_to_symbol_not_found() {
        let json = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found"}
            }
        }"#;
        let resp: ChartResponse = serde_json::from_str(json).unwrap();
        let err = YahooProvider::parse_chart("NOPE.NS", resp).unwrap_err();
        assert!(matches!(err, DataError::SymbolNotFound { .. }));
    }

    #[test]
    fn parses_summary_raw_fields() {
        let json = r#"{
            "quoteSummary": {
                "result": [{
                    "price": {"marketCap": {"raw": 1.5e12, "fmt": "1.5T"}},
                    "summaryDetail": {
                        "trailingPE": {"raw": 24.5, "fmt": "24.50"},
                        "dividendYield": {"raw": 0.0123, "fmt": "1.23%"},
                        "fiftyTwoWeekHigh": {"raw": 3024.9, "fmt": "3,024.90"},
                        "fiftyTwoWeekLow": {"raw": 2221.05, "fmt": "2,221.05"}
                    },
                    "defaultKeyStatistics": {
                        "trailingEps": {"raw": 98.6, "fmt": "98.60"}
                    }
                }],
                "error": null
            }
        }"#;
        let resp: SummaryResponse = serde_json::from_str(json).unwrap();
        let snap = YahooProvider::parse_summary("TEST.NS", resp).unwrap();
        assert_eq!(snap.market_cap, Some(1.5e12));
        assert_eq!(snap.trailing_pe, Some(24.5));
        assert_eq!(snap.dividend_yield, Some(0.0123));
        assert_eq!(snap.trailing_eps, Some(98.6));
    }

    #[test]
    fn missing_summary_modules_become_none() {
        let json = r#"{
            "quoteSummary": {
                "result": [{"price": {"marketCap": null}}],
                "error": null
            }
        }"#;
        let resp: SummaryResponse = serde_json::from_str(json).unwrap();
        let snap = YahooProvider::parse_summary("TEST.NS", resp).unwrap();
        assert!(snap.is_empty());
    }
}
