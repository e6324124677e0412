//! Chart planning — pure projection of enriched series into drawable lines.
//!
//! One symbol gets three charts (price with MA50, RSI, MACD with signal);
//! several symbols get five comparison charts, one per column, overlaying
//! every symbol on a shared date axis. NaN samples are dropped from a
//! line's points; a line with no defined samples at all is omitted.

use chrono::Datelike;
use marketscope_core::indicators::EnrichedSeries;
use marketscope_core::screen::SymbolResult;

/// One drawable line: name plus (x, y) points, x in days since CE so every
/// symbol shares the axis.
#[derive(Debug, Clone)]
pub struct ChartLine {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

/// One chart: title, lines, and the date labels for the x axis.
#[derive(Debug, Clone)]
pub struct ChartPlan {
    pub title: String,
    pub lines: Vec<ChartLine>,
    pub x_labels: (String, String),
}

impl ChartPlan {
    pub fn is_blank(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Build the chart set for a completed screen run.
pub fn build_plans(results: &[SymbolResult]) -> Vec<ChartPlan> {
    match results {
        [] => Vec::new(),
        [single] => single_symbol_plans(single),
        many => comparison_plans(many),
    }
}

fn date_x(date: chrono::NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

/// Project one column into a line, dropping NaN samples. Returns None when
/// the column has no defined values (entirely within warmup).
fn column_line(name: &str, series: &EnrichedSeries, values: &[f64]) -> Option<ChartLine> {
    let points: Vec<(f64, f64)> = series
        .bars
        .iter()
        .zip(values)
        .filter(|(_, v)| !v.is_nan())
        .map(|(bar, &v)| (date_x(bar.date), v))
        .collect();

    if points.is_empty() {
        return None;
    }
    Some(ChartLine {
        name: name.to_string(),
        points,
    })
}

fn date_labels(results: &[SymbolResult]) -> (String, String) {
    let first = results
        .iter()
        .filter_map(|r| r.series.bars.first())
        .map(|b| b.date)
        .min();
    let last = results
        .iter()
        .filter_map(|r| r.series.bars.last())
        .map(|b| b.date)
        .max();
    match (first, last) {
        (Some(a), Some(b)) => (a.to_string(), b.to_string()),
        _ => (String::new(), String::new()),
    }
}

fn single_symbol_plans(result: &SymbolResult) -> Vec<ChartPlan> {
    let series = &result.series;
    let label = &series.symbol.label;
    let closes = series.closes();
    let labels = date_labels(std::slice::from_ref(result));

    let plan = |title: String, lines: Vec<Option<ChartLine>>| ChartPlan {
        title,
        lines: lines.into_iter().flatten().collect(),
        x_labels: labels.clone(),
    };

    vec![
        plan(
            format!("{label} Price with 50-day MA"),
            vec![
                column_line("Close", series, &closes),
                column_line("MA50", series, &series.ma50),
            ],
        ),
        plan(
            format!("{label} RSI (14-day)"),
            vec![column_line("RSI", series, &series.rsi14)],
        ),
        plan(
            format!("{label} MACD with Signal Line"),
            vec![
                column_line("MACD", series, &series.macd),
                column_line("Signal", series, &series.macd_signal),
            ],
        ),
    ]
}

fn comparison_plans(results: &[SymbolResult]) -> Vec<ChartPlan> {
    let labels = date_labels(results);
    let columns: [(&str, fn(&SymbolResult) -> Vec<f64>); 5] = [
        ("Close", |r| r.series.closes()),
        ("MA50", |r| r.series.ma50.clone()),
        ("RSI", |r| r.series.rsi14.clone()),
        ("MACD", |r| r.series.macd.clone()),
        ("MACD Signal", |r| r.series.macd_signal.clone()),
    ];

    columns
        .into_iter()
        .map(|(name, column)| ChartPlan {
            title: format!("{name} Comparison"),
            lines: results
                .iter()
                .filter_map(|r| {
                    column_line(&r.series.symbol.label, &r.series, &column(r))
                })
                .collect(),
            x_labels: labels.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use marketscope_core::domain::{Bar, FundamentalsSnapshot, Symbol};
    use marketscope_core::indicators::enrich;

    fn result_with_bars(ticker: &str, n: usize) -> SymbolResult {
        let base = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let bars: Vec<Bar> = (0..n)
            .map(|i| {
                let close = 100.0 + ((i * 13) % 17) as f64;
                Bar {
                    symbol: ticker.to_string(),
                    date: base + Duration::days(i as i64),
                    open: close,
                    high: close + 1.0,
                    low: close - 1.0,
                    close,
                    volume: 1000,
                    adj_close: close,
                }
            })
            .collect();
        SymbolResult {
            series: enrich(Symbol::new(ticker), bars),
            fundamentals: FundamentalsSnapshot::unavailable(),
        }
    }

    #[test]
    fn no_results_means_no_charts() {
        assert!(build_plans(&[]).is_empty());
    }

    #[test]
    fn single_symbol_gets_three_charts_with_2_1_2_lines() {
        let plans = build_plans(&[result_with_bars("RELIANCE.NS", 120)]);
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].lines.len(), 2);
        assert_eq!(plans[1].lines.len(), 1);
        assert_eq!(plans[2].lines.len(), 2);
        assert!(plans[0].title.contains("RELIANCE"));
    }

    #[test]
    fn two_symbols_get_five_charts_with_two_lines_each() {
        let plans = build_plans(&[
            result_with_bars("TCS.NS", 120),
            result_with_bars("INFY.NS", 120),
        ]);
        assert_eq!(plans.len(), 5);
        for plan in &plans {
            assert_eq!(plan.lines.len(), 2, "chart {} line count", plan.title);
        }
        assert_eq!(plans[0].title, "Close Comparison");
        assert_eq!(plans[4].title, "MACD Signal Comparison");
    }

    #[test]
    fn under_fifty_bars_drops_the_ma50_line_without_panicking() {
        let plans = build_plans(&[result_with_bars("ONGC.NS", 30)]);
        assert_eq!(plans.len(), 3);
        // price chart keeps only the close line
        assert_eq!(plans[0].lines.len(), 1);
        assert_eq!(plans[0].lines[0].name, "Close");
    }

    #[test]
    fn nan_samples_are_dropped_from_points() {
        let r = result_with_bars("GAIL.NS", 60);
        let plans = build_plans(&[r.clone()]);
        let ma_line = plans[0]
            .lines
            .iter()
            .find(|l| l.name == "MA50")
            .expect("MA50 line present for 60 bars");
        // 60 bars minus 49 warmup samples
        assert_eq!(ma_line.points.len(), 11);
        assert!(ma_line.points.iter().all(|(_, y)| !y.is_nan()));
    }

    #[test]
    fn comparison_axis_is_shared() {
        let plans = build_plans(&[
            result_with_bars("TCS.NS", 120),
            result_with_bars("INFY.NS", 120),
        ]);
        let close = &plans[0];
        let xs0: Vec<f64> = close.lines[0].points.iter().map(|p| p.0).collect();
        let xs1: Vec<f64> = close.lines[1].points.iter().map(|p| p.0).collect();
        assert_eq!(xs0, xs1);
    }
}
