//! Summary table — formatted rows projected from fundamentals + latest price.

use super::format;
use crate::domain::FundamentalsSnapshot;

/// One formatted table row. All cells are display-ready strings; fields
/// the provider did not report hold the unavailable marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub serial: usize,
    pub stock: String,
    pub price: String,
    pub market_cap: String,
    pub pe: String,
    pub div_yield: String,
    pub week52_high: String,
    pub week52_low: String,
    pub eps: String,
}

impl DisplayRow {
    /// Build a row for one surviving symbol. `serial` is 1-based in
    /// selection order over surviving symbols.
    pub fn build(
        serial: usize,
        label: &str,
        latest_close: Option<f64>,
        fundamentals: &FundamentalsSnapshot,
    ) -> Self {
        Self {
            serial,
            stock: label.to_string(),
            price: format::currency(latest_close),
            market_cap: format::market_cap(fundamentals.market_cap),
            pe: format::number(fundamentals.trailing_pe),
            div_yield: format::percent(fundamentals.dividend_yield),
            week52_high: format::currency(fundamentals.fifty_two_week_high),
            week52_low: format::currency(fundamentals.fifty_two_week_low),
            eps: format::number(fundamentals.trailing_eps),
        }
    }

    pub const HEADERS: [&'static str; 9] = [
        "S.No",
        "Stock",
        "Price (\u{20b9})",
        "Market Cap",
        "P/E",
        "Div Yield",
        "52W High (\u{20b9})",
        "52W Low (\u{20b9})",
        "EPS",
    ];

    /// Cells in header order.
    pub fn cells(&self) -> [String; 9] {
        [
            self.serial.to_string(),
            self.stock.clone(),
            self.price.clone(),
            self.market_cap.clone(),
            self.pe.clone(),
            self.div_yield.clone(),
            self.week52_high.clone(),
            self.week52_low.clone(),
            self.eps.clone(),
        ]
    }
}

/// Render rows as an aligned plain-text table for terminal output.
pub fn render_text(rows: &[DisplayRow]) -> String {
    let mut widths: Vec<usize> = DisplayRow::HEADERS
        .iter()
        .map(|h| h.chars().count())
        .collect();
    let all_cells: Vec<[String; 9]> = rows.iter().map(DisplayRow::cells).collect();
    for cells in &all_cells {
        for (w, cell) in widths.iter_mut().zip(cells.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: &[String]| {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| {
                let pad = w - cell.chars().count();
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    };

    let headers: Vec<String> = DisplayRow::HEADERS.iter().map(|h| h.to_string()).collect();
    push_line(&headers);
    for cells in &all_cells {
        push_line(cells);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_snapshot() -> FundamentalsSnapshot {
        FundamentalsSnapshot {
            market_cap: Some(2.3e9),
            trailing_pe: Some(24.5),
            dividend_yield: Some(0.0123),
            fifty_two_week_high: Some(3024.9),
            fifty_two_week_low: Some(2221.05),
            trailing_eps: Some(98.6),
        }
    }

    #[test]
    fn row_formats_every_field() {
        let row = DisplayRow::build(1, "RELIANCE", Some(2945.1), &full_snapshot());
        assert_eq!(row.stock, "RELIANCE");
        assert_eq!(row.price, "\u{20b9}2,945.10");
        assert_eq!(row.market_cap, "\u{20b9}2.30B");
        assert_eq!(row.pe, "24.50");
        assert_eq!(row.div_yield, "1.23%");
        assert_eq!(row.week52_high, "\u{20b9}3,024.90");
        assert_eq!(row.week52_low, "\u{20b9}2,221.05");
        assert_eq!(row.eps, "98.60");
    }

    #[test]
    fn unavailable_snapshot_renders_markers() {
        let row = DisplayRow::build(3, "ONGC", Some(240.0), &FundamentalsSnapshot::unavailable());
        assert_eq!(row.market_cap, "N/A");
        assert_eq!(row.pe, "N/A");
        assert_eq!(row.div_yield, "N/A");
        assert_eq!(row.eps, "N/A");
        // price came from history, not fundamentals
        assert_eq!(row.price, "\u{20b9}240.00");
    }

    #[test]
    fn text_table_has_header_and_one_line_per_row() {
        let rows = vec![
            DisplayRow::build(1, "TCS", Some(4100.0), &full_snapshot()),
            DisplayRow::build(2, "INFY", Some(1600.0), &FundamentalsSnapshot::unavailable()),
        ];
        let text = render_text(&rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("S.No"));
        assert!(lines[1].contains("TCS"));
        assert!(lines[2].contains("N/A"));
    }
}
