//! Panel 2 — Table: fundamentals summary for the last screen run.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use marketscope_core::report::DisplayRow;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if app.rows.is_empty() {
        render_empty(f, area, app);
        return;
    }

    let notice_height = if app.skipped.is_empty() {
        0
    } else {
        (app.skipped.len() as u16).min(4) + 1
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(notice_height)])
        .split(area);

    render_table(f, chunks[0], app);
    if notice_height > 0 {
        render_notices(f, chunks[1], app);
    }
}

fn render_empty(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No screen results yet. Pick stocks in Select (press 1) and press r.",
            theme::muted(),
        )),
    ];
    for skip in &app.skipped {
        lines.push(Line::from(Span::styled(
            format!("skipped {}: {}", skip.symbol.ticker, skip.reason),
            theme::negative(),
        )));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn render_table(f: &mut Frame, area: Rect, app: &AppState) {
    let header = Row::new(
        DisplayRow::HEADERS
            .iter()
            .map(|h| Cell::from(*h))
            .collect::<Vec<_>>(),
    )
    .style(theme::header());

    let rows: Vec<Row> = app
        .rows
        .iter()
        .map(|r| {
            Row::new(
                r.cells()
                    .into_iter()
                    .map(Cell::from)
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let widths = [
        Constraint::Length(4),  // S.No
        Constraint::Length(12), // Stock
        Constraint::Length(13), // Price
        Constraint::Length(12), // Market Cap
        Constraint::Length(9),  // P/E
        Constraint::Length(9),  // Div Yield
        Constraint::Length(14), // 52W High
        Constraint::Length(14), // 52W Low
        Constraint::Length(9),  // EPS
    ];

    let table = Table::new(rows, widths).header(header).column_spacing(1);
    f.render_widget(table, area);
}

fn render_notices(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines = vec![Line::from(Span::styled(
        format!("{} symbol(s) skipped:", app.skipped.len()),
        theme::warning(),
    ))];
    for skip in app.skipped.iter().take(4) {
        lines.push(Line::from(Span::styled(
            format!("  {}: {}", skip.symbol.ticker, skip.reason),
            theme::negative(),
        )));
    }
    f.render_widget(Paragraph::new(lines), area);
}
