//! Centered overlays — welcome screen and error history.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

pub fn render_welcome(f: &mut Frame, area: Rect) {
    let rect = centered_rect(60, 50, area);
    f.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" MarketScope ")
        .title_style(theme::panel_title(true));
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Sector screener: pick up to 10 stocks or one sector,",
            theme::neutral(),
        )),
        Line::from(Span::styled(
            "then press r to fetch a year of history and fundamentals.",
            theme::neutral(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "The table shows price and fundamentals; the chart panel",
            theme::neutral(),
        )),
        Line::from(Span::styled(
            "shows MA50, RSI and MACD lines per symbol or compared.",
            theme::neutral(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to start.", theme::accent())),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let rect = centered_rect(70, 60, area);
    f.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" Errors ({}) ", app.error_history.len()))
        .title_style(theme::panel_title(true));
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    if app.error_history.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("No errors recorded.", theme::muted())),
        ];
        f.render_widget(Paragraph::new(lines), inner);
        return;
    }

    let visible = inner.height as usize;
    let lines: Vec<Line> = app
        .error_history
        .iter()
        .skip(app.error_scroll)
        .take(visible)
        .map(|rec| {
            Line::from(vec![
                Span::styled(rec.timestamp.format("%H:%M:%S ").to_string(), theme::muted()),
                Span::styled(format!("[{}] ", rec.category.label()), theme::warning()),
                Span::styled(rec.context.as_str(), theme::accent()),
                Span::raw(" "),
                Span::styled(rec.message.as_str(), theme::negative()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}
