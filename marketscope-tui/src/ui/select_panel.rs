//! Panel 1 — Select: sector/ticker tree with the current selection.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use marketscope_core::select::MAX_PICKS;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let select = &app.select;
    let mut lines: Vec<Line> = Vec::new();

    // Header: current selection mode.
    let mode = match &select.sector_mode {
        Some(sector) => Span::styled(format!("Sector: {sector} (picks locked)"), theme::accent()),
        None => Span::styled(
            format!("Picks: {}/{MAX_PICKS}", select.picks.len()),
            theme::accent(),
        ),
    };
    let source = if select.offline {
        Span::styled("  offline", theme::warning())
    } else {
        Span::styled("  yahoo", theme::muted())
    };
    lines.push(Line::from(vec![
        mode,
        source,
        Span::styled(
            "  [Space]pick [Enter]sector [c]lear [o]ffline [r]un",
            theme::muted(),
        ),
    ]));
    lines.push(Line::from(""));

    // Fetch progress.
    if app.fetch_in_progress {
        let sym = app.fetch_current.as_deref().unwrap_or("...");
        lines.push(Line::from(vec![
            Span::styled("Fetching ", theme::warning()),
            Span::styled(sym, theme::accent()),
            Span::styled(
                format!("... [{}/{}]", app.fetch_done + 1, app.fetch_total),
                theme::muted(),
            ),
        ]));
        lines.push(Line::from(""));
    }

    // Tree view.
    let mut row = 0usize;
    for sector in select.catalog.sector_names() {
        let is_expanded = select.expanded.contains(sector);
        let is_cursor = row == select.cursor;
        let is_sector_mode = select.sector_mode.as_deref() == Some(sector);

        let tickers = select.catalog.sector_tickers(sector).unwrap_or(&[]);
        let picked = if is_sector_mode {
            tickers.len()
        } else {
            tickers.iter().filter(|t| select.picks.contains(*t)).count()
        };

        let arrow = if is_expanded { "\u{25be}" } else { "\u{25b8}" };
        let marker = if is_sector_mode { " \u{25cf}" } else { "" };
        let label = format!("{arrow} {sector} ({picked}/{}){marker}", tickers.len());

        let style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else if is_sector_mode {
            theme::positive()
        } else {
            theme::neutral()
        };
        lines.push(Line::from(Span::styled(label, style)));
        row += 1;

        if is_expanded {
            for ticker in tickers {
                let is_cursor = row == select.cursor;
                // Sector mode pre-fills its own tickers and locks the rest.
                let is_picked = if select.sector_mode.is_some() {
                    is_sector_mode
                } else {
                    select.picks.contains(ticker)
                };
                let locked = select.sector_mode.is_some();

                let check = if is_picked { "[x]" } else { "[ ]" };
                let ticker_style = if is_cursor {
                    theme::accent().add_modifier(Modifier::REVERSED)
                } else if locked {
                    theme::muted()
                } else if is_picked {
                    theme::accent()
                } else {
                    theme::muted()
                };

                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::raw(check),
                    Span::raw(" "),
                    Span::styled(ticker.as_str(), ticker_style),
                ]));
                row += 1;
            }
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}
