//! Panel 4 — Help: keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let entries: [(&str, &str); 13] = [
        ("1-4 / Tab", "switch panel"),
        ("j / k", "move cursor in the tree"),
        ("Space", "toggle a stock pick (max 10) / fold a sector"),
        ("Enter", "toggle sector mode (locks individual picks)"),
        ("c", "clear the selection"),
        ("o", "toggle offline synthetic data"),
        ("r", "run the screen for the current selection"),
        ("[ / ]", "previous / next chart"),
        ("e", "error history overlay"),
        ("q", "quit"),
        ("", ""),
        ("MARKETSCOPE_CATALOG", "path to a sector catalog TOML file"),
        ("MARKETSCOPE_OFFLINE=1", "start in offline mode"),
    ];

    let mut lines = vec![Line::from(Span::styled("Keys", theme::accent())), Line::from("")];
    for (key, desc) in entries {
        if key.is_empty() {
            lines.push(Line::from(""));
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:22}"), theme::accent()),
            Span::styled(desc, theme::muted()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Prices in INR; N/A marks values the provider did not report.",
        theme::muted(),
    )));
    lines.push(Line::from(Span::styled(
        "Charts cover one year of daily history with MA50, RSI-14 and MACD.",
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines), area);
}
