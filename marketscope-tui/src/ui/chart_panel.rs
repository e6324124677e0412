//! Panel 3 — Charts: indicator line charts for the last screen run.
//!
//! One chart is on screen at a time; [ and ] cycle through the plan.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::chart_plan::ChartPlan;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if app.charts.is_empty() {
        render_empty(f, area);
        return;
    }

    let idx = app.active_chart.min(app.charts.len() - 1);
    let plan = &app.charts[idx];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let header = Line::from(vec![
        Span::styled(plan.title.as_str(), theme::accent()),
        Span::styled(
            format!("  ({}/{})  [ ] to cycle", idx + 1, app.charts.len()),
            theme::muted(),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    if plan.is_blank() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No defined values for this chart (not enough history).",
            theme::muted(),
        )));
        f.render_widget(msg, chunks[1]);
        return;
    }

    render_chart(f, chunks[1], plan);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Run a screen to see charts: one symbol gives price/RSI/MACD,",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "several symbols give five comparison charts.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_chart(f: &mut Frame, area: Rect, plan: &ChartPlan) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for line in &plan.lines {
        for &(x, y) in &line.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    let padding = (y_max - y_min).abs() * 0.05;
    let y_lo = y_min - padding;
    let y_hi = y_max + padding;

    let datasets: Vec<Dataset> = plan
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            Dataset::default()
                .name(line.name.as_str())
                .marker(symbols::Marker::Braille)
                .style(Style::default().fg(theme::series_color(i)))
                .graph_type(GraphType::Line)
                .data(&line.points)
        })
        .collect();

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(Span::styled("Date", theme::muted()))
                .style(theme::muted())
                .bounds([x_min, x_max.max(x_min + 1.0)])
                .labels(vec![
                    Span::styled(plan.x_labels.0.clone(), theme::muted()),
                    Span::styled(plan.x_labels.1.clone(), theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Value", theme::muted()))
                .style(theme::muted())
                .bounds([y_lo, y_hi])
                .labels(vec![
                    Span::styled(format!("{y_lo:.2}"), theme::muted()),
                    Span::styled(format!("{y_hi:.2}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}
