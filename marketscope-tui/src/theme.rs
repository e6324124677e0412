//! Neon-on-dark color tokens for the dashboard.

use ratatui::style::{Color, Modifier, Style};

/// Electric cyan (focus, highlights).
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
/// Neon green (success, fetched symbols).
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
/// Hot pink (errors, skipped symbols).
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
/// Neon orange (warnings, in-progress fetches).
pub const WARNING: Color = Color::Rgb(255, 140, 0);
/// Cool purple (secondary info).
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
/// Steel blue (muted text, disabled rows).
pub const MUTED: Color = Color::Rgb(100, 149, 237);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn header() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    }
}

/// Distinct colors for overlaid chart lines, cycled by series index.
const SERIES_PALETTE: [Color; 6] = [ACCENT, POSITIVE, WARNING, NEUTRAL, NEGATIVE, MUTED];

pub fn series_color(index: usize) -> Color {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_colors_cycle() {
        assert_eq!(series_color(0), series_color(SERIES_PALETTE.len()));
        assert_ne!(series_color(0), series_color(1));
    }
}
