//! Keyboard input dispatch — overlays first, then global keys, then the
//! active panel's handler.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, Panel, TreeItem};

/// Handle a key event, mutating app state.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Windows sends both Press and Release; act on Press only.
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => {
            app.active_panel = Panel::Select;
            return;
        }
        KeyCode::Char('2') => {
            app.active_panel = Panel::Table;
            return;
        }
        KeyCode::Char('3') => {
            app.active_panel = Panel::Charts;
            return;
        }
        KeyCode::Char('4') => {
            app.active_panel = Panel::Help;
            return;
        }
        KeyCode::Char('e') => {
            app.overlay = Overlay::ErrorHistory;
            app.error_scroll = 0;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Select => handle_select_key(app, key),
        Panel::Table => {}
        Panel::Charts => handle_charts_key(app, key),
        Panel::Help => {}
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_select_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let max = app.select.visible_row_count().saturating_sub(1);
            if app.select.cursor < max {
                app.select.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select.cursor = app.select.cursor.saturating_sub(1);
        }
        KeyCode::Char(' ') => match app.select.cursor_item() {
            Some(TreeItem::Ticker(_, ticker)) => {
                if let Err(msg) = app.select.toggle_pick(&ticker) {
                    app.set_warning(msg);
                }
            }
            Some(TreeItem::Sector(sector)) => {
                // Space on a sector row folds it in and out.
                if !app.select.expanded.remove(&sector) {
                    app.select.expanded.insert(sector);
                }
            }
            None => {}
        },
        KeyCode::Enter => {
            if let Some(TreeItem::Sector(sector)) = app.select.cursor_item() {
                app.select.toggle_sector(&sector);
                match &app.select.sector_mode {
                    Some(s) => app.set_status(format!("sector mode: {s} (picks locked)")),
                    None => app.set_status("sector mode cleared"),
                }
            }
        }
        KeyCode::Char('c') => {
            app.select.clear();
            app.set_status("selection cleared");
        }
        KeyCode::Char('o') => {
            app.select.offline = !app.select.offline;
            let mode = if app.select.offline {
                "offline (synthetic data)"
            } else {
                "online (Yahoo Finance)"
            };
            app.set_status(format!("data source: {mode}"));
        }
        KeyCode::Char('r') => app.start_screen(),
        _ => {}
    }
}

fn handle_charts_key(app: &mut AppState, key: KeyEvent) {
    let n = app.charts.len();
    if n == 0 {
        return;
    }
    match key.code {
        KeyCode::Char(']') | KeyCode::Char('l') | KeyCode::Right => {
            app.active_chart = (app.active_chart + 1) % n;
        }
        KeyCode::Char('[') | KeyCode::Char('h') | KeyCode::Left => {
            app.active_chart = (app.active_chart + n - 1) % n;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::make_test_app;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn first_key_dismisses_welcome() {
        let mut app = make_test_app();
        assert_eq!(app.overlay, Overlay::Welcome);
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert_eq!(app.overlay, Overlay::None);
        // the key was consumed by the overlay, not the select panel
        assert!(!app.fetch_in_progress);
    }

    #[test]
    fn q_quits() {
        let mut app = make_test_app();
        app.overlay = Overlay::None;
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn digits_switch_panels() {
        let mut app = make_test_app();
        app.overlay = Overlay::None;
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.active_panel, Panel::Charts);
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.active_panel, Panel::Select);
    }

    #[test]
    fn chart_cycling_wraps() {
        let mut app = make_test_app();
        app.overlay = Overlay::None;
        app.active_panel = Panel::Charts;
        app.charts = vec![
            crate::chart_plan::ChartPlan {
                title: "a".into(),
                lines: Vec::new(),
                x_labels: (String::new(), String::new()),
            },
            crate::chart_plan::ChartPlan {
                title: "b".into(),
                lines: Vec::new(),
                x_labels: (String::new(), String::new()),
            },
        ];
        handle_key(&mut app, press(KeyCode::Char(']')));
        assert_eq!(app.active_chart, 1);
        handle_key(&mut app, press(KeyCode::Char(']')));
        assert_eq!(app.active_chart, 0);
        handle_key(&mut app, press(KeyCode::Char('[')));
        assert_eq!(app.active_chart, 1);
    }
}
