//! Main render function that dispatches to widgets.

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use super::app::{App, Mode};
use super::widgets;

/// Render the entire TUI frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    // Vertical layout: header (1) + content (flex) + status (1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header bar
            Constraint::Min(5),    // content
            Constraint::Length(1), // status bar
        ])
        .split(size);

    widgets::header_bar::render(frame, app, vertical[0]);

    match app.mode {
        Mode::Compose => render_compose(frame, app, vertical[1]),
        Mode::Read => render_read(frame, app, vertical[1]),
    }

    widgets::status_bar::render(frame, app, vertical[2]);
}

/// Compose mode: form column on the left, live preview on the right.
fn render_compose(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let form = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // project selector
            Constraint::Min(5),    // email-type selector
            Constraint::Length(3), // custom subject
            Constraint::Length(6), // recipient toggles
        ])
        .split(columns[0]);

    widgets::selector::render_projects(frame, app, form[0]);
    widgets::selector::render_email_types(frame, app, form[1]);
    widgets::subject_input::render(frame, app, form[2]);
    widgets::recipients::render(frame, app, form[3]);

    widgets::preview::render(frame, app, columns[1]);
}

/// Read mode: message summary and suggestion on top, selectors below.
fn render_read(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let has_suggestion = app.suggestion.is_some();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if has_suggestion {
            vec![
                Constraint::Length(5), // message info
                Constraint::Length(4), // suggestion banner
                Constraint::Min(6),    // selectors
            ]
        } else {
            vec![Constraint::Length(5), Constraint::Min(6)]
        })
        .split(area);

    widgets::message_info::render(frame, app, rows[0]);

    let selectors_area = if has_suggestion {
        widgets::suggestion::render(frame, app, rows[1]);
        rows[2]
    } else {
        rows[1]
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(selectors_area);

    widgets::selector::render_projects(frame, app, columns[0]);
    widgets::selector::render_email_types(frame, app, columns[1]);
}
