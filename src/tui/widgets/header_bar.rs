//! Top header bar: application name and session mode.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::app::{App, Mode};
use crate::tui::theme::current_theme;

/// Render the one-line header bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = current_theme();

    let mode = match app.mode {
        Mode::Compose => "Compose",
        Mode::Read => "Read",
    };

    let line = Line::from(vec![
        Span::styled(" mailstamp ", theme.header_bar),
        Span::styled(format!("— {mode} "), theme.header_bar),
        Span::styled(
            format!(
                "({} projects, {} types)",
                app.directory.projects.len(),
                app.directory.email_types.len()
            ),
            theme.status_bar,
        ),
    ]);

    frame.render_widget(Paragraph::new(line).style(theme.header_bar), area);
}
