//! Suggestion banner (read mode): proposed project for the open message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::tui::app::App;
use crate::tui::theme::current_theme;

/// Render the suggestion banner. Only called when a suggestion exists.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = current_theme();

    let Some(ref suggestion) = app.suggestion else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.suggestion)
        .title(Span::styled(" Suggestion ", theme.suggestion));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = format!(
        "Detected: {}. {}  (s: accept, d: dismiss)",
        suggestion.project.display_name, suggestion.reason
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, theme.field_value)))
            .wrap(Wrap { trim: true }),
        inner,
    );
}
