//! Read-mode panel: sender, subject and current categories of the open
//! message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::tui::app::App;
use crate::tui::theme::current_theme;

/// Render the message summary panel.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = current_theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Span::styled(" Message ", theme.panel_title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("From: ", theme.field_label),
            Span::styled(app.message_from.clone(), theme.field_value),
        ]),
        Line::from(vec![
            Span::styled("Subject: ", theme.field_label),
            Span::styled(app.message_subject.clone(), theme.field_value),
        ]),
    ];

    let mut spans = vec![Span::styled("Categories: ", theme.field_label)];
    if app.current_categories.is_empty() {
        spans.push(Span::styled("No categories applied", theme.list_disabled));
    } else {
        for (i, category) in app.current_categories.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {category} "), theme.category_badge));
        }
    }
    lines.push(Line::from(spans));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
