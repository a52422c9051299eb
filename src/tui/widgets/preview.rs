//! Live preview pane: generated subject, header block and categories.

use chrono::Local;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::template;
use crate::tui::app::App;
use crate::tui::theme::current_theme;

/// Render the preview of what an apply would produce.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = current_theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Span::styled(" Preview ", theme.panel_title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !app.selection.is_complete() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "Select a project and email type to generate a preview...",
            theme.list_disabled,
        )))
        .wrap(Wrap { trim: true });
        frame.render_widget(placeholder, inner);
        return;
    }

    let today = Local::now().date_naive();
    let subject = template::generate_subject(&app.selection, &app.directory);
    let header = template::generate_header(&app.selection, &app.directory, today, &app.config.header);

    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled("Subject", theme.field_label)));
    match subject {
        Ok(s) => lines.push(Line::from(Span::styled(s, theme.preview_text))),
        Err(e) => lines.push(Line::from(Span::styled(e.to_string(), theme.status_error))),
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Header", theme.field_label)));
    match header {
        Ok(h) => {
            for line in h.lines() {
                lines.push(Line::from(Span::styled(
                    line.to_string(),
                    theme.preview_text,
                )));
            }
        }
        Err(e) => lines.push(Line::from(Span::styled(e.to_string(), theme.status_error))),
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Categories", theme.field_label)));
    let categories = app.selection.categories_to_apply(&app.directory);
    if categories.is_empty() {
        lines.push(Line::from(Span::styled("No categories", theme.list_disabled)));
    } else {
        let mut spans = Vec::new();
        for (i, category) in categories.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {category} "), theme.category_badge));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
