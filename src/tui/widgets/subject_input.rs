//! Custom-subject input field.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::app::{App, PanelFocus};
use crate::tui::theme::current_theme;

/// Render the free-text subject suffix field.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = current_theme();
    let focused = app.focus == PanelFocus::Subject;

    let border_style = if focused {
        theme.border_focused
    } else {
        theme.border
    };
    let title_style = if focused {
        theme.panel_title_focused
    } else {
        theme.panel_title
    };

    let remaining = app
        .config
        .validation
        .max_custom_subject_length
        .saturating_sub(app.selection.custom_subject.chars().count());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" Custom subject ({remaining} left) "),
            title_style,
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![Span::styled(
        app.selection.custom_subject.clone(),
        theme.field_value,
    )];
    if app.editing_subject {
        spans.push(Span::styled("_", theme.input_prompt)); // cursor indicator
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
