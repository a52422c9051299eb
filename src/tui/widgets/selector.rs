//! Project and email-type selector lists (the "dropdowns").

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, PanelFocus};
use crate::tui::theme::current_theme;

/// Render the project selector.
pub fn render_projects(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<(String, bool)> = app
        .directory
        .projects
        .iter()
        .map(|p| {
            (
                format!("{} — {}", p.code, p.display_name),
                p.code == app.selection.project_code,
            )
        })
        .collect();
    render_list(
        frame,
        area,
        "Project",
        &items,
        app.project_cursor,
        app.focus == PanelFocus::Projects,
    );
}

/// Render the email-type selector.
pub fn render_email_types(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<(String, bool)> = app
        .directory
        .email_types
        .iter()
        .map(|t| {
            (
                format!("{} ({})", t.name, t.priority),
                t.code == app.selection.email_type_code,
            )
        })
        .collect();
    render_list(
        frame,
        area,
        "Email type",
        &items,
        app.email_type_cursor,
        app.focus == PanelFocus::EmailTypes,
    );
}

/// Shared bordered list: a cursor row plus a check mark on the chosen
/// entry. Scrolls to keep the cursor visible.
fn render_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: &[(String, bool)],
    cursor: usize,
    focused: bool,
) {
    let theme = current_theme();

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

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!(" {title} "), title_style));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "(none available)",
            theme.list_disabled,
        )));
        frame.render_widget(empty, inner);
        return;
    }

    let viewport = inner.height as usize;
    let scroll = if cursor >= viewport && viewport > 0 {
        cursor + 1 - viewport
    } else {
        0
    };

    let max_width = inner.width as usize;
    let mut lines = Vec::new();
    for (idx, (label, chosen)) in items.iter().enumerate().skip(scroll).take(viewport) {
        let marker = if *chosen { "✓ " } else { "  " };
        let mut text = format!("{marker}{label}");
        // Truncate to the panel width
        while text.width() > max_width && !text.is_empty() {
            text.pop();
        }
        let style = if focused && idx == cursor {
            theme.list_cursor
        } else if *chosen {
            theme.list_chosen
        } else {
            theme.list_normal
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
