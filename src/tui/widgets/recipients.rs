//! Recipient-group toggle panel (compose mode).

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::contact::Contact;
use crate::tui::app::{App, PanelFocus};
use crate::tui::theme::current_theme;

/// Render the four recipient-group rows with resolved contact names.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = current_theme();
    let focused = app.focus == PanelFocus::Recipients;

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
        .title(Span::styled(" Recipients ", title_style));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let project = app.directory.project_by_code(&app.selection.project_code);

    let rows: [(&str, bool, String); 4] = match project {
        Some(p) => [
            (
                "Project manager (Cc)",
                app.selection.toggles.manager,
                describe_single(p.project_manager.as_ref(), "No project manager assigned"),
            ),
            (
                "Team members (Cc)",
                app.selection.toggles.team,
                describe_group(&p.team_members, "No team members assigned"),
            ),
            (
                "Client group (To)",
                app.selection.toggles.client,
                describe_single(p.client_group.as_ref(), "No client group assigned"),
            ),
            (
                "Contractors (Cc)",
                app.selection.toggles.contractors,
                describe_group(&p.contractors, "No contractors assigned"),
            ),
        ],
        None => [
            ("Project manager (Cc)", false, "—".to_string()),
            ("Team members (Cc)", false, "—".to_string()),
            ("Client group (To)", false, "—".to_string()),
            ("Contractors (Cc)", false, "—".to_string()),
        ],
    };

    let mut lines = Vec::new();
    for (idx, (label, toggled, detail)) in rows.iter().enumerate() {
        let check = if *toggled { "[x]" } else { "[ ]" };
        let row_style = if focused && idx == app.recipient_cursor {
            theme.list_cursor
        } else if project.is_none() {
            theme.list_disabled
        } else {
            theme.list_normal
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{check} {label}  "), row_style),
            Span::styled(detail.clone(), theme.list_disabled),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn describe_single(contact: Option<&Contact>, fallback: &str) -> String {
    match contact {
        Some(c) => c.display(),
        None => fallback.to_string(),
    }
}

fn describe_group(contacts: &[Contact], fallback: &str) -> String {
    if contacts.is_empty() {
        fallback.to_string()
    } else {
        contacts
            .iter()
            .map(|c| c.name.clone())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
