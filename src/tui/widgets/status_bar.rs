//! Bottom status bar showing transient messages or context-sensitive
//! keyboard hints.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::app::{App, Mode, PanelFocus, StatusKind};
use crate::tui::theme::current_theme;

/// Version string shown at the right edge of the status bar.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render the status bar at the bottom with context-sensitive hints and version.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = current_theme();

    let version_text = format!("v{VERSION} ");
    let version_width = version_text.len() as u16;

    // Split: hints (flexible) | version (fixed)
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(version_width)])
        .split(area);

    // Left side: status message or hints
    let content = if let Some((msg, kind, _)) = &app.status_message {
        let style = match kind {
            StatusKind::Success => theme.status_success,
            StatusKind::Error => theme.status_error,
            StatusKind::Info => theme.status_bar,
        };
        Line::from(Span::styled(format!(" {msg}"), style))
    } else {
        let hints = build_hints(app);
        let mut spans = Vec::new();
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", theme.status_bar));
            }
            spans.push(Span::styled(format!(" {key}"), theme.hint_key));
            spans.push(Span::styled(format!(":{desc}"), theme.status_bar));
        }
        Line::from(spans)
    };

    let bar = Paragraph::new(content).style(theme.status_bar);
    frame.render_widget(bar, chunks[0]);

    // Right side: version
    let version = Paragraph::new(Line::from(Span::styled(version_text, theme.border)))
        .alignment(Alignment::Right)
        .style(theme.status_bar);
    frame.render_widget(version, chunks[1]);
}

/// Return context-sensitive hint pairs (key, description).
fn build_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.editing_subject {
        hints.push(("Enter", "done"));
        hints.push(("Esc", "done"));
        return hints;
    }

    hints.push(("j/k", "nav"));
    hints.push(("Tab", "panel"));

    match (app.mode, app.focus) {
        (Mode::Compose, PanelFocus::Subject) => hints.push(("Enter", "edit")),
        (Mode::Compose, PanelFocus::Recipients) => hints.push(("Space", "toggle")),
        _ => hints.push(("Enter", "select")),
    }

    match app.mode {
        Mode::Compose => {
            hints.push(("a", "apply template"));
            hints.push(("c", "clear"));
        }
        Mode::Read => {
            hints.push(("a", "apply categories"));
            hints.push(("r", "remove all"));
            if app.suggestion.is_some() {
                hints.push(("s", "accept suggestion"));
                hints.push(("d", "dismiss"));
            }
        }
    }

    hints.push(("q", "quit"));
    hints
}
