//! Color theme definitions for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// A complete color theme for the TUI.
pub struct Theme {
    pub header_bar: Style,
    pub status_bar: Style,
    pub status_success: Style,
    pub status_error: Style,
    pub panel_title: Style,
    pub panel_title_focused: Style,
    pub list_normal: Style,
    pub list_cursor: Style,
    pub list_chosen: Style,
    pub list_disabled: Style,
    pub field_label: Style,
    pub field_value: Style,
    pub preview_text: Style,
    pub category_badge: Style,
    pub suggestion: Style,
    pub border: Style,
    pub border_focused: Style,
    pub input_prompt: Style,
    pub hint_key: Style,
}

impl Theme {
    /// Dark theme (default).
    pub fn dark() -> Self {
        Self {
            header_bar: Style::default()
                .fg(Color::Rgb(200, 200, 220))
                .bg(Color::Rgb(30, 30, 46)),
            status_bar: Style::default()
                .fg(Color::Rgb(150, 150, 170))
                .bg(Color::Rgb(30, 30, 46)),
            status_success: Style::default()
                .fg(Color::Green)
                .bg(Color::Rgb(30, 30, 46))
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .fg(Color::Red)
                .bg(Color::Rgb(30, 30, 46))
                .add_modifier(Modifier::BOLD),
            panel_title: Style::default().fg(Color::Rgb(180, 180, 200)),
            panel_title_focused: Style::default()
                .fg(Color::Rgb(130, 170, 255))
                .add_modifier(Modifier::BOLD),
            list_normal: Style::default().fg(Color::Rgb(200, 200, 220)),
            list_cursor: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(60, 60, 100)),
            list_chosen: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            list_disabled: Style::default().fg(Color::Rgb(100, 100, 120)),
            field_label: Style::default()
                .fg(Color::Rgb(130, 170, 255))
                .add_modifier(Modifier::BOLD),
            field_value: Style::default().fg(Color::Rgb(220, 220, 230)),
            preview_text: Style::default().fg(Color::Rgb(220, 220, 230)),
            category_badge: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(130, 170, 255)),
            suggestion: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Rgb(80, 80, 100)),
            border_focused: Style::default().fg(Color::Rgb(130, 170, 255)),
            input_prompt: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            hint_key: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Return the active theme.
pub fn current_theme() -> Theme {
    Theme::dark()
}
