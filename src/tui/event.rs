//! Keyboard and input event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode, PanelFocus};

/// Number of rows in the recipient-group panel.
const RECIPIENT_ROWS: usize = 4;

/// Process a key event and update the application state.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> anyhow::Result<()> {
    // ── Subject input mode (captures all keys) ────────────
    if app.editing_subject {
        return handle_subject_input(app, key);
    }

    // ── Always-available shortcuts ────────────────────────
    match (key.modifiers, key.code) {
        // Ctrl+C always quits, from any panel
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
            return Ok(());
        }
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => {
            app.should_quit = true;
            return Ok(());
        }
        // Tab: cycle focus forward
        (_, KeyCode::Tab) => {
            app.focus = next_focus(app, true);
            return Ok(());
        }
        // Shift+Tab: cycle focus backward
        (_, KeyCode::BackTab) => {
            app.focus = next_focus(app, false);
            return Ok(());
        }
        // Apply: template in compose mode, categories in read mode
        (_, KeyCode::Char('a')) => {
            match app.mode {
                Mode::Compose => app.apply_template(),
                Mode::Read => app.apply_categories(),
            }
            return Ok(());
        }
        (_, KeyCode::Char('c')) => {
            app.clear_form();
            return Ok(());
        }
        _ => {}
    }

    // ── Mode-specific shortcuts ───────────────────────────
    if app.mode == Mode::Read {
        match key.code {
            KeyCode::Char('r') => {
                app.remove_all_categories();
                return Ok(());
            }
            KeyCode::Char('s') if app.suggestion.is_some() => {
                app.apply_suggestion();
                return Ok(());
            }
            KeyCode::Char('d') if app.suggestion.is_some() => {
                app.dismiss_suggestion();
                return Ok(());
            }
            _ => {}
        }
    }

    // ── Panel-specific shortcuts ──────────────────────────
    match app.focus {
        PanelFocus::Projects => handle_list_keys(
            app,
            key,
            |app| app.directory.projects.len(),
            |app| &mut app.project_cursor,
            App::choose_project,
        ),
        PanelFocus::EmailTypes => handle_list_keys(
            app,
            key,
            |app| app.directory.email_types.len(),
            |app| &mut app.email_type_cursor,
            App::choose_email_type,
        ),
        PanelFocus::Subject => handle_subject_keys(app, key),
        PanelFocus::Recipients => handle_recipient_keys(app, key),
    }

    Ok(())
}

/// Cycle focus to the next (or previous) panel. The subject and
/// recipient panels only exist in compose mode.
fn next_focus(app: &App, forward: bool) -> PanelFocus {
    match app.mode {
        Mode::Compose => {
            if forward {
                match app.focus {
                    PanelFocus::Projects => PanelFocus::EmailTypes,
                    PanelFocus::EmailTypes => PanelFocus::Subject,
                    PanelFocus::Subject => PanelFocus::Recipients,
                    PanelFocus::Recipients => PanelFocus::Projects,
                }
            } else {
                match app.focus {
                    PanelFocus::Projects => PanelFocus::Recipients,
                    PanelFocus::EmailTypes => PanelFocus::Projects,
                    PanelFocus::Subject => PanelFocus::EmailTypes,
                    PanelFocus::Recipients => PanelFocus::Subject,
                }
            }
        }
        Mode::Read => match app.focus {
            PanelFocus::Projects => PanelFocus::EmailTypes,
            _ => PanelFocus::Projects,
        },
    }
}

/// Shared navigation for the project and email-type selectors.
fn handle_list_keys(
    app: &mut App,
    key: KeyEvent,
    len: fn(&App) -> usize,
    cursor: fn(&mut App) -> &mut usize,
    choose: fn(&mut App),
) {
    let count = len(app);
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let c = cursor(app);
            if *c + 1 < count {
                *c += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let c = cursor(app);
            *c = c.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            *cursor(app) = 0;
        }
        KeyCode::Char('G') | KeyCode::End => {
            *cursor(app) = count.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if count > 0 {
                choose(app);
            }
        }
        _ => {}
    }
}

/// Key handling when the subject panel has focus (not yet editing).
fn handle_subject_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('i') => {
            app.editing_subject = true;
        }
        _ => {}
    }
}

/// Key handling while the subject input captures keystrokes.
fn handle_subject_input(app: &mut App, key: KeyEvent) -> anyhow::Result<()> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.editing_subject = false;
        }
        KeyCode::Backspace => {
            app.selection.custom_subject.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_subject_char(c);
        }
        _ => {}
    }
    Ok(())
}

/// Key handling for the recipient-group toggle list.
fn handle_recipient_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.recipient_cursor + 1 < RECIPIENT_ROWS {
                app.recipient_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.recipient_cursor = app.recipient_cursor.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_recipient_group();
        }
        _ => {}
    }
}
