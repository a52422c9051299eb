//! Application state for the TUI (the "Model" in Elm architecture).

use std::time::Instant;

use chrono::Local;

use crate::apply;
use crate::config::Config;
use crate::directory::ProjectDirectory;
use crate::host::MailHost;
use crate::selection::SelectionState;
use crate::suggest::{self, Suggestion};

/// Which surface the TUI is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Template form over a draft being written.
    Compose,
    /// Classification pane over a received message.
    Read,
}

/// Which panel currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    Projects,
    EmailTypes,
    Subject,
    Recipients,
}

/// Kind of message in the status bar. Success auto-dismisses; errors
/// persist until the next action replaces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Complete TUI state for one compose/read session.
pub struct App {
    // ── Session ───────────────────────────────
    pub mode: Mode,
    pub config: Config,
    /// Read-only after session start. Empty in degraded mode.
    pub directory: ProjectDirectory,
    pub host: Box<dyn MailHost>,
    /// The user's in-progress choices.
    pub selection: SelectionState,

    // ── Navigation ────────────────────────────
    pub focus: PanelFocus,
    pub project_cursor: usize,
    pub email_type_cursor: usize,
    pub recipient_cursor: usize,
    /// Custom-subject input mode captures all keys while active.
    pub editing_subject: bool,

    // ── Read-mode message info ────────────────
    pub message_from: String,
    pub message_subject: String,
    pub current_categories: Vec<String>,
    pub suggestion: Option<Suggestion>,

    // ── Lifecycle ─────────────────────────────
    /// An apply is in flight; the apply action is ignored until done.
    pub applying: bool,
    pub should_quit: bool,
    /// Transient status message, its kind, and the instant it was set.
    pub status_message: Option<(String, StatusKind, Instant)>,
}

impl App {
    /// Create a compose-mode session over a draft host.
    pub fn new_compose(config: Config, directory: ProjectDirectory, host: Box<dyn MailHost>) -> Self {
        Self::new(Mode::Compose, config, directory, host)
    }

    /// Create a read-mode session over an existing message: loads the
    /// sender, subject and current categories, then runs the
    /// suggestion heuristic.
    pub fn new_read(config: Config, directory: ProjectDirectory, host: Box<dyn MailHost>) -> Self {
        let mut app = Self::new(Mode::Read, config, directory, host);

        match app.host.sender() {
            Ok(sender) => app.message_from = sender.display(),
            Err(e) => tracing::warn!(error = %e, "Could not read sender"),
        }
        match app.host.subject() {
            Ok(subject) => app.message_subject = subject,
            Err(e) => tracing::warn!(error = %e, "Could not read subject"),
        }
        app.reload_categories();

        app.suggestion = suggest::suggest_project(&app.message_subject, &app.directory);
        if let Some(ref s) = app.suggestion {
            tracing::info!(project = %s.project.code, reason = %s.reason, "Project suggested");
        }

        app
    }

    fn new(
        mode: Mode,
        config: Config,
        directory: ProjectDirectory,
        host: Box<dyn MailHost>,
    ) -> Self {
        let mut app = Self {
            mode,
            config,
            directory,
            host,
            selection: SelectionState::default(),
            focus: PanelFocus::Projects,
            project_cursor: 0,
            email_type_cursor: 0,
            recipient_cursor: 0,
            editing_subject: false,
            message_from: String::new(),
            message_subject: String::new(),
            current_categories: Vec::new(),
            suggestion: None,
            applying: false,
            should_quit: false,
            status_message: None,
        };

        if app.directory.is_empty() {
            app.set_status(
                "No project directory loaded — selectors are empty",
                StatusKind::Error,
            );
        }
        app
    }

    /// The apply action is available: selection complete and nothing
    /// in flight. (Read mode only needs one of the two codes.)
    pub fn can_apply(&self) -> bool {
        if self.applying {
            return false;
        }
        match self.mode {
            Mode::Compose => self.selection.is_complete(),
            Mode::Read => {
                !self.selection.project_code.is_empty()
                    || !self.selection.email_type_code.is_empty()
            }
        }
    }

    /// Choose the project under the cursor (compose/read selectors).
    pub fn choose_project(&mut self) {
        if let Some(project) = self.directory.projects.get(self.project_cursor) {
            self.selection.project_code = project.code.clone();
        }
    }

    /// Choose the email type under the cursor.
    pub fn choose_email_type(&mut self) {
        if let Some(email_type) = self.directory.email_types.get(self.email_type_cursor) {
            self.selection.email_type_code = email_type.code.clone();
        }
    }

    /// Toggle the recipient group under the cursor, if the selected
    /// project has members in that group.
    pub fn toggle_recipient_group(&mut self) {
        let Some(project) = self.directory.project_by_code(&self.selection.project_code) else {
            self.set_status("Choose a project first", StatusKind::Info);
            return;
        };
        match self.recipient_cursor {
            0 if project.project_manager.is_some() => {
                self.selection.toggles.manager = !self.selection.toggles.manager;
            }
            1 if !project.team_members.is_empty() => {
                self.selection.toggles.team = !self.selection.toggles.team;
            }
            2 if project.client_group.is_some() => {
                self.selection.toggles.client = !self.selection.toggles.client;
            }
            3 if !project.contractors.is_empty() => {
                self.selection.toggles.contractors = !self.selection.toggles.contractors;
            }
            _ => {
                self.set_status("That group has no contacts for this project", StatusKind::Info);
            }
        }
    }

    /// Append a character to the custom subject, respecting the
    /// configured maximum length.
    pub fn push_subject_char(&mut self, c: char) {
        if self.selection.custom_subject.chars().count()
            < self.config.validation.max_custom_subject_length
        {
            self.selection.custom_subject.push(c);
        }
    }

    /// Run the full apply sequence against the host (compose mode).
    pub fn apply_template(&mut self) {
        if !self.can_apply() {
            return;
        }
        self.applying = true;

        let today = Local::now().date_naive();
        let result = apply::apply_template(
            self.host.as_mut(),
            &self.selection,
            &self.directory,
            &self.config.header,
            today,
        );

        match result {
            Ok(report) if report.is_clean() => {
                self.set_status("Template applied successfully!", StatusKind::Success);
            }
            Ok(report) => {
                // Tolerated failures: still a success overall.
                self.set_status(
                    &format!(
                        "Template applied with {} warning(s) — see log",
                        report.warnings.len()
                    ),
                    StatusKind::Success,
                );
            }
            Err(e) => {
                self.set_status(&format!("Error: {e}"), StatusKind::Error);
            }
        }

        self.applying = false;
    }

    /// Apply the selection's categories to the message (read mode).
    pub fn apply_categories(&mut self) {
        if !self.can_apply() {
            return;
        }
        self.applying = true;

        let required = self.selection.categories_to_apply(&self.directory);
        if required.is_empty() {
            self.set_status("No categories to apply", StatusKind::Error);
            self.applying = false;
            return;
        }

        let warnings = crate::categories::reconcile_and_apply(self.host.as_mut(), &required);
        self.reload_categories();

        if warnings.is_empty() {
            let label = if required.len() == 1 { "category" } else { "categories" };
            self.set_status(
                &format!("Applied {} {label} successfully!", required.len()),
                StatusKind::Success,
            );
        } else {
            self.set_status(
                &format!("Applied with {} warning(s) — see log", warnings.len()),
                StatusKind::Success,
            );
        }

        self.applying = false;
    }

    /// Remove every category from the message (read mode).
    pub fn remove_all_categories(&mut self) {
        let current = match self.host.categories() {
            Ok(list) => list,
            Err(e) => {
                self.set_status(&format!("Error: {e}"), StatusKind::Error);
                return;
            }
        };
        if current.is_empty() {
            self.set_status("No categories to remove", StatusKind::Error);
            return;
        }

        match self.host.remove_categories(&current) {
            Ok(()) => {
                self.reload_categories();
                self.set_status("All categories removed successfully!", StatusKind::Success);
            }
            Err(e) => {
                self.set_status(&format!("Error: {e}"), StatusKind::Error);
            }
        }
    }

    /// Accept the suggestion banner: select the project and hide it.
    pub fn apply_suggestion(&mut self) {
        if let Some(suggestion) = self.suggestion.take() {
            if let Some(position) = self
                .directory
                .projects
                .iter()
                .position(|p| p.code == suggestion.project.code)
            {
                self.project_cursor = position;
            }
            self.selection.project_code = suggestion.project.code;
        }
    }

    /// Dismiss the suggestion banner without selecting.
    pub fn dismiss_suggestion(&mut self) {
        self.suggestion = None;
    }

    /// Reset the form to its initial empty state.
    pub fn clear_form(&mut self) {
        self.selection.clear();
        self.project_cursor = 0;
        self.email_type_cursor = 0;
        self.recipient_cursor = 0;
        self.editing_subject = false;
        self.status_message = None;
    }

    /// Refresh the cached category list from the host (read mode).
    fn reload_categories(&mut self) {
        match self.host.categories() {
            Ok(categories) => self.current_categories = categories,
            Err(e) => tracing::warn!(error = %e, "Could not read categories"),
        }
    }

    /// Set a status message. Success messages auto-clear on tick;
    /// errors stay until replaced.
    pub fn set_status(&mut self, msg: &str, kind: StatusKind) {
        self.status_message = Some((msg.to_string(), kind, Instant::now()));
    }

    /// Called every tick: clears expired success/info messages.
    pub fn tick(&mut self) {
        if let Some((_, kind, when)) = &self.status_message {
            let expired = when.elapsed().as_secs() >= self.config.ui.status_timeout_secs;
            if expired && *kind != StatusKind::Error {
                self.status_message = None;
            }
        }
    }

    /// Degraded-mode marker used by widgets to grey out the form.
    pub fn degraded(&self) -> bool {
        self.directory.is_empty()
    }
}
