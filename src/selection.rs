//! Selection state: the user's in-progress choices before "apply".
//!
//! One instance lives inside the TUI `App` for the duration of a
//! compose/read session. It is never persisted.

use crate::directory::ProjectDirectory;

/// Which recipient groups to add on apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecipientToggles {
    pub manager: bool,
    pub team: bool,
    pub client: bool,
    pub contractors: bool,
}

/// The user's current choices.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Selected project code, or empty.
    pub project_code: String,
    /// Selected email-type code, or empty.
    pub email_type_code: String,
    /// Free-text subject suffix.
    pub custom_subject: String,
    /// Recipient groups toggled on.
    pub toggles: RecipientToggles,
}

impl SelectionState {
    /// Both required codes are chosen. Guards the apply action.
    pub fn is_complete(&self) -> bool {
        !self.project_code.is_empty() && !self.email_type_code.is_empty()
    }

    /// Reset every field to its initial empty value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Categories required by the current selection: the project's
    /// category followed by the email type's. Unresolved codes are
    /// skipped, so a partial selection still yields its half.
    pub fn categories_to_apply(&self, directory: &ProjectDirectory) -> Vec<String> {
        let mut categories = Vec::new();
        if let Some(project) = directory.project_by_code(&self.project_code) {
            categories.push(project.category.clone());
        }
        if let Some(email_type) = directory.email_type_by_code(&self.email_type_code) {
            categories.push(email_type.category.clone());
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{EmailTypeEntry, Priority, ProjectEntry};

    fn directory() -> ProjectDirectory {
        ProjectDirectory {
            projects: vec![ProjectEntry {
                code: "PROJECT-001".to_string(),
                display_name: "Alpha Initiative".to_string(),
                category: "Alpha Initiative".to_string(),
                active: true,
                project_manager: None,
                team_members: Vec::new(),
                client_group: None,
                contractors: Vec::new(),
            }],
            email_types: vec![EmailTypeEntry {
                code: "UPDATE".to_string(),
                name: "Status Update".to_string(),
                category: "Status Update".to_string(),
                priority: Priority::Normal,
            }],
        }
    }

    #[test]
    fn test_complete_requires_both_codes() {
        let mut sel = SelectionState::default();
        assert!(!sel.is_complete());
        sel.project_code = "PROJECT-001".to_string();
        assert!(!sel.is_complete());
        sel.email_type_code = "UPDATE".to_string();
        assert!(sel.is_complete());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut sel = SelectionState {
            project_code: "PROJECT-001".to_string(),
            email_type_code: "UPDATE".to_string(),
            custom_subject: "Q3 numbers".to_string(),
            toggles: RecipientToggles {
                manager: true,
                team: true,
                client: false,
                contractors: true,
            },
        };
        sel.clear();
        assert!(sel.project_code.is_empty());
        assert!(sel.custom_subject.is_empty());
        assert_eq!(sel.toggles, RecipientToggles::default());
    }

    #[test]
    fn test_categories_project_then_type() {
        let sel = SelectionState {
            project_code: "PROJECT-001".to_string(),
            email_type_code: "UPDATE".to_string(),
            ..Default::default()
        };
        assert_eq!(
            sel.categories_to_apply(&directory()),
            vec!["Alpha Initiative".to_string(), "Status Update".to_string()]
        );
    }

    #[test]
    fn test_categories_partial_selection() {
        let sel = SelectionState {
            email_type_code: "UPDATE".to_string(),
            ..Default::default()
        };
        assert_eq!(
            sel.categories_to_apply(&directory()),
            vec!["Status Update".to_string()]
        );
    }

    #[test]
    fn test_categories_unknown_codes_skipped() {
        let sel = SelectionState {
            project_code: "NOPE".to_string(),
            email_type_code: "NOPE".to_string(),
            ..Default::default()
        };
        assert!(sel.categories_to_apply(&directory()).is_empty());
    }
}
