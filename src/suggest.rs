//! Suggestion heuristic: propose a project for an existing message
//! based on its subject line.
//!
//! Two rules, first match wins:
//! 1. A bracketed token `[X]` whose content equals a project code.
//! 2. A display-name token longer than four characters found in the
//!    subject, case-insensitively, scanning projects in directory order.
//!
//! Ambiguous subjects are not flagged; the order-dependent tie-break is
//! deliberate.

use crate::directory::{ProjectDirectory, ProjectEntry};

/// A proposed project match, shown in the read-mode banner until the
/// user applies or dismisses it.
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub project: ProjectEntry,
    /// Human-readable explanation of why this project matched.
    pub reason: String,
}

/// Analyze a subject line and propose a matching project, if any.
pub fn suggest_project(subject: &str, directory: &ProjectDirectory) -> Option<Suggestion> {
    if subject.is_empty() {
        return None;
    }

    // Rule 1: bracketed project code, e.g. "[PROJECT-002] status update"
    if let Some(code) = first_bracketed_token(subject) {
        if let Some(project) = directory.project_by_code(code) {
            return Some(Suggestion {
                project: project.clone(),
                reason: format!("Subject contains project code [{code}]"),
            });
        }
    }

    // Rule 2: significant word from a project display name
    let subject_lower = subject.to_lowercase();
    for project in &directory.projects {
        for word in project.display_name.split_whitespace() {
            if word.chars().count() > 4 && subject_lower.contains(&word.to_lowercase()) {
                return Some(Suggestion {
                    project: project.clone(),
                    reason: format!(
                        "Subject mentions \"{}\" from project \"{}\"",
                        word.to_lowercase(),
                        project.display_name
                    ),
                });
            }
        }
    }

    None
}

/// Extract the content of the first `[...]` pair, if well-formed and
/// non-empty.
fn first_bracketed_token(subject: &str) -> Option<&str> {
    let open = subject.find('[')?;
    let rest = &subject[open + 1..];
    let close = rest.find(']')?;
    let token = &rest[..close];
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::ProjectEntry;

    fn project(code: &str, name: &str) -> ProjectEntry {
        ProjectEntry {
            code: code.to_string(),
            display_name: name.to_string(),
            category: name.to_string(),
            active: true,
            project_manager: None,
            team_members: Vec::new(),
            client_group: None,
            contractors: Vec::new(),
        }
    }

    fn directory() -> ProjectDirectory {
        ProjectDirectory {
            projects: vec![
                project("PROJECT-001", "Alpha Initiative"),
                project("PROJECT-002", "Beta Development"),
                project("PROJECT-003", "Gamma Rollout"),
            ],
            email_types: Vec::new(),
        }
    }

    #[test]
    fn test_bracket_match_wins() {
        // Display name shares no words with the subject; the code match
        // alone decides.
        let s = suggest_project("[PROJECT-002] status update", &directory()).unwrap();
        assert_eq!(s.project.code, "PROJECT-002");
        assert!(s.reason.contains("[PROJECT-002]"));
    }

    #[test]
    fn test_bracket_unknown_code_falls_through_to_names() {
        let s = suggest_project("[TICKET-9] gamma rollout delayed", &directory()).unwrap();
        assert_eq!(s.project.code, "PROJECT-003");
        assert!(s.reason.contains("gamma"));
    }

    #[test]
    fn test_name_token_match() {
        let s = suggest_project("Let's discuss the Beta rollout plan", &directory()).unwrap();
        // "Beta" is only 4 chars; "rollout" would match PROJECT-003, but
        // "Development"? Not in subject. Directory order scans Alpha, then
        // Beta (no token > 4 matches), then Gamma ("Rollout" matches).
        assert_eq!(s.project.code, "PROJECT-003");
        assert!(s.reason.contains("rollout"));
    }

    #[test]
    fn test_name_token_requires_length_over_four() {
        // "Beta" (4 chars) alone must not match PROJECT-002.
        assert!(suggest_project("beta numbers attached", &directory()).is_none());
        // "development" (11 chars) does.
        let s = suggest_project("development costs rising", &directory()).unwrap();
        assert_eq!(s.project.code, "PROJECT-002");
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let s = suggest_project("ALPHA INITIATIVE kickoff", &directory()).unwrap();
        assert_eq!(s.project.code, "PROJECT-001");
    }

    #[test]
    fn test_first_in_directory_order_wins() {
        // "initiative" matches PROJECT-001 and "development" PROJECT-002;
        // the earlier project in directory order is reported.
        let s = suggest_project("initiative development sync", &directory()).unwrap();
        assert_eq!(s.project.code, "PROJECT-001");
    }

    #[test]
    fn test_no_match_returns_none() {
        assert!(suggest_project("no identifiable content", &directory()).is_none());
        assert!(suggest_project("", &directory()).is_none());
    }

    #[test]
    fn test_empty_brackets_ignored() {
        assert!(suggest_project("[] nothing to see", &directory()).is_none());
    }

    #[test]
    fn test_first_bracketed_token() {
        assert_eq!(first_bracketed_token("[A] [B]"), Some("A"));
        assert_eq!(first_bracketed_token("no brackets"), None);
        assert_eq!(first_bracketed_token("unclosed [bracket"), None);
    }
}
