//! Project directory: the static catalog of projects and email types.
//!
//! Loaded once per session from a JSON document with camelCase keys.
//! Read-only after loading.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StampError};
use crate::model::contact::Contact;

/// Message priority attached to an email type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Normal => write!(f, "Normal"),
            Priority::High => write!(f, "High"),
        }
    }
}

/// One project with its category tag and associated contacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    /// Unique project code, e.g. `PROJECT-002`.
    pub code: String,
    /// Human-readable project name shown in selectors.
    pub display_name: String,
    /// Category tag applied to messages filed under this project.
    pub category: String,
    /// Inactive projects are hidden from every surface.
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub project_manager: Option<Contact>,
    #[serde(default)]
    pub team_members: Vec<Contact>,
    #[serde(default)]
    pub client_group: Option<Contact>,
    #[serde(default)]
    pub contractors: Vec<Contact>,
}

fn default_active() -> bool {
    true
}

/// One email type with its category tag and priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTypeEntry {
    /// Unique type code, e.g. `UPDATE`.
    pub code: String,
    /// Display name, e.g. `Status Update`.
    pub name: String,
    /// Category tag applied to messages of this type.
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
}

/// The full catalog: projects plus email types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDirectory {
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub email_types: Vec<EmailTypeEntry>,
}

impl ProjectDirectory {
    /// Load a directory from a JSON file, validate it, and drop
    /// inactive projects.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| StampError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let mut dir: ProjectDirectory =
            serde_json::from_str(&contents).map_err(|e| StampError::ConfigLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        dir.validate()?;
        dir.projects.retain(|p| p.active);
        tracing::info!(
            path = %path.display(),
            projects = dir.projects.len(),
            email_types = dir.email_types.len(),
            "Loaded project directory"
        );
        Ok(dir)
    }

    /// Check structural invariants: unique codes, active projects carry
    /// a non-empty category.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.code.is_empty() {
                return Err(StampError::InvalidDirectory(
                    "project with empty code".to_string(),
                ));
            }
            if !seen.insert(project.code.as_str()) {
                return Err(StampError::InvalidDirectory(format!(
                    "duplicate project code '{}'",
                    project.code
                )));
            }
            if project.active && project.category.is_empty() {
                return Err(StampError::InvalidDirectory(format!(
                    "active project '{}' has no category",
                    project.code
                )));
            }
        }

        let mut seen = HashSet::new();
        for email_type in &self.email_types {
            if email_type.code.is_empty() {
                return Err(StampError::InvalidDirectory(
                    "email type with empty code".to_string(),
                ));
            }
            if !seen.insert(email_type.code.as_str()) {
                return Err(StampError::InvalidDirectory(format!(
                    "duplicate email type code '{}'",
                    email_type.code
                )));
            }
        }

        Ok(())
    }

    /// Look up a project by exact code.
    pub fn project_by_code(&self, code: &str) -> Option<&ProjectEntry> {
        self.projects.iter().find(|p| p.code == code)
    }

    /// Look up an email type by exact code.
    pub fn email_type_by_code(&self, code: &str) -> Option<&EmailTypeEntry> {
        self.email_types.iter().find(|t| t.code == code)
    }

    /// True when both lists are empty (degraded mode after a load failure).
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.email_types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "projects": [
                {
                    "code": "PROJECT-001",
                    "displayName": "Alpha Initiative",
                    "category": "Alpha Initiative",
                    "projectManager": { "name": "Sarah Chen", "email": "sarah.chen@example.com" },
                    "teamMembers": [
                        { "name": "Dev One", "email": "dev1@example.com" },
                        { "name": "Dev Two", "email": "dev2@example.com" }
                    ],
                    "clientGroup": { "name": "Acme Stakeholders", "email": "acme@client.example" },
                    "contractors": []
                },
                {
                    "code": "PROJECT-002",
                    "displayName": "Beta Development",
                    "category": "Beta Development"
                },
                {
                    "code": "PROJECT-007",
                    "displayName": "Eta Optimization",
                    "category": "Eta Optimization",
                    "active": false
                }
            ],
            "emailTypes": [
                { "code": "UPDATE", "name": "Status Update", "category": "Status Update", "priority": "Normal" },
                { "code": "URGENT", "name": "Urgent Matter", "category": "Urgent", "priority": "High" }
            ]
        }"#
    }

    fn parse_sample() -> ProjectDirectory {
        serde_json::from_str(sample_json()).expect("parse sample directory")
    }

    #[test]
    fn test_parse_camel_case_schema() {
        let dir = parse_sample();
        assert_eq!(dir.projects.len(), 3);
        assert_eq!(dir.projects[0].display_name, "Alpha Initiative");
        assert_eq!(
            dir.projects[0].project_manager.as_ref().unwrap().email,
            "sarah.chen@example.com"
        );
        assert_eq!(dir.projects[0].team_members.len(), 2);
        assert_eq!(dir.email_types[1].priority, Priority::High);
    }

    #[test]
    fn test_active_defaults_to_true() {
        let dir = parse_sample();
        assert!(dir.projects[1].active);
        assert!(!dir.projects[2].active);
    }

    #[test]
    fn test_validate_accepts_sample() {
        parse_sample().validate().expect("sample should validate");
    }

    #[test]
    fn test_validate_rejects_duplicate_codes() {
        let mut dir = parse_sample();
        dir.projects[1].code = "PROJECT-001".to_string();
        let err = dir.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate project code"));
    }

    #[test]
    fn test_validate_rejects_active_without_category() {
        let mut dir = parse_sample();
        dir.projects[0].category.clear();
        assert!(dir.validate().is_err());
        // Inactive projects may have an empty category
        let mut dir = parse_sample();
        dir.projects[2].category.clear();
        dir.validate().expect("inactive project without category");
    }

    #[test]
    fn test_load_drops_inactive_projects() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), sample_json()).unwrap();
        let dir = ProjectDirectory::load(tmp.path()).unwrap();
        assert_eq!(dir.projects.len(), 2);
        assert!(dir.project_by_code("PROJECT-007").is_none());
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = ProjectDirectory::load(Path::new("/nonexistent/dir.json")).unwrap_err();
        assert!(matches!(err, StampError::ConfigLoad { .. }));
    }

    #[test]
    fn test_lookups() {
        let dir = parse_sample();
        assert!(dir.project_by_code("PROJECT-002").is_some());
        assert!(dir.project_by_code("PROJECT-999").is_none());
        assert_eq!(dir.email_type_by_code("UPDATE").unwrap().name, "Status Update");
    }
}
