//! Template generator: subject lines and header blocks.
//!
//! Pure functions over a [`SelectionState`] and [`ProjectDirectory`].
//! Callers are expected to guard with [`SelectionState::is_complete`];
//! an unresolved code is reported as `ProjectNotFound` /
//! `EmailTypeNotFound` rather than panicking.

use chrono::NaiveDate;

use crate::config::{DateStyle, HeaderConfig};
use crate::directory::ProjectDirectory;
use crate::error::{Result, StampError};
use crate::selection::SelectionState;

/// Generate the subject line: `[{code}] {type name}`, plus
/// ` - {custom}` when a custom suffix is present.
pub fn generate_subject(
    selection: &SelectionState,
    directory: &ProjectDirectory,
) -> Result<String> {
    let project = directory
        .project_by_code(&selection.project_code)
        .ok_or_else(|| StampError::ProjectNotFound(selection.project_code.clone()))?;
    let email_type = directory
        .email_type_by_code(&selection.email_type_code)
        .ok_or_else(|| StampError::EmailTypeNotFound(selection.email_type_code.clone()))?;

    let mut subject = format!("[{}] {}", project.code, email_type.name);
    if !selection.custom_subject.is_empty() {
        subject.push_str(" - ");
        subject.push_str(&selection.custom_subject);
    }
    Ok(subject)
}

/// Generate the fixed-layout header block prepended to the body:
///
/// ```text
/// ━━━━━━━━
/// STATUS UPDATE
/// ━━━━━━━━
///
/// Project: Alpha Initiative
/// Type: Status Update
/// Priority: Normal
/// Date: January 5, 2025
///
/// ━━━━━━━━
/// ```
///
/// Deterministic given `date`.
pub fn generate_header(
    selection: &SelectionState,
    directory: &ProjectDirectory,
    date: NaiveDate,
    config: &HeaderConfig,
) -> Result<String> {
    let project = directory
        .project_by_code(&selection.project_code)
        .ok_or_else(|| StampError::ProjectNotFound(selection.project_code.clone()))?;
    let email_type = directory
        .email_type_by_code(&selection.email_type_code)
        .ok_or_else(|| StampError::EmailTypeNotFound(selection.email_type_code.clone()))?;

    let divider: String = std::iter::repeat(config.divider_char)
        .take(config.divider_length)
        .collect();

    let mut header = String::new();
    header.push_str(&divider);
    header.push('\n');
    header.push_str(&email_type.name.to_uppercase());
    header.push('\n');
    header.push_str(&divider);
    header.push_str("\n\n");
    header.push_str(&format!("Project: {}\n", project.display_name));
    header.push_str(&format!("Type: {}\n", email_type.name));
    header.push_str(&format!("Priority: {}\n", email_type.priority));
    header.push_str(&format!("Date: {}\n", format_date(date, config.date_style)));
    header.push('\n');
    header.push_str(&divider);
    header.push('\n');

    Ok(header)
}

/// Format a date per the configured style.
fn format_date(date: NaiveDate, style: DateStyle) -> String {
    match style {
        DateStyle::Long => date.format("%B %-d, %Y").to_string(),
        DateStyle::Short => date.format("%m/%d/%Y").to_string(),
        DateStyle::Iso => date.format("%Y-%m-%d").to_string(),
    }
}
