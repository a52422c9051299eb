//! Apply-template orchestration.
//!
//! Runs the five mutation stages strictly in order against the mail
//! host: subject → body → categories → recipients → custom properties.
//! Subject and body failures are fatal and abort the sequence; the
//! remaining stages are tolerated — logged, collected as warnings, and
//! the overall apply still succeeds.
//!
//! The sequence is not resumable and not idempotent: re-running it
//! prepends another header block and may add duplicate recipients.

use chrono::NaiveDate;

use crate::categories;
use crate::config::HeaderConfig;
use crate::directory::ProjectDirectory;
use crate::error::{Result, StampError};
use crate::host::{MailHost, RecipientField};
use crate::selection::SelectionState;
use crate::template;

/// Outcome of a completed apply run. A fatal stage failure is reported
/// as `Err(StampError::FatalStage { .. })` instead.
#[derive(Debug, Clone)]
pub struct ApplyReport {
    /// The subject that was written.
    pub subject: String,
    /// Categories attached (or attempted).
    pub categories: Vec<String>,
    /// Recipients added, as `(field, display)` pairs.
    pub recipients_added: Vec<(RecipientField, String)>,
    /// Tolerated stage failures, in occurrence order.
    pub warnings: Vec<String>,
}

impl ApplyReport {
    /// True when every stage completed without even a tolerated failure.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Apply the template for `selection` to the message behind `host`.
///
/// Preconditions: `selection.is_complete()` and both codes resolve in
/// `directory` (the UI disables apply otherwise; unresolved codes still
/// come back as `NotFound` errors rather than panics).
pub fn apply_template(
    host: &mut dyn MailHost,
    selection: &SelectionState,
    directory: &ProjectDirectory,
    header_config: &HeaderConfig,
    date: NaiveDate,
) -> Result<ApplyReport> {
    let subject = template::generate_subject(selection, directory)?;
    let header = template::generate_header(selection, directory, date, header_config)?;

    let mut report = ApplyReport {
        subject: subject.clone(),
        categories: selection.categories_to_apply(directory),
        recipients_added: Vec::new(),
        warnings: Vec::new(),
    };

    // Stage 1: subject (fatal)
    host.set_subject(&subject)
        .map_err(|source| StampError::FatalStage {
            stage: "set subject",
            source,
        })?;
    tracing::debug!(subject = %subject, "Subject set");

    // Stage 2: body (fatal) — header, one blank line, then the original
    // body verbatim.
    let current_body = host.body().map_err(|source| StampError::FatalStage {
        stage: "read body",
        source,
    })?;
    let new_body = format!("{header}\n{current_body}");
    host.set_body(&new_body)
        .map_err(|source| StampError::FatalStage {
            stage: "set body",
            source,
        })?;
    tracing::debug!("Header prepended to body");

    // Stage 3: categories (tolerated)
    let category_warnings = categories::reconcile_and_apply(host, &report.categories);
    report.warnings.extend(category_warnings);

    // Stage 4: recipients (tolerated, per recipient)
    add_recipients(host, selection, directory, &mut report);

    // Stage 5: custom properties (tolerated)
    set_custom_properties(host, selection, directory, &mut report);

    tracing::info!(
        subject = %subject,
        warnings = report.warnings.len(),
        "Template applied"
    );
    Ok(report)
}

/// Add the toggled recipient groups: client group to To, everyone else
/// to Cc. Each addition is best-effort.
fn add_recipients(
    host: &mut dyn MailHost,
    selection: &SelectionState,
    directory: &ProjectDirectory,
    report: &mut ApplyReport,
) {
    let Some(project) = directory.project_by_code(&selection.project_code) else {
        return;
    };

    let mut planned = Vec::new();
    if selection.toggles.client {
        if let Some(ref client) = project.client_group {
            planned.push((RecipientField::To, client.clone()));
        }
    }
    if selection.toggles.manager {
        if let Some(ref manager) = project.project_manager {
            planned.push((RecipientField::Cc, manager.clone()));
        }
    }
    if selection.toggles.team {
        for member in &project.team_members {
            planned.push((RecipientField::Cc, member.clone()));
        }
    }
    if selection.toggles.contractors {
        for contractor in &project.contractors {
            planned.push((RecipientField::Cc, contractor.clone()));
        }
    }

    for (field, contact) in planned {
        if !contact.has_valid_email() {
            tracing::warn!(recipient = %contact, "Skipping recipient with invalid address");
            report
                .warnings
                .push(format!("Skipped {contact}: invalid email address"));
            continue;
        }
        match host.add_recipient(field, &contact) {
            Ok(()) => {
                tracing::debug!(recipient = %contact, field = %field, "Recipient added");
                report.recipients_added.push((field, contact.display()));
            }
            Err(e) => {
                tracing::warn!(recipient = %contact, field = %field, error = %e, "Could not add recipient");
                report
                    .warnings
                    .push(format!("Could not add {contact} to {field}: {e}"));
            }
        }
    }
}

/// Record the selection on the message as custom properties.
fn set_custom_properties(
    host: &mut dyn MailHost,
    selection: &SelectionState,
    directory: &ProjectDirectory,
    report: &mut ApplyReport,
) {
    let (Some(project), Some(email_type)) = (
        directory.project_by_code(&selection.project_code),
        directory.email_type_by_code(&selection.email_type_code),
    ) else {
        return;
    };

    let properties = vec![
        ("ProjectCode".to_string(), project.code.clone()),
        ("ProjectName".to_string(), project.display_name.clone()),
        ("EmailType".to_string(), email_type.code.clone()),
        ("EmailTypeName".to_string(), email_type.name.clone()),
        ("Priority".to_string(), email_type.priority.to_string()),
    ];

    if let Err(e) = host.save_custom_properties(&properties) {
        tracing::warn!(error = %e, "Could not save custom properties");
        report
            .warnings
            .push(format!("Could not save custom properties: {e}"));
    }
}
