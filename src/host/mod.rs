//! Mail host adapter: the seam between mailstamp and the mail client.
//!
//! Every operation is a single request that completes with a
//! success/failure status. Callers issue requests strictly in sequence;
//! a new request starts only after the previous one has completed.

pub mod eml;
pub mod registry;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::contact::Contact;

/// Error reported by a host operation, carrying the host's message.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct HostError {
    pub message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Convenience alias for host operation results.
pub type HostResult<T> = std::result::Result<T, HostError>;

/// An entry in the account's master category registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterCategory {
    /// Category display name as shown in the mail client.
    pub display_name: String,
    /// Palette color name (see [`crate::categories::PALETTE`]).
    pub color: String,
}

/// Which recipient field to add a contact to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientField {
    To,
    Cc,
}

impl std::fmt::Display for RecipientField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipientField::To => write!(f, "To"),
            RecipientField::Cc => write!(f, "Cc"),
        }
    }
}

/// Operations the mail client exposes for the active message.
///
/// Implemented by [`eml::EmlHost`] for local drafts and by scripted
/// test doubles in the integration tests.
pub trait MailHost {
    /// Read the message subject.
    fn subject(&self) -> HostResult<String>;

    /// Replace the message subject.
    fn set_subject(&mut self, subject: &str) -> HostResult<()>;

    /// Read the plain-text body.
    fn body(&self) -> HostResult<String>;

    /// Replace the plain-text body.
    fn set_body(&mut self, body: &str) -> HostResult<()>;

    /// Categories currently attached to the message.
    fn categories(&self) -> HostResult<Vec<String>>;

    /// Attach categories to the message (duplicates ignored).
    fn add_categories(&mut self, categories: &[String]) -> HostResult<()>;

    /// Detach categories from the message.
    fn remove_categories(&mut self, categories: &[String]) -> HostResult<()>;

    /// The account's master category registry.
    fn master_categories(&self) -> HostResult<Vec<MasterCategory>>;

    /// Register new categories in the master registry.
    fn create_master_categories(&mut self, categories: &[MasterCategory]) -> HostResult<()>;

    /// Append one recipient to the To or Cc field.
    fn add_recipient(&mut self, field: RecipientField, contact: &Contact) -> HostResult<()>;

    /// Read the message's custom key-value properties.
    fn custom_properties(&self) -> HostResult<Vec<(String, String)>>;

    /// Store custom key-value properties on the message, replacing any
    /// existing values for the same keys.
    fn save_custom_properties(&mut self, properties: &[(String, String)]) -> HostResult<()>;

    /// Sender of an existing message (read mode).
    fn sender(&self) -> HostResult<Contact>;
}
