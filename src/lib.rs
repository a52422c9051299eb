//! `mailstamp` — stamp project email templates onto draft messages.
//!
//! This crate provides the core library for the mailstamp terminal
//! assistant: a configuration-driven project/email-type directory,
//! subject and header templating, a project-suggestion heuristic,
//! category reconciliation against a master category list, and an
//! ordered apply pipeline over a pluggable mail-host adapter.

pub mod apply;
pub mod categories;
pub mod config;
pub mod directory;
pub mod error;
pub mod host;
pub mod model;
pub mod selection;
pub mod suggest;
pub mod template;
pub mod tui;
