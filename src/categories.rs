//! Category reconciliation against the account's master category list.
//!
//! The mail host keeps a per-account registry of categories (display
//! name + color). Applying a template may require categories that do
//! not exist yet; those are created first, then all required categories
//! are attached to the message. Every host failure in this module is
//! tolerated: category bookkeeping must never block subject or body
//! changes.

use crate::host::{HostError, MailHost, MasterCategory};

/// The 25 preset category colors, in registry order. A new category's
/// color is chosen by the category's position in the required list,
/// modulo the palette size.
pub const PALETTE: [&str; 25] = [
    "red",
    "orange",
    "brown",
    "yellow",
    "green",
    "teal",
    "olive",
    "blue",
    "purple",
    "cranberry",
    "steel",
    "dark-steel",
    "gray",
    "dark-gray",
    "black",
    "dark-red",
    "dark-orange",
    "dark-brown",
    "dark-yellow",
    "dark-green",
    "dark-teal",
    "dark-olive",
    "dark-blue",
    "dark-purple",
    "dark-cranberry",
];

/// Palette color for the category at `position` in the required list.
pub fn palette_color(position: usize) -> &'static str {
    PALETTE[position % PALETTE.len()]
}

/// What a reconciliation will do: which categories to register in the
/// master list, and which to attach to the message.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcilePlan {
    /// Categories missing from the master list, with assigned colors.
    pub to_create: Vec<MasterCategory>,
    /// All required categories, pre-existing and new.
    pub to_assign: Vec<String>,
}

/// Diff `required` against the host's master list (case-sensitive exact
/// match), preserving required order.
pub fn plan(required: &[String], existing: &[String]) -> ReconcilePlan {
    let to_create = required
        .iter()
        .enumerate()
        .filter(|(_, name)| !existing.iter().any(|e| e == *name))
        .map(|(position, name)| MasterCategory {
            display_name: name.clone(),
            color: palette_color(position).to_string(),
        })
        .collect();

    ReconcilePlan {
        to_create,
        to_assign: required.to_vec(),
    }
}

/// Ensure `required` categories exist in the master list, then attach
/// them to the current message.
///
/// Best-effort throughout: failures are logged as warnings and the
/// overall operation still succeeds. Returns the warnings collected.
pub fn reconcile_and_apply(host: &mut dyn MailHost, required: &[String]) -> Vec<String> {
    let mut warnings = Vec::new();
    if required.is_empty() {
        return warnings;
    }

    let existing = match host.master_categories() {
        Ok(list) => list.into_iter().map(|c| c.display_name).collect(),
        Err(e) => {
            warn(&mut warnings, "read master categories", &e);
            // Assume nothing exists and still try to assign below.
            Vec::new()
        }
    };

    let plan = plan(required, &existing);

    if !plan.to_create.is_empty() {
        if let Err(e) = host.create_master_categories(&plan.to_create) {
            warn(&mut warnings, "create master categories", &e);
        }
    }

    if let Err(e) = host.add_categories(&plan.to_assign) {
        warn(&mut warnings, "assign categories", &e);
    }

    warnings
}

fn warn(warnings: &mut Vec<String>, action: &str, e: &HostError) {
    tracing::warn!(error = %e, "Could not {action}");
    warnings.push(format!("Could not {action}: {e}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plan_creates_only_missing() {
        let plan = plan(&names(&["Alpha", "Beta"]), &names(&["Alpha"]));
        assert_eq!(plan.to_create.len(), 1);
        assert_eq!(plan.to_create[0].display_name, "Beta");
        assert_eq!(plan.to_assign, names(&["Alpha", "Beta"]));
    }

    #[test]
    fn test_plan_color_by_required_position() {
        // "Beta" sits at position 1 in the required list, so it gets
        // palette[1] even though it is the only category being created.
        let plan = plan(&names(&["Alpha", "Beta"]), &names(&["Alpha"]));
        assert_eq!(plan.to_create[0].color, PALETTE[1]);
    }

    #[test]
    fn test_plan_nothing_missing() {
        let plan = plan(&names(&["Alpha"]), &names(&["Alpha", "Beta"]));
        assert!(plan.to_create.is_empty());
        assert_eq!(plan.to_assign, names(&["Alpha"]));
    }

    #[test]
    fn test_plan_match_is_case_sensitive() {
        let plan = plan(&names(&["alpha"]), &names(&["Alpha"]));
        assert_eq!(plan.to_create.len(), 1);
        assert_eq!(plan.to_create[0].display_name, "alpha");
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(0), "red");
        assert_eq!(palette_color(25), "red");
        assert_eq!(palette_color(26), "orange");
    }
}
