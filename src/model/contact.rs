//! Contact type: a display name paired with an email address.

use serde::{Deserialize, Serialize};

/// A person or group that can be added as a recipient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Human-readable display name (may be empty).
    pub name: String,
    /// The bare email address (`user@domain`).
    pub email: String,
}

impl Contact {
    /// Whether the email looks like a plausible address (`local@domain`).
    pub fn has_valid_email(&self) -> bool {
        match self.email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && !domain.is_empty() && domain.contains('.')
            }
            None => false,
        }
    }

    /// Format for display: `"Display Name <address>"` or just `"address"`.
    pub fn display(&self) -> String {
        if self.name.is_empty() {
            self.email.clone()
        } else {
            format!("{} <{}>", self.name, self.email)
        }
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(email: &str) -> Contact {
        Contact {
            name: String::new(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_valid_email() {
        assert!(contact("user@example.com").has_valid_email());
        assert!(!contact("not-an-address").has_valid_email());
        assert!(!contact("user@localhost").has_valid_email());
        assert!(!contact("").has_valid_email());
    }

    #[test]
    fn test_display_with_name() {
        let c = Contact {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        };
        assert_eq!(c.display(), "Alice <alice@example.com>");
    }

    #[test]
    fn test_display_without_name() {
        let c = Contact {
            name: String::new(),
            email: "alice@example.com".to_string(),
        };
        assert_eq!(c.display(), "alice@example.com");
    }
}
