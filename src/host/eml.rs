//! Draft-file mail host: operates on a local RFC 5322 `.eml` draft.
//!
//! Reads the draft with `mail-parser`, keeps the mutable fields in
//! memory, and rewrites the file after every mutation so each host
//! request completes with the draft in a consistent state. Message
//! categories live in the `Keywords` header; custom properties are
//! stored as `X-Mailstamp-*` headers. Headers outside the modeled set
//! (`Message-ID`, `In-Reply-To`, `References`, `Reply-To`, ...) are
//! carried verbatim across rewrites; the body is normalized to a single
//! plain-text part. The account-level master category list is backed by
//! a [`CategoryRegistry`] file.

use std::path::{Path, PathBuf};

use mail_parser::MessageParser;

use crate::error::{Result, StampError};
use crate::host::registry::CategoryRegistry;
use crate::host::{HostError, HostResult, MailHost, MasterCategory, RecipientField};
use crate::model::contact::Contact;

/// Prefix for custom-property headers on the draft.
const PROPERTY_PREFIX: &str = "X-Mailstamp-";

/// Header names the host owns and rewrites itself (lowercase). Every
/// other header is preserved verbatim.
const REWRITTEN_HEADERS: [&str; 8] = [
    "from",
    "to",
    "cc",
    "subject",
    "date",
    "keywords",
    "mime-version",
    "content-type",
];

/// A mail host backed by a single `.eml` file plus a category registry.
#[derive(Debug)]
pub struct EmlHost {
    path: PathBuf,
    registry_path: PathBuf,
    from: Contact,
    to: Vec<Contact>,
    cc: Vec<Contact>,
    subject: String,
    body: String,
    /// Original `Date:` header value, preserved verbatim on rewrite.
    date: Option<String>,
    categories: Vec<String>,
    properties: Vec<(String, String)>,
    /// Raw header lines outside the modeled set, folds included,
    /// carried verbatim across rewrites.
    extra_headers: Vec<String>,
}

impl EmlHost {
    /// Open a draft file. The registry file need not exist yet.
    pub fn open(path: &Path, registry_path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| StampError::io(path, e))?;

        let parser = MessageParser::default();
        let mut host = Self {
            path: path.to_path_buf(),
            registry_path: registry_path.to_path_buf(),
            from: Contact {
                name: String::new(),
                email: String::new(),
            },
            to: Vec::new(),
            cc: Vec::new(),
            subject: String::new(),
            body: String::new(),
            date: None,
            categories: Vec::new(),
            properties: Vec::new(),
            extra_headers: Vec::new(),
        };

        match parser.parse(&data) {
            Some(msg) => {
                host.subject = msg.subject().unwrap_or("").to_string();
                host.body = msg
                    .body_text(0)
                    .map(|s| s.into_owned())
                    .unwrap_or_default();
                host.from = first_contact(msg.from());
                host.to = all_contacts(msg.to());
                host.cc = all_contacts(msg.cc());
                host.date = msg.header_raw("Date").map(|d| d.trim().to_string());
                host.categories = msg
                    .header_raw("Keywords")
                    .map(parse_keywords)
                    .unwrap_or_default();

                for header in msg.headers() {
                    if let Some(key) = header.name().strip_prefix(PROPERTY_PREFIX) {
                        if let Some(value) = header.value().as_text() {
                            host.properties.push((key.to_string(), value.to_string()));
                        }
                    }
                }

                host.extra_headers = preserved_headers(&data);
            }
            None => {
                // An empty or unparseable file is treated as a blank draft.
                tracing::debug!(path = %path.display(), "Draft did not parse, starting blank");
            }
        }

        Ok(host)
    }

    /// Serialize the draft back to its file.
    fn save(&self) -> HostResult<()> {
        let mut out = String::new();

        if !self.from.email.is_empty() {
            out.push_str(&format!("From: {}\r\n", self.from.display()));
        }
        if !self.to.is_empty() {
            out.push_str(&format!("To: {}\r\n", join_contacts(&self.to)));
        }
        if !self.cc.is_empty() {
            out.push_str(&format!("Cc: {}\r\n", join_contacts(&self.cc)));
        }
        out.push_str(&format!("Subject: {}\r\n", self.subject));
        if let Some(ref date) = self.date {
            out.push_str(&format!("Date: {date}\r\n"));
        }
        if !self.categories.is_empty() {
            out.push_str(&format!("Keywords: {}\r\n", self.categories.join(", ")));
        }
        for (key, value) in &self.properties {
            out.push_str(&format!("{PROPERTY_PREFIX}{key}: {value}\r\n"));
        }
        for header in &self.extra_headers {
            out.push_str(header);
            out.push_str("\r\n");
        }
        out.push_str("MIME-Version: 1.0\r\n");
        out.push_str("Content-Type: text/plain; charset=utf-8\r\n");
        out.push_str("\r\n");
        out.push_str(&self.body);

        std::fs::write(&self.path, out).map_err(|e| {
            HostError::new(format!(
                "could not write draft '{}': {e}",
                self.path.display()
            ))
        })
    }
}

impl MailHost for EmlHost {
    fn subject(&self) -> HostResult<String> {
        Ok(self.subject.clone())
    }

    fn set_subject(&mut self, subject: &str) -> HostResult<()> {
        self.subject = subject.to_string();
        self.save()
    }

    fn body(&self) -> HostResult<String> {
        Ok(self.body.clone())
    }

    fn set_body(&mut self, body: &str) -> HostResult<()> {
        self.body = body.to_string();
        self.save()
    }

    fn categories(&self) -> HostResult<Vec<String>> {
        Ok(self.categories.clone())
    }

    fn add_categories(&mut self, categories: &[String]) -> HostResult<()> {
        for category in categories {
            if !self.categories.contains(category) {
                self.categories.push(category.clone());
            }
        }
        self.save()
    }

    fn remove_categories(&mut self, categories: &[String]) -> HostResult<()> {
        self.categories.retain(|c| !categories.contains(c));
        self.save()
    }

    fn master_categories(&self) -> HostResult<Vec<MasterCategory>> {
        Ok(CategoryRegistry::load(&self.registry_path).categories)
    }

    fn create_master_categories(&mut self, categories: &[MasterCategory]) -> HostResult<()> {
        let mut registry = CategoryRegistry::load(&self.registry_path);
        registry.merge(categories);
        registry
            .save(&self.registry_path)
            .map_err(|e| HostError::new(format!("could not save category registry: {e}")))
    }

    fn add_recipient(&mut self, field: RecipientField, contact: &Contact) -> HostResult<()> {
        match field {
            RecipientField::To => self.to.push(contact.clone()),
            RecipientField::Cc => self.cc.push(contact.clone()),
        }
        self.save()
    }

    fn custom_properties(&self) -> HostResult<Vec<(String, String)>> {
        Ok(self.properties.clone())
    }

    fn save_custom_properties(&mut self, properties: &[(String, String)]) -> HostResult<()> {
        for (key, value) in properties {
            match self.properties.iter_mut().find(|(k, _)| k == key) {
                Some(existing) => existing.1 = value.clone(),
                None => self.properties.push((key.clone(), value.clone())),
            }
        }
        self.save()
    }

    fn sender(&self) -> HostResult<Contact> {
        Ok(self.from.clone())
    }
}

/// First address from a parsed address header, or an empty contact.
fn first_contact(address: Option<&mail_parser::Address<'_>>) -> Contact {
    address
        .and_then(|a| a.first())
        .map(|addr| Contact {
            name: addr.name().unwrap_or("").to_string(),
            email: addr.address().unwrap_or("").to_string(),
        })
        .unwrap_or(Contact {
            name: String::new(),
            email: String::new(),
        })
}

/// Every address from a parsed address header.
fn all_contacts(address: Option<&mail_parser::Address<'_>>) -> Vec<Contact> {
    address
        .map(|a| {
            a.iter()
                .map(|addr| Contact {
                    name: addr.name().unwrap_or("").to_string(),
                    email: addr.address().unwrap_or("").to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Collect the raw header lines the host does not model, keeping folds
/// intact, so a rewrite carries them through verbatim.
fn preserved_headers(data: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(data);
    let mut out = Vec::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        if line.is_empty() {
            break;
        }
        // Continuation line: belongs to the header started above.
        if line.starts_with(' ') || line.starts_with('\t') {
            if let Some(ref mut header) = current {
                header.push_str("\r\n");
                header.push_str(line);
            }
            continue;
        }
        if let Some(header) = current.take() {
            out.push(header);
        }
        let Some((name, _)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim().to_ascii_lowercase();
        let keep = !REWRITTEN_HEADERS.contains(&name.as_str())
            && !name.starts_with("x-mailstamp-");
        if keep {
            current = Some(line.to_string());
        }
    }
    if let Some(header) = current {
        out.push(header);
    }
    out
}

/// Split a `Keywords:` header value on commas.
fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn join_contacts(contacts: &[Contact]) -> String {
    contacts
        .iter()
        .map(|c| c.display())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRAFT: &str = "From: Alice <alice@example.com>\r\n\
        To: Bob <bob@example.com>\r\n\
        Subject: [PROJECT-001] kickoff\r\n\
        Date: Mon, 5 Jan 2025 09:00:00 +0000\r\n\
        Keywords: Alpha Initiative, Status Update\r\n\
        X-Mailstamp-ProjectCode: PROJECT-001\r\n\
        MIME-Version: 1.0\r\n\
        Content-Type: text/plain; charset=utf-8\r\n\
        \r\n\
        Hello team,\r\nKickoff is Monday.\r\n";

    fn open_fixture() -> (EmlHost, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let draft = dir.path().join("draft.eml");
        std::fs::write(&draft, DRAFT).unwrap();
        let host = EmlHost::open(&draft, &dir.path().join("categories.toml")).unwrap();
        (host, dir)
    }

    #[test]
    fn test_open_parses_fields() {
        let (host, _dir) = open_fixture();
        assert_eq!(host.subject().unwrap(), "[PROJECT-001] kickoff");
        assert_eq!(host.sender().unwrap().email, "alice@example.com");
        assert_eq!(host.sender().unwrap().name, "Alice");
        assert!(host.body().unwrap().contains("Kickoff is Monday."));
        assert_eq!(
            host.categories().unwrap(),
            vec!["Alpha Initiative".to_string(), "Status Update".to_string()]
        );
        assert_eq!(
            host.custom_properties().unwrap(),
            vec![("ProjectCode".to_string(), "PROJECT-001".to_string())]
        );
    }

    #[test]
    fn test_set_subject_persists() {
        let (mut host, dir) = open_fixture();
        host.set_subject("[PROJECT-002] revised").unwrap();

        let reopened =
            EmlHost::open(&dir.path().join("draft.eml"), &dir.path().join("categories.toml"))
                .unwrap();
        assert_eq!(reopened.subject().unwrap(), "[PROJECT-002] revised");
        // Untouched fields survive the rewrite
        assert_eq!(reopened.sender().unwrap().email, "alice@example.com");
        assert!(reopened.body().unwrap().contains("Hello team,"));
    }

    #[test]
    fn test_add_and_remove_categories() {
        let (mut host, dir) = open_fixture();
        host.add_categories(&["Urgent".to_string(), "Alpha Initiative".to_string()])
            .unwrap();
        // Duplicate not re-added
        assert_eq!(
            host.categories().unwrap(),
            vec![
                "Alpha Initiative".to_string(),
                "Status Update".to_string(),
                "Urgent".to_string()
            ]
        );

        host.remove_categories(&["Status Update".to_string()]).unwrap();
        let reopened =
            EmlHost::open(&dir.path().join("draft.eml"), &dir.path().join("categories.toml"))
                .unwrap();
        assert_eq!(
            reopened.categories().unwrap(),
            vec!["Alpha Initiative".to_string(), "Urgent".to_string()]
        );
    }

    #[test]
    fn test_add_recipient_to_and_cc() {
        let (mut host, dir) = open_fixture();
        let client = Contact {
            name: "Acme".to_string(),
            email: "acme@client.example".to_string(),
        };
        let dev = Contact {
            name: "Dev".to_string(),
            email: "dev@example.com".to_string(),
        };
        host.add_recipient(RecipientField::To, &client).unwrap();
        host.add_recipient(RecipientField::Cc, &dev).unwrap();

        let reopened =
            EmlHost::open(&dir.path().join("draft.eml"), &dir.path().join("categories.toml"))
                .unwrap();
        assert_eq!(reopened.to.len(), 2);
        assert_eq!(reopened.to[1].email, "acme@client.example");
        assert_eq!(reopened.cc.len(), 1);
        assert_eq!(reopened.cc[0].email, "dev@example.com");
    }

    #[test]
    fn test_master_categories_via_registry() {
        let (mut host, dir) = open_fixture();
        assert!(host.master_categories().unwrap().is_empty());

        host.create_master_categories(&[MasterCategory {
            display_name: "Alpha Initiative".to_string(),
            color: "red".to_string(),
        }])
        .unwrap();

        let listed = host.master_categories().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].display_name, "Alpha Initiative");
        assert!(dir.path().join("categories.toml").exists());
    }

    #[test]
    fn test_custom_properties_replace_by_key() {
        let (mut host, _dir) = open_fixture();
        host.save_custom_properties(&[
            ("ProjectCode".to_string(), "PROJECT-002".to_string()),
            ("Priority".to_string(), "High".to_string()),
        ])
        .unwrap();

        let props = host.custom_properties().unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props[0], ("ProjectCode".to_string(), "PROJECT-002".to_string()));
        assert_eq!(props[1], ("Priority".to_string(), "High".to_string()));
    }

    #[test]
    fn test_rewrite_preserves_unmodeled_headers() {
        const REPLY: &str = "From: Alice <alice@example.com>\r\n\
            Message-ID: <abc@example.com>\r\n\
            In-Reply-To: <prev@example.com>\r\n\
            References: <root@example.com>\r\n\
            \t<prev@example.com>\r\n\
            Reply-To: Alice Alt <alt@example.com>\r\n\
            Subject: re: kickoff\r\n\
            \r\n\
            quoting you below\r\n";

        let dir = tempfile::tempdir().unwrap();
        let draft = dir.path().join("reply.eml");
        std::fs::write(&draft, REPLY).unwrap();

        let mut host = EmlHost::open(&draft, &dir.path().join("categories.toml")).unwrap();
        host.set_subject("[PROJECT-001] re: kickoff").unwrap();

        let rewritten = std::fs::read_to_string(&draft).unwrap();
        assert!(rewritten.contains("Message-ID: <abc@example.com>"));
        assert!(rewritten.contains("In-Reply-To: <prev@example.com>"));
        assert!(rewritten.contains("Reply-To: Alice Alt <alt@example.com>"));
        // Folded continuation survives as-is
        assert!(rewritten.contains("References: <root@example.com>\r\n\t<prev@example.com>"));

        // Stable across a second rewrite
        let mut reopened = EmlHost::open(&draft, &dir.path().join("categories.toml")).unwrap();
        reopened.set_body("new body").unwrap();
        let rewritten = std::fs::read_to_string(&draft).unwrap();
        assert_eq!(rewritten.matches("Message-ID:").count(), 1);
        assert!(rewritten.contains("In-Reply-To: <prev@example.com>"));
    }

    #[test]
    fn test_rewrite_does_not_duplicate_modeled_headers() {
        let (mut host, dir) = open_fixture();
        host.set_subject("changed").unwrap();

        let rewritten =
            std::fs::read_to_string(dir.path().join("draft.eml")).unwrap();
        for header in ["From:", "Subject:", "Keywords:", "X-Mailstamp-ProjectCode:"] {
            assert_eq!(
                rewritten.matches(header).count(),
                1,
                "'{header}' should appear exactly once"
            );
        }
    }

    #[test]
    fn test_empty_draft_is_blank() {
        let dir = tempfile::tempdir().unwrap();
        let draft = dir.path().join("empty.eml");
        std::fs::write(&draft, "").unwrap();
        let host = EmlHost::open(&draft, &dir.path().join("categories.toml")).unwrap();
        assert_eq!(host.subject().unwrap(), "");
        assert_eq!(host.body().unwrap(), "");
        assert!(host.categories().unwrap().is_empty());
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EmlHost::open(
            &dir.path().join("missing.eml"),
            &dir.path().join("categories.toml"),
        )
        .unwrap_err();
        assert!(matches!(err, StampError::Io { .. }));
    }
}
