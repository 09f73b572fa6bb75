//! Pre-composed section documents keyed by section name.
//!
//! Each document starts with a `---` header carrying `title`, `description` and
//! `tags`, followed by a topic-specific body. When a section definition's name
//! matches an entry here, the document is written verbatim.

mod framework;
mod library;
mod microservice;
mod onboarding;
mod runbook;

use std::collections::HashMap;
use std::sync::OnceLock;

const DOCUMENTS: &[(&str, &str)] = &[
    ("overview", runbook::OVERVIEW),
    ("deploy", runbook::DEPLOY),
    ("troubleshoot", runbook::TROUBLESHOOT),
    ("backup", runbook::BACKUP),
    ("maintenance", runbook::MAINTENANCE),
    ("monitoring", runbook::MONITORING),
    ("contacts", runbook::CONTACTS),
    ("setup-guide", onboarding::SETUP_GUIDE),
    ("codebase-walkthrough", onboarding::CODEBASE_WALKTHROUGH),
    ("dev-workflow", onboarding::DEV_WORKFLOW),
    ("coding-conventions", onboarding::CODING_CONVENTIONS),
    ("service-dependencies", microservice::SERVICE_DEPENDENCIES),
    ("api-contracts", microservice::API_CONTRACTS),
    ("health-checks", microservice::HEALTH_CHECKS),
    ("scaling", microservice::SCALING),
    ("api-reference", library::API_REFERENCE),
    ("usage-examples", library::USAGE_EXAMPLES),
    ("versioning", library::VERSIONING),
    ("publishing", library::PUBLISHING),
    ("contributing", library::CONTRIBUTING),
    ("getting-started", framework::GETTING_STARTED),
    ("plugin-system", framework::PLUGIN_SYSTEM),
    ("migration-guide", framework::MIGRATION_GUIDE),
];

/// Canonical order of the primary group's runbook topics.
pub const RUNBOOK_ORDER: &[&str] = &[
    "overview",
    "deploy",
    "troubleshoot",
    "backup",
    "maintenance",
    "monitoring",
    "contacts",
];

fn index() -> &'static HashMap<&'static str, &'static str> {
    static INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

    INDEX.get_or_init(|| DOCUMENTS.iter().copied().collect())
}

/// Built-in document for a section name, if one exists.
pub fn lookup(name: &str) -> Option<&'static str> {
    index().get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section;

    #[test]
    fn runbook_order_is_covered() {
        for name in RUNBOOK_ORDER {
            let doc = lookup(name).unwrap_or_else(|| panic!("missing document for {}", name));
            assert!(!doc.is_empty());
        }
    }

    #[test]
    fn every_document_has_a_closed_header() {
        for (name, doc) in DOCUMENTS {
            assert!(doc.starts_with("---\n"), "{} should open a header", name);
            assert!(doc[4..].contains("\n---\n"), "{} should close its header", name);
        }
    }

    #[test]
    fn every_document_parses_with_title_and_tags() {
        for (name, doc) in DOCUMENTS {
            let parsed = section::parse(name, "core", doc);
            assert!(!parsed.title.is_empty(), "{} should have a title", name);
            assert!(!parsed.tags.is_empty(), "{} should have tags", name);
            assert!(parsed.body.starts_with("# "), "{} body should open with a heading", name);
        }
    }

    #[test]
    fn names_are_unique() {
        assert_eq!(index().len(), DOCUMENTS.len());
    }

    #[test]
    fn unknown_name_is_absent() {
        assert!(lookup("not-a-topic").is_none());
        assert!(lookup("health-checks").is_some());
    }
}
