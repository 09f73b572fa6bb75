//! Built-in template presets.
//!
//! The registry is built once at startup and handed to whatever needs it.
//! Presets are valid by construction and are not re-validated on use.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::group::PRIMARY_GROUP;
use crate::template::{SectionDefinition, Template};

pub const DEFAULT_PRESET: &str = "default";

/// (name, title, description, tags) for every curated section.
const DEFINITIONS: &[(&str, &str, &str, &[&str])] = &[
    ("overview", "Project Overview", "High-level summary of this project", &["overview", "architecture"]),
    ("deploy", "Deployment Guide", "Step-by-step deployment procedures", &["deploy", "release"]),
    ("troubleshoot", "Troubleshooting Guide", "Common issues and resolution steps", &["troubleshoot", "incident", "debug"]),
    ("backup", "Backup & Recovery", "Backup procedures and disaster recovery", &["backup", "recovery", "disaster"]),
    ("maintenance", "Maintenance Procedures", "Routine maintenance tasks and schedules", &["maintenance", "cron", "cleanup"]),
    ("monitoring", "Monitoring & Alerts", "Monitoring setup, dashboards, and alert runbooks", &["monitoring", "alerts", "metrics"]),
    ("contacts", "Contacts & Escalation", "Team contacts and escalation procedures", &["contacts", "oncall", "escalation"]),
    ("setup-guide", "Setup Guide", "Local development environment setup instructions", &["setup", "install", "environment"]),
    ("codebase-walkthrough", "Codebase Walkthrough", "Guided tour of the project structure and key modules", &["codebase", "structure", "architecture"]),
    ("dev-workflow", "Development Workflow", "Day-to-day development process and branch strategy", &["workflow", "git", "branching"]),
    ("coding-conventions", "Coding Conventions", "Code style, naming, and best practices for this project", &["conventions", "style", "standards"]),
    ("service-dependencies", "Service Dependencies", "Upstream and downstream service dependencies", &["dependencies", "services", "integration"]),
    ("api-contracts", "API Contracts", "API endpoints, schemas, and contract specifications", &["api", "contracts", "schema"]),
    ("health-checks", "Health Checks", "Service health check endpoints and liveness/readiness probes", &["health", "probes", "liveness", "readiness"]),
    ("scaling", "Scaling Guide", "Horizontal and vertical scaling strategies", &["scaling", "performance", "capacity"]),
    ("api-reference", "API Reference", "Public API surface and usage documentation", &["api", "reference", "documentation"]),
    ("usage-examples", "Usage Examples", "Practical examples and common use cases", &["examples", "usage", "quickstart"]),
    ("versioning", "Versioning", "Version strategy, changelog, and compatibility policy", &["versioning", "semver", "changelog"]),
    ("publishing", "Publishing", "Release and publishing procedures", &["publishing", "release", "distribution"]),
    ("contributing", "Contributing", "Guidelines for contributing to this project", &["contributing", "guidelines", "community"]),
    ("getting-started", "Getting Started", "Quick start guide for new users of this framework", &["getting-started", "quickstart", "tutorial"]),
    ("plugin-system", "Plugin System", "Plugin architecture, extension points, and authoring guide", &["plugins", "extensions", "hooks"]),
    ("migration-guide", "Migration Guide", "Upgrade paths and breaking change migration instructions", &["migration", "upgrade", "breaking-changes"]),
];

/// (name, description, section names) for every preset.
const PRESETS: &[(&str, &str, &[&str])] = &[
    (
        "default",
        "Standard runbook with 7 core sections",
        &["overview", "deploy", "troubleshoot", "backup", "maintenance", "monitoring", "contacts"],
    ),
    (
        "minimal",
        "Minimal runbook with 3 essential sections",
        &["overview", "deploy", "contacts"],
    ),
    (
        "onboarding",
        "New developer onboarding with 6 sections",
        &["overview", "setup-guide", "codebase-walkthrough", "dev-workflow", "coding-conventions", "contacts"],
    ),
    (
        "microservice",
        "Microservice runbook with 9 sections",
        &[
            "overview",
            "service-dependencies",
            "api-contracts",
            "health-checks",
            "scaling",
            "deploy",
            "monitoring",
            "troubleshoot",
            "contacts",
        ],
    ),
    (
        "library",
        "Library/package documentation with 7 sections",
        &["overview", "api-reference", "usage-examples", "versioning", "publishing", "contributing", "contacts"],
    ),
    (
        "framework",
        "Framework documentation with 7 sections",
        &["overview", "getting-started", "plugin-system", "migration-guide", "contributing", "versioning", "contacts"],
    ),
];

/// Immutable set of built-in presets, keyed and ordered by name.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: BTreeMap<String, Template>,
}

impl PresetRegistry {
    pub fn builtin() -> Self {
        let presets = PRESETS
            .iter()
            .map(|(name, description, sections)| {
                let template = Template {
                    name: name.to_string(),
                    description: Some(description.to_string()),
                    sections: sections.iter().filter_map(|s| definition(s)).collect(),
                };
                (name.to_string(), template)
            })
            .collect();

        Self { presets }
    }

    /// Every preset, alphabetical by name.
    pub fn list_presets(&self) -> Vec<&Template> {
        self.presets.values().collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.presets.keys().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.presets.get(name)
    }

    pub fn load_preset(&self, name: &str) -> Result<Template> {
        self.get(name)
            .cloned()
            .ok_or_else(|| Error::preset_not_found(name, self.names()))
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn definition(name: &str) -> Option<SectionDefinition> {
    DEFINITIONS
        .iter()
        .find(|(n, ..)| *n == name)
        .map(|(name, title, description, tags)| SectionDefinition {
            name: name.to_string(),
            group: PRIMARY_GROUP.to_string(),
            title: title.to_string(),
            description: Some(description.to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        })
}
