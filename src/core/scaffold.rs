//! Scaffolding: turn a resolved template into files under the manual root.
//!
//! Planning is pure. Applying the plan creates every referenced group
//! directory (plus the catch-all group) and writes each file only when it is
//! absent, so re-running a scaffold is a no-op.

use serde::Serialize;

use crate::boilerplate;
use crate::error::Result;
use crate::group::CATCH_ALL_GROUP;
use crate::store::ManualStore;
use crate::template::{SectionDefinition, Template};

const PLACEHOLDER: &str = "<!-- TODO: Document this section -->";

/// One file the scaffold will try to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub group: String,
    pub name: String,
    pub rel_path: String,
    #[serde(skip)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    pub template: String,
    /// Group directories to ensure, in first-reference order.
    pub groups: Vec<String>,
    pub files: Vec<PlannedFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub template: String,
    pub created: Vec<String>,
    pub skipped: Vec<String>,
}

/// Document text for a section definition.
///
/// A built-in document with the same name wins over the definition's own
/// metadata. Anything else gets a minimal header plus a placeholder body,
/// which parses back to the definition's title and tags for any definition
/// that passes `template::validate`.
pub fn generate_content(def: &SectionDefinition) -> String {
    if let Some(document) = boilerplate::lookup(&def.name) {
        return document.to_string();
    }

    let mut out = String::new();
    out.push_str("---\n");
    out.push_str(&format!("title: {}\n", def.title));
    if let Some(description) = def.description.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!("description: {}\n", description));
    }
    if !def.tags.is_empty() {
        out.push_str(&format!("tags: {}\n", def.tags.join(", ")));
    }
    out.push_str("---\n\n");
    out.push_str(&format!("# {}\n\n", def.title));
    out.push_str(PLACEHOLDER);
    out.push('\n');
    out
}

pub fn plan(template: &Template) -> ScaffoldPlan {
    let mut groups: Vec<String> = Vec::new();
    for def in &template.sections {
        if !groups.contains(&def.group) {
            groups.push(def.group.clone());
        }
    }
    if !groups.iter().any(|g| g == CATCH_ALL_GROUP) {
        groups.push(CATCH_ALL_GROUP.to_string());
    }

    let files = template
        .sections
        .iter()
        .map(|def| PlannedFile {
            group: def.group.clone(),
            name: def.name.clone(),
            rel_path: def.rel_path(),
            content: generate_content(def),
        })
        .collect();

    ScaffoldPlan {
        template: template.name.clone(),
        groups,
        files,
    }
}

/// Materialize a plan. Existing files are reported as skipped, never touched.
pub fn apply(plan: &ScaffoldPlan, store: &dyn ManualStore) -> Result<ScaffoldReport> {
    crate::log_status!(
        "init",
        "Scaffolding {} file(s) into {}",
        plan.files.len(),
        store.root().display()
    );
    for group in &plan.groups {
        store.ensure_dir(group)?;
    }

    let mut report = ScaffoldReport {
        template: plan.template.clone(),
        ..Default::default()
    };

    for file in &plan.files {
        if store.write_if_absent(&file.rel_path, &file.content)? {
            report.created.push(file.rel_path.clone());
        } else {
            report.skipped.push(file.rel_path.clone());
        }
    }

    Ok(report)
}
