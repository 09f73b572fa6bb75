//! Templates: named, ordered lists of section definitions used to scaffold a
//! manual. Resolution turns a preset name or a JSON file path into a validated
//! `Template`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::preset::{PresetRegistry, DEFAULT_PRESET};
use crate::utils::io;

static SECTION_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").unwrap());

/// Blueprint for one scaffolded section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl SectionDefinition {
    /// Path of the scaffolded file relative to the manual root.
    pub fn rel_path(&self) -> String {
        format!("{}/{}.md", self.group, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionDefinition>,
}

impl Template {
    /// Description for listings, falling back to the section count.
    pub fn summary(&self) -> String {
        match self.description.as_deref().filter(|d| !d.is_empty()) {
            Some(description) => description.to_string(),
            None => format!("{} section(s)", self.sections.len()),
        }
    }
}

/// Resolve a preset name or template file path.
///
/// Order: empty identifier → default preset; known preset name; existing file
/// (loaded and validated); otherwise `template.not_found`. A file sharing its
/// name with a preset is never reached, presets always win.
pub fn resolve(registry: &PresetRegistry, identifier: &str) -> Result<Template> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return registry.load_preset(DEFAULT_PRESET);
    }

    if let Some(preset) = registry.get(identifier) {
        return Ok(preset.clone());
    }

    let path = expand_path(identifier);
    if path.exists() {
        return load_file(&path);
    }

    Err(Error::template_not_found(identifier, registry.names()))
}

fn expand_path(identifier: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(identifier).into_owned())
}

/// Load a JSON template file and validate it.
pub fn load_file(path: &Path) -> Result<Template> {
    let source = path.display().to_string();
    let raw = io::read_file(path, "read template file")?;

    let template: Template = serde_json::from_str(&raw).map_err(|e| {
        Error::validation_invalid_json(e, Some(format!("parse template {}", source)))
    })?;

    validate(&template).map_err(|e| e.with_source(source))?;
    Ok(template)
}

/// Check the structural rules of an externally supplied template.
///
/// Reports the first violation found, naming the field and section index.
pub fn validate(template: &Template) -> Result<()> {
    if template.name.trim().is_empty() {
        return Err(Error::validation_invalid_template(
            "name",
            "template name is required",
            None,
        ));
    }

    if template.sections.is_empty() {
        return Err(Error::validation_invalid_template(
            "sections",
            "template must have at least one section",
            None,
        ));
    }

    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    for (i, def) in template.sections.iter().enumerate() {
        let field = |name: &str| format!("sections[{}].{}", i, name);

        if def.name.is_empty() {
            return Err(Error::validation_invalid_template(
                field("name"),
                format!("section[{}]: name is required", i),
                Some(i),
            ));
        }
        if !SECTION_NAME_PATTERN.is_match(&def.name) {
            return Err(Error::validation_invalid_template(
                field("name"),
                format!(
                    "section[{}]: name \"{}\" must match {}",
                    i,
                    def.name,
                    SECTION_NAME_PATTERN.as_str()
                ),
                Some(i),
            ));
        }
        if def.group.trim().is_empty() {
            return Err(Error::validation_invalid_template(
                field("group"),
                format!("section[{}]: group is required", i),
                Some(i),
            ));
        }
        if !is_single_component(&def.group) {
            return Err(Error::validation_invalid_template(
                field("group"),
                format!(
                    "section[{}]: group \"{}\" must be a single directory name",
                    i, def.group
                ),
                Some(i),
            ));
        }
        if def.title.trim().is_empty() {
            return Err(Error::validation_invalid_template(
                field("title"),
                format!("section[{}]: title is required", i),
                Some(i),
            ));
        }
        if def.title.trim() != def.title || def.title.contains(['\n', '\r']) {
            return Err(Error::validation_invalid_template(
                field("title"),
                format!(
                    "section[{}]: title must be a single line without surrounding whitespace",
                    i
                ),
                Some(i),
            ));
        }
        if let Some(tag) = def.tags.iter().find(|tag| !is_header_tag(tag)) {
            return Err(Error::validation_invalid_template(
                field("tags"),
                format!(
                    "section[{}]: tag \"{}\" must be non-empty, trimmed, and free of commas",
                    i, tag
                ),
                Some(i),
            ));
        }

        if !seen.insert((def.group.as_str(), def.name.as_str())) {
            return Err(Error::validation_invalid_template(
                field("name"),
                format!(
                    "duplicate section \"{}\" in group \"{}\"",
                    def.name, def.group
                ),
                Some(i),
            ));
        }
    }

    Ok(())
}

/// A tag that survives the comma-joined `tags:` header line unchanged.
fn is_header_tag(tag: &str) -> bool {
    !tag.is_empty() && tag.trim() == tag && !tag.contains([',', '\n', '\r'])
}

fn is_single_component(group: &str) -> bool {
    group != "." && group != ".." && !group.contains(['/', '\\'])
}
