//! Reading sections back out of a manual: loading, listing and name lookup.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::section::{self, Section};
use crate::store::{ManualStore, MARKDOWN_EXTENSION};
use crate::utils::{suggest, token};

/// Where a section lives inside the manual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionLocation {
    pub group: String,
    /// On-disk name, case preserved.
    pub name: String,
    pub rel_path: String,
}

impl SectionLocation {
    fn new(group: &str, name: &str) -> Self {
        Self {
            group: group.to_string(),
            name: name.to_string(),
            rel_path: format!("{}/{}.{}", group, name, MARKDOWN_EXTENSION),
        }
    }
}

/// Every `group/name` in the manual, in group order.
pub fn qualified_names(store: &dyn ManualStore) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for group in store.list_groups()? {
        for name in store.list_sections(&group)? {
            names.push(format!("{}/{}", group, name));
        }
    }
    Ok(names)
}

/// Find a section by bare name, case-insensitively.
///
/// Groups are searched in group order, so the primary group shadows any
/// same-named section elsewhere.
pub fn find_section(store: &dyn ManualStore, query: &str) -> Result<SectionLocation> {
    let needle = token::fold(query.trim());

    let mut bare_names = Vec::new();
    for group in store.list_groups()? {
        for name in store.list_sections(&group)? {
            if token::eq_folded(&name, &needle) {
                return Ok(SectionLocation::new(&group, &name));
            }
            bare_names.push(name);
        }
    }

    let mut err = Error::section_not_found(query, qualified_names(store)?);
    if let Some(hint) = suggest::did_you_mean(query, &bare_names) {
        err = err.with_hint(hint);
    }
    Err(err)
}

pub fn load(store: &dyn ManualStore, location: &SectionLocation) -> Result<Section> {
    let raw = store.read(&location.rel_path)?;
    Ok(section::parse(&location.name, &location.group, &raw))
}

/// Parse every section of one group. An absent group is an error.
pub fn load_group(store: &dyn ManualStore, group: &str) -> Result<Vec<Section>> {
    let groups = store.list_groups()?;
    if !groups.iter().any(|g| g == group) {
        let mut err = Error::group_not_found(group, groups.clone());
        if let Some(hint) = suggest::did_you_mean(group, &groups) {
            err = err.with_hint(hint);
        }
        return Err(err);
    }

    load_sections(store, group)
}

/// Parse every section of every group, in group order.
pub fn load_all(store: &dyn ManualStore) -> Result<Vec<Section>> {
    let mut sections = Vec::new();
    for group in store.list_groups()? {
        sections.extend(load_sections(store, &group)?);
    }
    Ok(sections)
}

fn load_sections(store: &dyn ManualStore, group: &str) -> Result<Vec<Section>> {
    store
        .list_sections(group)?
        .iter()
        .map(|name| load(store, &SectionLocation::new(group, name)))
        .collect()
}
