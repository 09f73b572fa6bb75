use clap::Args;
use serde::Serialize;

use pm::{catalog, Section};

use super::{CmdResult, GlobalArgs};
use crate::output::{self, TextOutput};

#[derive(Args)]
pub struct ListArgs {
    /// Only list sections in this group (e.g. core, custom)
    pub group: Option<String>,
}

/// A section without its body, for listings.
#[derive(Debug, Clone, Serialize)]
pub struct SectionSummary {
    pub group: String,
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl From<&Section> for SectionSummary {
    fn from(section: &Section) -> Self {
        Self {
            group: section.group.clone(),
            name: section.name.clone(),
            title: section.display_title().to_string(),
            tags: section.tags.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct ListOutput {
    pub command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub sections: Vec<SectionSummary>,
}

impl TextOutput for ListOutput {
    fn to_text(&self) -> String {
        output::format::section_list(&self.sections)
    }
}

pub fn run(args: ListArgs, _global: &GlobalArgs) -> CmdResult<ListOutput> {
    let store = super::require_manual()?;

    let group = args
        .group
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty());

    let sections = match &group {
        Some(group) => catalog::load_group(&store, group)?,
        None => catalog::load_all(&store)?,
    };

    Ok((
        ListOutput {
            command: "list",
            group,
            sections: sections.iter().map(SectionSummary::from).collect(),
        },
        0,
    ))
}
