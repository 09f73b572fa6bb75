//! Bare `pm`: summarize an existing manual or offer to create one.

use serde::Serialize;

use pm::prompt::{PromptEngine, SelectOption, SelectPrompt, YesNoPrompt};
use pm::scaffold::{self, ScaffoldReport};
use pm::{catalog, preset::DEFAULT_PRESET, ManualStore};

use super::list::SectionSummary;
use super::{CmdResult, GlobalArgs};
use crate::output::{self, TextOutput};

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum SummaryOutput {
    #[serde(rename = "summary")]
    Summary { sections: Vec<SectionSummary> },
    #[serde(rename = "init")]
    Initialized { report: ScaffoldReport },
    #[serde(rename = "summary.declined")]
    Declined,
}

impl TextOutput for SummaryOutput {
    fn to_text(&self) -> String {
        match self {
            SummaryOutput::Summary { sections } => output::format::project_summary(sections),
            SummaryOutput::Initialized { report } => output::format::scaffold_report(report),
            SummaryOutput::Declined => String::new(),
        }
    }
}

pub fn run(_args: (), global: &GlobalArgs) -> CmdResult<SummaryOutput> {
    let store = super::manual_store()?;

    if store.exists() {
        let sections = catalog::load_all(&store)?
            .iter()
            .map(SectionSummary::from)
            .collect();
        return Ok((SummaryOutput::Summary { sections }, 0));
    }

    let prompts = PromptEngine::new();
    if !prompts.is_interactive() {
        return Err(super::missing_manual(store.root()));
    }

    prompts.message("No .pm/ directory found in the current directory.\n");

    let create = prompts.yes_no(&YesNoPrompt {
        question: "Would you like to create one?".to_string(),
        default: true,
    })?;
    if !create {
        prompts.message("Run 'pm init' to create one when you're ready.");
        return Ok((SummaryOutput::Declined, 0));
    }
    prompts.message("");

    let presets = global.presets.list_presets();
    let default_index = presets
        .iter()
        .position(|t| t.name == DEFAULT_PRESET)
        .unwrap_or(0);

    let choice = prompts.select(&SelectPrompt {
        question: "Select a template:".to_string(),
        options: presets
            .iter()
            .map(|t| SelectOption {
                value: t.name.clone(),
                label: t.summary(),
            })
            .collect(),
        default_index,
    })?;
    prompts.message("");

    let template = presets
        .get(choice)
        .ok_or_else(|| pm::Error::internal_unexpected(format!("no preset at index {}", choice)))?;
    let report = scaffold::apply(&scaffold::plan(template), &store)?;

    Ok((SummaryOutput::Initialized { report }, 0))
}
