use clap::Args;
use serde::Serialize;

use pm::scaffold::{self, ScaffoldReport};
use pm::{defaults, template, Template};

use super::{CmdResult, GlobalArgs};
use crate::output::{self, TextOutput};

#[derive(Args)]
pub struct InitArgs {
    /// Template preset name or path to a JSON template file
    #[arg(long, value_name = "NAME|PATH")]
    pub template: Option<String>,

    /// List available template presets
    #[arg(long)]
    pub list_templates: bool,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum InitOutput {
    #[serde(rename = "init.templates")]
    Templates { templates: Vec<Template> },
    #[serde(rename = "init")]
    Scaffolded { report: ScaffoldReport },
}

impl TextOutput for InitOutput {
    fn to_text(&self) -> String {
        match self {
            InitOutput::Templates { templates } => output::format::template_list(templates),
            InitOutput::Scaffolded { report } => output::format::scaffold_report(report),
        }
    }
}

pub fn run(args: InitArgs, global: &GlobalArgs) -> CmdResult<InitOutput> {
    if args.list_templates {
        let templates = global.presets.list_presets().into_iter().cloned().collect();
        return Ok((InitOutput::Templates { templates }, 0));
    }

    // An omitted flag falls back to the configured default, then to the default preset.
    let identifier = match args.template {
        Some(identifier) => identifier,
        None => defaults::load_config()?.defaults.template,
    };

    let template = template::resolve(&global.presets, &identifier)?;
    let store = super::manual_store()?;
    let report = scaffold::apply(&scaffold::plan(&template), &store)?;

    Ok((InitOutput::Scaffolded { report }, 0))
}
