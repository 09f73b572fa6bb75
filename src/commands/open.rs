use clap::Args;
use serde::Serialize;

use pm::{catalog, Section};

use super::{CmdResult, GlobalArgs};
use crate::output::{self, TextOutput};

#[derive(Args)]
pub struct OpenArgs {
    /// Section name, matched case-insensitively (e.g. deploy)
    pub section: String,
}

#[derive(Serialize)]
pub struct OpenOutput {
    pub command: &'static str,
    pub path: String,
    pub section: Section,
}

impl TextOutput for OpenOutput {
    fn to_text(&self) -> String {
        output::format::section_content(&self.section)
    }
}

pub fn run(args: OpenArgs, _global: &GlobalArgs) -> CmdResult<OpenOutput> {
    let store = super::require_manual()?;
    let location = catalog::find_section(&store, &args.section)?;
    let section = catalog::load(&store, &location)?;

    Ok((
        OpenOutput {
            command: "open",
            path: location.rel_path,
            section,
        },
        0,
    ))
}
