use clap::Args;
use serde::Serialize;

use pm::{catalog, defaults, editor};

use super::{CmdResult, GlobalArgs};
use crate::output::TextOutput;

#[derive(Args)]
pub struct EditArgs {
    /// Section name, matched case-insensitively (e.g. deploy)
    pub section: String,
}

#[derive(Serialize)]
pub struct EditOutput {
    pub command: &'static str,
    pub section: String,
    pub path: String,
    pub editor: String,
}

impl TextOutput for EditOutput {
    fn to_text(&self) -> String {
        String::new()
    }
}

pub fn run(args: EditArgs, _global: &GlobalArgs) -> CmdResult<EditOutput> {
    let store = super::require_manual()?;
    let location = catalog::find_section(&store, &args.section)?;
    let path = store.resolve(&location.rel_path);

    let config = defaults::load_config()?;
    let editor_command = editor::from_env(config.defaults.editor.as_deref());

    pm::log_status!("edit", "Opening {} with {}", location.rel_path, editor_command);
    editor::open(&editor_command, &path)?;

    Ok((
        EditOutput {
            command: "edit",
            section: format!("{}/{}", location.group, location.name),
            path: path.display().to_string(),
            editor: editor_command,
        },
        0,
    ))
}
