use std::path::Path;

use pm::{paths, LocalStore, ManualStore, PresetRegistry};

pub type CmdResult<T> = pm::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    pub presets: PresetRegistry,
}

/// Store over `.pm/` in the current directory, whether or not it exists yet.
pub(crate) fn manual_store() -> pm::Result<LocalStore> {
    Ok(LocalStore::new(paths::manual(&paths::project_root()?)))
}

/// Store over an existing `.pm/`; `manual.not_found` otherwise.
pub(crate) fn require_manual() -> pm::Result<LocalStore> {
    let store = manual_store()?;
    if !store.exists() {
        return Err(missing_manual(store.root()));
    }
    Ok(store)
}

pub(crate) fn missing_manual(manual_root: &Path) -> pm::Error {
    let project = manual_root.parent().unwrap_or(manual_root);
    pm::Error::manual_not_found(project.display().to_string())
}

pub mod edit;
pub mod init;
pub mod list;
pub mod open;
pub mod search;
pub mod summary;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

/// Dispatch a command to its handler and render the result as text.
macro_rules! dispatch_text {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_text($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: Option<crate::Commands>,
    global: &GlobalArgs,
) -> (pm::Result<serde_json::Value>, i32) {
    match command {
        None => dispatch!((), global, summary),
        Some(crate::Commands::Init(args)) => dispatch!(args, global, init),
        Some(crate::Commands::List(args)) => dispatch!(args, global, list),
        Some(crate::Commands::Open(args)) => dispatch!(args, global, open),
        Some(crate::Commands::Edit(args)) => dispatch!(args, global, edit),
        Some(crate::Commands::Search(args)) => dispatch!(args, global, search),
    }
}

pub(crate) fn run_text(
    command: Option<crate::Commands>,
    global: &GlobalArgs,
) -> (pm::Result<String>, i32) {
    match command {
        None => dispatch_text!((), global, summary),
        Some(crate::Commands::Init(args)) => dispatch_text!(args, global, init),
        Some(crate::Commands::List(args)) => dispatch_text!(args, global, list),
        Some(crate::Commands::Open(args)) => dispatch_text!(args, global, open),
        Some(crate::Commands::Edit(args)) => dispatch_text!(args, global, edit),
        Some(crate::Commands::Search(args)) => dispatch_text!(args, global, search),
    }
}
