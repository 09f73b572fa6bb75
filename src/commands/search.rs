use clap::Args;
use serde::Serialize;

use pm::search::{self, SearchMatch};

use super::{CmdResult, GlobalArgs};
use crate::output::{self, TextOutput};

#[derive(Args)]
pub struct SearchArgs {
    /// Keyword to look for, case-insensitive
    pub keyword: String,
}

#[derive(Serialize)]
pub struct SearchOutput {
    pub command: &'static str,
    pub keyword: String,
    pub count: usize,
    pub matches: Vec<SearchMatch>,
}

impl TextOutput for SearchOutput {
    fn to_text(&self) -> String {
        output::format::search_results(&self.matches)
    }
}

pub fn run(args: SearchArgs, _global: &GlobalArgs) -> CmdResult<SearchOutput> {
    let store = super::require_manual()?;
    let matches = search::search(&store, &args.keyword)?;

    Ok((
        SearchOutput {
            command: "search",
            keyword: args.keyword,
            count: matches.len(),
            matches,
        },
        0,
    ))
}
