//! Case-insensitive keyword search across every markdown file in a manual.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::store::ManualStore;
use crate::utils::token;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    /// Path relative to the manual root, `/` separated.
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// Matched line, trimmed.
    pub content: String,
}

pub fn search(store: &dyn ManualStore, keyword: &str) -> Result<Vec<SearchMatch>> {
    if keyword.is_empty() {
        return Err(Error::validation_missing_argument(vec!["keyword".to_string()]));
    }

    let files = store.list_markdown_files()?;
    crate::log_status!("search", "Scanning {} file(s)", files.len());

    let needle = token::fold(keyword);
    let mut matches = Vec::new();
    for file in files {
        let content = store.read(&file)?;
        for (index, line) in content.lines().enumerate() {
            if token::fold(line).contains(&needle) {
                matches.push(SearchMatch {
                    file: file.clone(),
                    line: index + 1,
                    content: line.trim().to_string(),
                });
            }
        }
    }

    Ok(matches)
}
