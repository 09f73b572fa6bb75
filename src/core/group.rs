//! Group ordering: primary group first, catch-all group last, everything else
//! alphabetical in between.

use std::cmp::Ordering;

/// Group that always sorts first and is searched first on lookup.
pub const PRIMARY_GROUP: &str = "core";

/// Group that always sorts last. Scaffolding creates it even when unused.
pub const CATCH_ALL_GROUP: &str = "custom";

/// Sort key for a group name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GroupKey<'a> {
    Primary,
    Named(&'a str),
    CatchAll,
}

pub fn sort_key(name: &str) -> GroupKey<'_> {
    match name {
        PRIMARY_GROUP => GroupKey::Primary,
        CATCH_ALL_GROUP => GroupKey::CatchAll,
        other => GroupKey::Named(other),
    }
}

pub fn compare(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Stable sort of group names by `sort_key`.
pub fn sort_groups<S: AsRef<str>>(groups: &mut [S]) {
    groups.sort_by(|a, b| compare(a.as_ref(), b.as_ref()));
}
