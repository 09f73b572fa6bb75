//! String comparison and normalization.

/// Canonical case fold used for every case-insensitive comparison.
pub fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Case-insensitive equality against an already folded needle.
pub fn eq_folded(candidate: &str, folded_needle: &str) -> bool {
    fold(candidate) == folded_needle
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_lowercases() {
        assert_eq!(fold("DePloy"), "deploy");
    }

    #[test]
    fn eq_folded_ignores_candidate_case() {
        let needle = fold("DEPLOY");
        assert!(eq_folded("Deploy", &needle));
        assert!(eq_folded("deploy", &needle));
        assert!(!eq_folded("deploys", &needle));
    }

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(capitalize("core"), "Core");
        assert_eq!(capitalize("my-group"), "My-group");
        assert_eq!(capitalize(""), "");
    }
}
