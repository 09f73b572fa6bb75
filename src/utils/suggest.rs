//! Fuzzy matching for "did you mean" hints on unknown names.

use super::token;

/// Find the closest known name. Returns (matched_name, is_exact).
///
/// Checks, in order: case-insensitive equality, prefix, suffix, then
/// Levenshtein distance of at most 3.
pub fn closest_match(input: &str, candidates: &[String]) -> Option<(String, bool)> {
    let input_folded = token::fold(input);
    if input_folded.is_empty() {
        return None;
    }

    let folded: Vec<(String, &String)> = candidates
        .iter()
        .map(|candidate| (token::fold(candidate), candidate))
        .collect();

    if let Some((_, candidate)) = folded.iter().find(|(f, _)| *f == input_folded) {
        return Some(((*candidate).clone(), true));
    }

    if let Some((_, candidate)) = folded.iter().find(|(f, _)| f.starts_with(&input_folded)) {
        return Some(((*candidate).clone(), false));
    }

    if let Some((_, candidate)) = folded.iter().find(|(f, _)| f.ends_with(&input_folded)) {
        return Some(((*candidate).clone(), false));
    }

    folded
        .iter()
        .map(|(f, candidate)| (levenshtein(&input_folded, f), *candidate))
        .filter(|(dist, _)| *dist > 0 && *dist <= 3)
        .min_by_key(|(dist, _)| *dist)
        .map(|(_, candidate)| (candidate.clone(), false))
}

/// "Did you mean ...?" hint text for a near miss, if any.
pub fn did_you_mean(input: &str, candidates: &[String]) -> Option<String> {
    match closest_match(input, candidates) {
        Some((name, false)) => Some(format!("Did you mean '{}'?", name)),
        _ => None,
    }
}

/// Simple Levenshtein distance implementation.
fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0usize; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b_len {
        matrix[0][j] = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_match_ignores_case() {
        let result = closest_match("DEPLOY", &names(&["overview", "deploy"]));
        assert_eq!(result, Some(("deploy".to_string(), true)));
    }

    #[test]
    fn prefix_match_is_not_exact() {
        let result = closest_match("trouble", &names(&["troubleshoot"]));
        assert_eq!(result, Some(("troubleshoot".to_string(), false)));
    }

    #[test]
    fn typo_within_distance_is_suggested() {
        assert_eq!(
            did_you_mean("depoly", &names(&["overview", "deploy"])),
            Some("Did you mean 'deploy'?".to_string())
        );
    }

    #[test]
    fn unrelated_input_has_no_suggestion() {
        assert_eq!(did_you_mean("zzzzzzzz", &names(&["deploy"])), None);
    }

    #[test]
    fn levenshtein_basic() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
    }
}
