//! Section documents: a `---` delimited header followed by a free-text body.
//!
//! Header grammar: the first line must be exactly `---` (after trimming) and a
//! later line closes the block. Lines in between are `key: value`, split at
//! the first colon. Only `title` and `tags` are recognized (case-insensitive);
//! everything else is dropped. Malformed headers never fail, they degrade to
//! "the whole text is the body".

use serde::Serialize;

pub const DELIMITER: &str = "---";

/// A parsed section document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub group: String,
    /// Raw header title, empty when the header does not set one.
    pub title: String,
    pub tags: Vec<String>,
    pub body: String,
}

impl Section {
    /// Title for display, falling back to the section name.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.name
        } else {
            &self.title
        }
    }

    /// `group/name`, the identifier used in listings and error messages.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.group, self.name)
    }

    /// Serialize header and body back into document text.
    ///
    /// `parse(name, group, &section.render())` yields an equal section as long
    /// as the body does not itself start with a blank line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(DELIMITER);
        out.push('\n');
        if !self.title.is_empty() {
            out.push_str("title: ");
            out.push_str(&self.title);
            out.push('\n');
        }
        if !self.tags.is_empty() {
            out.push_str("tags: ");
            out.push_str(&self.tags.join(", "));
            out.push('\n');
        }
        out.push_str(DELIMITER);
        out.push_str("\n\n");
        out.push_str(&self.body);
        out
    }
}

/// Parse raw document text into a `Section`. Never fails.
pub fn parse(name: &str, group: &str, raw: &str) -> Section {
    let mut section = Section {
        name: name.to_string(),
        group: group.to_string(),
        title: String::new(),
        tags: Vec::new(),
        body: String::new(),
    };

    let lines: Vec<&str> = raw.split('\n').collect();
    if lines[0].trim() != DELIMITER {
        section.body = raw.to_string();
        return section;
    }

    let Some(close) = lines
        .iter()
        .skip(1)
        .position(|line| line.trim() == DELIMITER)
        .map(|offset| offset + 1)
    else {
        // Unterminated header: keep everything, including the opening line.
        section.body = raw.to_string();
        return section;
    };

    for line in &lines[1..close] {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();

        match key.trim().to_lowercase().as_str() {
            "title" => section.title = value.to_string(),
            "tags" => section.tags.extend(split_tags(value)),
            _ => {}
        }
    }

    section.body = lines[close + 1..]
        .join("\n")
        .trim_start_matches(['\n', '\r'])
        .to_string();

    section
}

fn split_tags(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_title_tags_and_body() {
        let raw = "---\ntitle: Deployment Guide\ndescription: How to deploy\ntags: deploy, release, ci\n---\n\n# Deployment\n\nSteps here.";
        let s = parse("deploy", "core", raw);

        assert_eq!(s.name, "deploy");
        assert_eq!(s.group, "core");
        assert_eq!(s.title, "Deployment Guide");
        assert_eq!(s.tags, vec!["deploy", "release", "ci"]);
        assert_eq!(s.body, "# Deployment\n\nSteps here.");
    }

    #[test]
    fn concrete_header_example() {
        let s = parse("x", "core", "---\ntitle: X\ntags: a, b\n---\n\nBody line");
        assert_eq!(s.title, "X");
        assert_eq!(s.tags, vec!["a", "b"]);
        assert_eq!(s.body, "Body line");
    }

    #[test]
    fn no_header_keeps_whole_text() {
        let raw = "# Just markdown\n\nNo header here.";
        let s = parse("notes", "custom", raw);
        assert_eq!(s.title, "");
        assert!(s.tags.is_empty());
        assert_eq!(s.body, raw);
        assert_eq!(s.display_title(), "notes");
    }

    #[test]
    fn unterminated_header_becomes_body() {
        let s = parse("x", "core", "---\ntitle: Unclosed");
        assert_eq!(s.title, "");
        assert!(s.tags.is_empty());
        assert_eq!(s.body, "---\ntitle: Unclosed");
    }

    #[test]
    fn empty_text_is_empty_body() {
        let s = parse("empty", "core", "");
        assert_eq!(s.body, "");
        assert_eq!(s.title, "");
    }

    #[test]
    fn header_only_has_empty_body() {
        let s = parse("x", "core", "---\ntitle: Only\n---");
        assert_eq!(s.title, "Only");
        assert_eq!(s.body, "");
    }

    #[test]
    fn keys_are_case_insensitive_and_unknown_keys_dropped() {
        let s = parse(
            "x",
            "core",
            "---\nTITLE: Loud\nOwner: ops\nTags: one\nnot a pair\n---\nbody",
        );
        assert_eq!(s.title, "Loud");
        assert_eq!(s.tags, vec!["one"]);
        assert_eq!(s.body, "body");
    }

    #[test]
    fn value_split_at_first_colon() {
        let s = parse("x", "core", "---\ntitle: Ops: the sequel\n---\n");
        assert_eq!(s.title, "Ops: the sequel");
    }

    #[test]
    fn empty_tag_pieces_are_dropped() {
        let s = parse("x", "core", "---\ntags: a, , b,,c ,\n---\n");
        assert_eq!(s.tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn delimiters_tolerate_surrounding_whitespace() {
        let s = parse("x", "core", "  ---  \ntitle: Spaced\n --- \n\nbody");
        assert_eq!(s.title, "Spaced");
        assert_eq!(s.body, "body");
    }

    #[test]
    fn only_leading_blank_lines_are_stripped() {
        let s = parse("x", "core", "---\ntitle: T\n---\n\n\nfirst\n\n\nsecond\n");
        assert_eq!(s.body, "first\n\n\nsecond\n");
    }

    #[test]
    fn crlf_documents_parse() {
        let s = parse("x", "core", "---\r\ntitle: Windows\r\n---\r\n\r\nbody\r\n");
        assert_eq!(s.title, "Windows");
        assert_eq!(s.body, "body\r\n");
    }

    #[test]
    fn render_round_trips() {
        let original = parse(
            "deploy",
            "core",
            "---\ntitle: Deploy\ndescription: dropped\ntags: a, b\n---\n\n# Deploy\n\ntext\n",
        );
        let reparsed = parse("deploy", "core", &original.render());
        assert_eq!(reparsed, original);
    }

    #[test]
    fn render_round_trips_without_header_fields() {
        let original = parse("plain", "custom", "just text");
        let reparsed = parse("plain", "custom", &original.render());
        assert_eq!(reparsed, original);
    }
}
