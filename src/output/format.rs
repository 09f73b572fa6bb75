//! Human-readable renderings of command output.

use std::fmt::Write;

use pm::scaffold::ScaffoldReport;
use pm::search::SearchMatch;
use pm::token;
use pm::{Section, Template};

use crate::commands::list::SectionSummary;

/// Command output that can be printed for a person instead of as JSON.
pub trait TextOutput {
    fn to_text(&self) -> String;
}

/// Sections grouped under `<Group> sections:` headers, groups in first-appearance order.
pub fn section_list(sections: &[SectionSummary]) -> String {
    let mut groups: Vec<&str> = Vec::new();
    for section in sections {
        if !groups.contains(&section.group.as_str()) {
            groups.push(&section.group);
        }
    }

    if groups.is_empty() {
        return "No sections found.\n".to_string();
    }

    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{} sections:", token::capitalize(group));
        for section in sections.iter().filter(|s| s.group == *group) {
            let _ = writeln!(out, "  {:<16} {}", section.name, section.title);
        }
    }
    out
}

pub fn template_list(templates: &[Template]) -> String {
    let mut out = String::from("Available templates:\n\n");
    for template in templates {
        let _ = writeln!(out, "  {:<16} {}", template.name, template.summary());
        for def in &template.sections {
            let _ = writeln!(out, "{:21}- {}/{}", "", def.group, def.name);
        }
        out.push('\n');
    }
    out.push_str("Usage:\n");
    out.push_str("  pm init --template <name>        Use a built-in preset\n");
    out.push_str("  pm init --template <path.json>   Use a custom template file\n");
    out
}

/// grep-style `file:line: content` lines followed by a match count.
pub fn search_results(matches: &[SearchMatch]) -> String {
    if matches.is_empty() {
        return "No matches found.\n".to_string();
    }

    let mut out = String::new();
    for m in matches {
        let _ = writeln!(out, "{}:{}: {}", m.file, m.line, m.content);
    }
    let _ = writeln!(out, "\n{} match(es) found.", matches.len());
    out
}

/// `[group/name]`, a dashed rule sized to the title plus the label parts, then the body.
pub fn section_content(section: &Section) -> String {
    let rule = section.display_title().len() + section.group.len() + section.name.len() + 3;
    let mut out = String::new();
    let _ = writeln!(out, "[{}]", section.qualified_name());
    let _ = writeln!(out, "{}", "-".repeat(rule));
    out.push('\n');
    let _ = writeln!(out, "{}", section.body);
    out
}

pub fn project_summary(sections: &[SectionSummary]) -> String {
    let mut out = String::from("Project manual (.pm/) detected.\n\n");
    out.push_str(&section_list(sections));
    out.push('\n');
    out.push_str("Usage:\n");
    out.push_str("  pm open <section>    Open a section\n");
    out.push_str("  pm list              List all sections\n");
    out.push_str("  pm search <keyword>  Search across sections\n");
    out
}

pub fn scaffold_report(report: &ScaffoldReport) -> String {
    let mut out = String::new();
    for path in &report.created {
        let _ = writeln!(out, "  created: {}", path);
    }
    for path in &report.skipped {
        let _ = writeln!(out, "  exists:  {} (skipped)", path);
    }
    out.push('\n');
    let _ = writeln!(
        out,
        "Initialized .pm/ with \"{}\" template: {} file(s) created, {} skipped.",
        report.template,
        report.created.len(),
        report.skipped.len()
    );
    out.push_str("Edit the files in .pm/ to document your project.\n");
    out
}
