//! Interactive prompts with bounded retries.
//!
//! The prompt functions work over any reader/writer so they can be driven by
//! tests. `PromptEngine` binds them to stdin/stderr and falls back to the
//! default answer when the session is not interactive.

use std::io::{self, BufRead, IsTerminal, Write};

use crate::error::{Error, Result};

/// Invalid answers tolerated before the default is used.
pub const MAX_ATTEMPTS: usize = 3;

/// A yes/no confirmation prompt.
pub struct YesNoPrompt {
    pub question: String,
    /// true = default yes [Y/n], false = default no [y/N]
    pub default: bool,
}

/// Select one option from a list.
pub struct SelectPrompt {
    pub question: String,
    pub options: Vec<SelectOption>,
    pub default_index: usize,
}

pub struct SelectOption {
    pub value: String,
    pub label: String,
}

fn read_answer(input: &mut dyn BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| Error::internal_io(e.to_string(), Some("read prompt answer".to_string())))?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn write_err(e: io::Error) -> Error {
    Error::internal_io(e.to_string(), Some("write prompt".to_string()))
}

/// Ask a yes/no question. Empty answer, EOF, or three invalid answers give the default.
pub fn confirm_yes_no(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    prompt: &YesNoPrompt,
) -> Result<bool> {
    let suffix = if prompt.default { "[Y/n]" } else { "[y/N]" };

    for _ in 0..MAX_ATTEMPTS {
        write!(output, "{} {} ", prompt.question, suffix).map_err(write_err)?;
        output.flush().map_err(write_err)?;

        let Some(answer) = read_answer(input)? else {
            return Ok(prompt.default);
        };

        match answer.to_lowercase().as_str() {
            "" => return Ok(prompt.default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "  Please enter y or n.").map_err(write_err)?,
        }
    }

    Ok(prompt.default)
}

/// Show numbered options and read a 1-based choice. Returns a 0-based index.
pub fn select_option(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    prompt: &SelectPrompt,
) -> Result<usize> {
    writeln!(output, "{}", prompt.question).map_err(write_err)?;
    for (i, option) in prompt.options.iter().enumerate() {
        writeln!(output, "  {}) {:<16} {}", i + 1, option.value, option.label)
            .map_err(write_err)?;
    }
    writeln!(output).map_err(write_err)?;

    for _ in 0..MAX_ATTEMPTS {
        write!(output, "Enter choice [{}]: ", prompt.default_index + 1).map_err(write_err)?;
        output.flush().map_err(write_err)?;

        let Some(answer) = read_answer(input)? else {
            return Ok(prompt.default_index);
        };
        if answer.is_empty() {
            return Ok(prompt.default_index);
        }

        match answer.parse::<usize>() {
            Ok(n) if (1..=prompt.options.len()).contains(&n) => return Ok(n - 1),
            _ => writeln!(
                output,
                "  Please enter a number between 1 and {}.",
                prompt.options.len()
            )
            .map_err(write_err)?,
        }
    }

    Ok(prompt.default_index)
}

/// Prompt runner bound to the process terminal.
pub struct PromptEngine {
    interactive: bool,
}

impl PromptEngine {
    /// Interactive when stdin is a terminal.
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }

    pub fn with_interactive(interactive: bool) -> Self {
        Self { interactive }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn yes_no(&self, prompt: &YesNoPrompt) -> Result<bool> {
        if !self.interactive {
            return Ok(prompt.default);
        }
        confirm_yes_no(&mut io::stdin().lock(), &mut io::stderr(), prompt)
    }

    pub fn select(&self, prompt: &SelectPrompt) -> Result<usize> {
        if !self.interactive {
            return Ok(prompt.default_index);
        }
        select_option(&mut io::stdin().lock(), &mut io::stderr(), prompt)
    }

    /// Display a message to stderr (only in interactive mode).
    pub fn message(&self, msg: &str) {
        if self.interactive {
            eprintln!("{}", msg);
        }
    }
}

impl Default for PromptEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn confirm(answers: &str, default: bool) -> bool {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let prompt = YesNoPrompt {
            question: "Continue?".to_string(),
            default,
        };
        confirm_yes_no(&mut input, &mut output, &prompt).unwrap()
    }

    fn select(answers: &str, default_index: usize) -> usize {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let prompt = SelectPrompt {
            question: "Select:".to_string(),
            options: ["default", "minimal"]
                .iter()
                .map(|v| SelectOption {
                    value: v.to_string(),
                    label: format!("{} runbook", v),
                })
                .collect(),
            default_index,
        };
        select_option(&mut input, &mut output, &prompt).unwrap()
    }

    #[test]
    fn confirm_reads_explicit_answers() {
        assert!(confirm("y\n", true));
        assert!(confirm("YES\n", false));
        assert!(!confirm("n\n", true));
        assert!(!confirm("No\n", false));
    }

    #[test]
    fn confirm_empty_or_eof_uses_default() {
        assert!(confirm("\n", true));
        assert!(!confirm("\n", false));
        assert!(confirm("", true));
        assert!(!confirm("", false));
    }

    #[test]
    fn confirm_retries_then_falls_back() {
        assert!(confirm("maybe\ny\n", false));
        assert!(!confirm("x\nn\n", true));
        assert!(confirm("a\nb\nc\n", true));
        assert!(!confirm("a\nb\nc\ny\n", false));
    }

    #[test]
    fn select_reads_choice() {
        assert_eq!(select("1\n", 0), 0);
        assert_eq!(select("2\n", 0), 1);
    }

    #[test]
    fn select_empty_or_eof_uses_default() {
        assert_eq!(select("\n", 0), 0);
        assert_eq!(select("\n", 1), 1);
        assert_eq!(select("", 0), 0);
    }

    #[test]
    fn select_retries_on_invalid_input() {
        assert_eq!(select("abc\n2\n", 0), 1);
        assert_eq!(select("5\n1\n", 1), 0);
        assert_eq!(select("0\n2\n", 0), 1);
        assert_eq!(select("x\ny\nz\n2\n", 0), 0);
    }

    #[test]
    fn select_lists_options() {
        let mut input = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();
        let prompt = SelectPrompt {
            question: "Select a template:".to_string(),
            options: vec![SelectOption {
                value: "default".to_string(),
                label: "Standard".to_string(),
            }],
            default_index: 0,
        };
        select_option(&mut input, &mut output, &prompt).unwrap();

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with("Select a template:\n  1) default"));
        assert!(shown.contains("Enter choice [1]: "));
    }

    #[test]
    fn non_interactive_engine_returns_defaults() {
        let engine = PromptEngine::with_interactive(false);
        let yes = YesNoPrompt {
            question: "Create?".to_string(),
            default: true,
        };
        assert!(engine.yes_no(&yes).unwrap());
    }
}
