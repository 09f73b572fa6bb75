//! Launching an external editor on a section file.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

const FALLBACK_EDITOR: &str = "vi";

/// Pick the editor command: $EDITOR, $VISUAL, the configured default, then `vi`.
pub fn resolve_editor(
    editor_env: Option<String>,
    visual_env: Option<String>,
    configured: Option<&str>,
) -> String {
    [editor_env, visual_env, configured.map(str::to_string)]
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Editor from the environment, falling back to `configured`.
pub fn from_env(configured: Option<&str>) -> String {
    resolve_editor(
        std::env::var("EDITOR").ok(),
        std::env::var("VISUAL").ok(),
        configured,
    )
}

/// Split an editor string into program and leading arguments (`code --wait`).
pub fn split_command(editor: &str) -> Option<(String, Vec<String>)> {
    let mut parts = editor.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Run the editor on `path`, inheriting the terminal, and wait for it.
pub fn open(editor: &str, path: &Path) -> Result<()> {
    let display_path = path.display().to_string();
    let (program, args) = split_command(editor).ok_or_else(|| {
        Error::editor_failed(editor, &display_path, None, Some("empty editor command".to_string()))
    })?;

    let status = Command::new(&program)
        .args(&args)
        .arg(path)
        .status()
        .map_err(|e| Error::editor_failed(editor, &display_path, None, Some(e.to_string())))?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::editor_failed(editor, &display_path, status.code(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_precedence() {
        let some = |s: &str| Some(s.to_string());
        assert_eq!(resolve_editor(some("nano"), some("code"), Some("hx")), "nano");
        assert_eq!(resolve_editor(None, some("code"), Some("hx")), "code");
        assert_eq!(resolve_editor(some("  "), None, Some("hx")), "hx");
        assert_eq!(resolve_editor(None, None, None), "vi");
    }

    #[test]
    fn split_command_keeps_arguments() {
        assert_eq!(
            split_command("code --wait"),
            Some(("code".to_string(), vec!["--wait".to_string()]))
        );
        assert_eq!(split_command("   "), None);
    }

    #[test]
    fn missing_program_is_editor_error() {
        let err = open("pm-test-no-such-editor-binary", Path::new("x.md")).unwrap_err();
        assert_eq!(err.code.as_str(), "editor.failed");
    }
}
