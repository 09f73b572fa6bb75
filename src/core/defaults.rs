use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::paths;
use crate::utils::io;

/// Root configuration structure for ~/.config/pm/config.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PmConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// User-level defaults. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Defaults {
    /// Template identifier used by `pm init` when `--template` is omitted.
    #[serde(default)]
    pub template: String,

    /// Editor used by `pm edit` when neither $EDITOR nor $VISUAL is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

/// Load the user config. A missing file (or unknown home) yields defaults.
pub fn load_config() -> Result<PmConfig> {
    match paths::config_json() {
        Ok(path) => load_config_from(&path),
        Err(_) => Ok(PmConfig::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<PmConfig> {
    if !path.exists() {
        return Ok(PmConfig::default());
    }

    let raw = io::read_file(path, "read config")?;
    serde_json::from_str(&raw).map_err(|e| Error::config_invalid_json(path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.defaults.template, "");
        assert!(config.defaults.editor.is_none());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"defaults":{"editor":"nano"}}"#).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.defaults.editor.as_deref(), Some("nano"));
        assert_eq!(config.defaults.template, "");
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_json");
    }
}
