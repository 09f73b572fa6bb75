use crate::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the manual directory inside a project.
pub const MANUAL_DIR: &str = ".pm";

/// Manual directory for a project root.
pub fn manual(root: &Path) -> PathBuf {
    root.join(MANUAL_DIR)
}

/// Project root: the current working directory.
pub fn project_root() -> Result<PathBuf> {
    env::current_dir().map_err(|e| {
        Error::internal_io(e.to_string(), Some("resolve current directory".to_string()))
    })
}

/// Base pm config directory (~/.config/pm/ on Unix-like systems)
pub fn config_dir() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected("APPDATA environment variable not set on Windows")
        })?;
        Ok(PathBuf::from(appdata).join("pm"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected("HOME environment variable not set on Unix-like system")
        })?;
        Ok(PathBuf::from(home).join(".config").join("pm"))
    }
}

/// User config file path
pub fn config_json() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}
