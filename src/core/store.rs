//! Storage for a manual directory.
//!
//! `ManualStore` is the seam between the section/scaffolding logic and the
//! filesystem. Paths handed to it are relative to the manual root and use `/`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::group;
use crate::utils::io;

pub const MARKDOWN_EXTENSION: &str = "md";

pub trait ManualStore {
    /// Absolute manual root (the `.pm` directory).
    fn root(&self) -> &Path;

    /// Group (subdirectory) names in group order. Missing root → empty.
    fn list_groups(&self) -> Result<Vec<String>>;

    /// Section names (extension stripped) in a group, sorted. Missing group → empty.
    fn list_sections(&self, group: &str) -> Result<Vec<String>>;

    /// Document text. Bytes that are not valid UTF-8 are replaced, never an error.
    fn read(&self, rel_path: &str) -> Result<String>;

    /// Every markdown file under the root, recursively, as `/`-separated
    /// relative paths in lexical order. Missing root → empty.
    fn list_markdown_files(&self) -> Result<Vec<String>>;

    /// Write only if nothing exists at `rel_path`. Returns whether a write happened.
    fn write_if_absent(&self, rel_path: &str, content: &str) -> Result<bool>;

    /// Create a directory and its parents. Idempotent.
    fn ensure_dir(&self, rel_path: &str) -> Result<()>;
}

/// Manual stored on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    pub fn resolve(&self, rel_path: &str) -> PathBuf {
        rel_path
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.root.clone(), |path, part| path.join(part))
    }

    fn entries(&self, dir: &Path, operation: &str) -> Result<Vec<fs::DirEntry>> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let to_error = |e: std::io::Error| {
            Error::internal_io(e.to_string(), Some(format!("{} {}", operation, dir.display())))
        };

        fs::read_dir(dir)
            .map_err(to_error)?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(to_error)
    }

    fn collect_markdown(&self, dir: &Path, prefix: &str, files: &mut Vec<String>) -> Result<()> {
        let mut entries = self.entries(dir, "scan")?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            let relative = if prefix.is_empty() {
                name
            } else {
                format!("{}/{}", prefix, name)
            };

            if path.is_dir() {
                self.collect_markdown(&path, &relative, files)?;
            } else if path.extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION) {
                files.push(relative);
            }
        }
        Ok(())
    }
}

impl ManualStore for LocalStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list_groups(&self) -> Result<Vec<String>> {
        let mut groups: Vec<String> = self
            .entries(&self.root, "list groups in")?
            .into_iter()
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .filter(|name| !name.starts_with('.'))
            .collect();

        groups.sort();
        group::sort_groups(&mut groups);
        Ok(groups)
    }

    fn list_sections(&self, group: &str) -> Result<Vec<String>> {
        let dir = self.resolve(group);
        let mut names: Vec<String> = self
            .entries(&dir, "list sections in")?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION))
            .filter_map(|path| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().to_string())
            })
            .collect();

        names.sort();
        Ok(names)
    }

    fn read(&self, rel_path: &str) -> Result<String> {
        io::read_file_lossy(&self.resolve(rel_path), "read")
    }

    fn list_markdown_files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        self.collect_markdown(&self.root, "", &mut files)?;
        Ok(files)
    }

    fn write_if_absent(&self, rel_path: &str, content: &str) -> Result<bool> {
        let path = self.resolve(rel_path);
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            io::ensure_dir(parent, "create directory")?;
        }
        io::write_file(&path, content, "write")?;
        Ok(true)
    }

    fn ensure_dir(&self, rel_path: &str) -> Result<()> {
        io::ensure_dir(&self.resolve(rel_path), "create directory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_root_lists_nothing() {
        let dir = tempdir().unwrap();
        let store = LocalStore::new(dir.path().join(".pm"));

        assert!(!store.exists());
        assert!(store.list_groups().unwrap().is_empty());
        assert!(store.list_sections("core").unwrap().is_empty());
    }

    #[test]
    fn groups_follow_group_order() {
        let dir = tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        for g in ["custom", "ops", "core", "infra", ".git"] {
            store.ensure_dir(g).unwrap();
        }
        fs::write(dir.path().join("README.md"), "stray").unwrap();

        assert_eq!(store.list_groups().unwrap(), vec!["core", "infra", "ops", "custom"]);
    }

    #[test]
    fn sections_are_markdown_stems_only() {
        let dir = tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        store.write_if_absent("core/deploy.md", "x").unwrap();
        store.write_if_absent("core/Backup.md", "x").unwrap();
        store.write_if_absent("core/notes.txt", "x").unwrap();
        store.ensure_dir("core/nested.md").unwrap();

        assert_eq!(store.list_sections("core").unwrap(), vec!["Backup", "deploy"]);
    }

    #[test]
    fn write_if_absent_never_overwrites() {
        let dir = tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        assert!(store.write_if_absent("core/deploy.md", "first").unwrap());
        assert!(!store.write_if_absent("core/deploy.md", "second").unwrap());
        assert_eq!(store.read("core/deploy.md").unwrap(), "first");
    }

    #[test]
    fn invalid_utf8_is_read_lossily() {
        let dir = tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        store.ensure_dir("core").unwrap();
        fs::write(dir.path().join("core").join("legacy.md"), b"caf\xe9 notes").unwrap();

        assert_eq!(store.read("core/legacy.md").unwrap(), "caf\u{FFFD} notes");
    }

    #[test]
    fn markdown_files_are_walked_recursively_in_order() {
        let dir = tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        store.write_if_absent("ops/deep/inner.md", "x").unwrap();
        store.write_if_absent("core/deploy.md", "x").unwrap();
        store.write_if_absent("README.md", "x").unwrap();
        store.write_if_absent("core/notes.txt", "x").unwrap();

        assert_eq!(
            store.list_markdown_files().unwrap(),
            vec!["README.md", "core/deploy.md", "ops/deep/inner.md"]
        );
        assert!(LocalStore::new(dir.path().join("absent"))
            .list_markdown_files()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let err = store.read("core/missing.md").unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
        assert!(err.message.contains("missing.md"));
    }
}
