//! Planned project structure ready for materialization.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::{ScaffoldError, ScaffoldResult};

/// Final project structure ready for the filesystem.
///
/// Output of skeleton generation; contains no business logic, only data.
/// Entry paths are relative to `root`.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub root: PathBuf,
    entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(path.into()));
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Reject empty plans, duplicate paths, and absolute entry paths.
    pub fn validate(&self) -> ScaffoldResult<()> {
        if self.entries.is_empty() {
            return Err(ScaffoldError::InvalidStructure {
                reason: "project structure is empty".into(),
            });
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = match entry {
                FsEntry::File(f) => &f.path,
                FsEntry::Directory(d) => d,
            };

            if !seen.insert(path.clone()) {
                return Err(ScaffoldError::InvalidStructure {
                    reason: format!("duplicate path: {}", path.display()),
                });
            }

            if path.is_absolute() {
                return Err(ScaffoldError::InvalidStructure {
                    reason: format!("absolute paths not allowed: {}", path.display()),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(PathBuf),
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}
