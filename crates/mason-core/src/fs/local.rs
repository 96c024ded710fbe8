//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::fs::Filesystem;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> ScaffoldResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            children.push(entry.path());
        }
        // std::fs::read_dir order is platform-dependent; sort for stable output.
        children.sort();
        Ok(children)
    }

    fn remove_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ScaffoldError {
    ScaffoldError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_file_through_a_temp_dir() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let dir = temp.path().join("a/b");
        fs.create_dir_all(&dir).unwrap();
        assert!(fs.is_dir(&dir));

        let file = dir.join("hello.txt");
        fs.write_file(&file, "hi").unwrap();
        assert!(fs.exists(&file));
        assert_eq!(fs.read_to_string(&file).unwrap(), "hi");
    }

    #[test]
    fn read_dir_is_sorted() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        fs.write_file(&temp.path().join("b.txt"), "").unwrap();
        fs.write_file(&temp.path().join("a.txt"), "").unwrap();
        fs.create_dir_all(&temp.path().join("c")).unwrap();

        let children = fs.read_dir(temp.path()).unwrap();
        let names: Vec<_> = children
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c"]);
    }

    #[test]
    fn missing_file_read_maps_to_filesystem_error() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let err = fs.read_to_string(&temp.path().join("absent")).unwrap_err();
        assert!(matches!(err, ScaffoldError::Filesystem { .. }));
    }

    #[test]
    fn remove_dir_all_removes_recursively() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let root = temp.path().join("proj");
        fs.create_dir_all(&root.join("src")).unwrap();
        fs.write_file(&root.join("src/main.cpp"), "x").unwrap();

        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }
}
