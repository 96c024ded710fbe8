//! Template discovery.

use std::path::Path;

use crate::error::ScaffoldResult;
use crate::fs::Filesystem;

/// Names of the templates installed under `template_dir`.
///
/// Hidden entries (leading `.`) are skipped. A missing template directory
/// yields an empty list rather than an error — a fresh install simply has no
/// templates yet.
pub fn available_templates(
    filesystem: &dyn Filesystem,
    template_dir: &Path,
) -> ScaffoldResult<Vec<String>> {
    if !filesystem.is_dir(template_dir) {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for child in filesystem.read_dir(template_dir)? {
        let Some(name) = child.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        names.push(name.to_owned());
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFilesystem;

    #[test]
    fn lists_non_hidden_entries_sorted() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("templates/lua-5.4")).unwrap();
        fs.create_dir_all(Path::new("templates/basic")).unwrap();
        fs.create_dir_all(Path::new("templates/.git")).unwrap();

        let names = available_templates(&fs, Path::new("templates")).unwrap();
        assert_eq!(names, vec!["basic", "lua-5.4"]);
    }

    #[test]
    fn missing_template_directory_yields_empty_list() {
        let fs = MemoryFilesystem::new();
        let names = available_templates(&fs, Path::new("nowhere")).unwrap();
        assert!(names.is_empty());
    }
}
