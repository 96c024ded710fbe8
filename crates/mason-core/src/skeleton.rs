//! Default project skeleton: the tree mason generates when no template is
//! named.
//!
//! ```text
//! <project>/
//! ├── CMakeLists.txt
//! ├── include/
//! └── src/
//!     └── main.cpp
//! ```

use std::path::Path;

use crate::options::ProjectOptions;
use crate::structure::ProjectStructure;

/// File name of the build descriptor, both generated and required in
/// templates.
pub const BUILD_MANIFEST: &str = "CMakeLists.txt";

const STARTER_MAIN: &str =
    "#include <cstdio>\n\nint main(int argc, char* argv[]) {\n\tprintf(\"Hello, world!\\n\");\n}";

/// Plan the default skeleton for `options`, rooted at `project_dir`.
pub fn project_skeleton(options: &ProjectOptions, project_dir: &Path) -> ProjectStructure {
    let mut structure = ProjectStructure::new(project_dir);
    structure.add_directory("include");
    structure.add_directory("src");
    structure.add_file(BUILD_MANIFEST, build_manifest(options));
    structure.add_file("src/main.cpp", STARTER_MAIN.to_owned());
    structure
}

/// Render the CMakeLists.txt for a generated (non-template) project.
fn build_manifest(options: &ProjectOptions) -> String {
    let target = if options.shared {
        format!("add_library({} SHARED ${{SOURCE_FILES}})", options.binary_name())
    } else {
        format!("add_executable({} ${{SOURCE_FILES}})", options.binary_name())
    };

    format!(
        "cmake_minimum_required(VERSION 3.10)\n\n\
         project({}\n\t\tVERSION {}\n\t\tDESCRIPTION \"{}\"\n\t\tLANGUAGES CXX)\n\n\
         set(CMAKE_CXX_STANDARD 17)\n\
         set(CMAKE_CXX_STANDARD_REQUIRED ON)\n\n\
         include_directories(include)\n\n\
         file(GLOB_RECURSE SOURCE_FILES \"src/*.c*\")\n\
         {}",
        options.project_name,
        options.version(),
        options.description(),
        target,
    )
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest_for(options: &ProjectOptions) -> String {
        let structure = project_skeleton(options, Path::new("out/demo"));
        structure
            .files()
            .find(|f| f.path == Path::new(BUILD_MANIFEST))
            .map(|f| f.content.clone())
            .unwrap()
    }

    #[test]
    fn skeleton_has_the_expected_entries() {
        let structure = project_skeleton(&ProjectOptions::new("demo"), Path::new("demo"));

        assert!(structure.validate().is_ok());
        let dirs: Vec<_> = structure.directories().collect();
        assert_eq!(dirs.len(), 2);
        assert!(structure.files().any(|f| f.path == Path::new("src/main.cpp")));
        assert!(structure.files().any(|f| f.path == Path::new(BUILD_MANIFEST)));
    }

    #[test]
    fn executable_project_uses_add_executable() {
        let manifest = manifest_for(&ProjectOptions::new("demo"));
        assert!(manifest.contains("add_executable(demo ${SOURCE_FILES})"));
        assert!(!manifest.contains("add_library"));
    }

    #[test]
    fn shared_project_uses_add_library() {
        let options = ProjectOptions {
            shared: true,
            ..ProjectOptions::new("demo")
        };
        let manifest = manifest_for(&options);
        assert!(manifest.contains("add_library(demo SHARED ${SOURCE_FILES})"));
    }

    #[test]
    fn binary_name_overrides_target_but_not_project() {
        let options = ProjectOptions {
            binary_name: Some("custom".into()),
            ..ProjectOptions::new("demo")
        };
        let manifest = manifest_for(&options);
        assert!(manifest.contains("project(demo"));
        assert!(manifest.contains("add_executable(custom"));
    }

    #[test]
    fn version_and_description_land_in_the_manifest() {
        let options = ProjectOptions {
            version: Some("3.1.4".into()),
            description: Some("pi tool".into()),
            ..ProjectOptions::new("demo")
        };
        let manifest = manifest_for(&options);
        assert!(manifest.contains("VERSION 3.1.4"));
        assert!(manifest.contains("DESCRIPTION \"pi tool\""));
    }

    #[test]
    fn starter_main_prints_hello_world() {
        let structure = project_skeleton(&ProjectOptions::new("demo"), Path::new("demo"));
        let main = structure
            .files()
            .find(|f| f.path == Path::new("src/main.cpp"))
            .unwrap();
        assert!(main.content.contains("Hello, world!"));
    }
}
