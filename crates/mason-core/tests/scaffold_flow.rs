//! Integration tests for mason-core: full scaffold workflows through the
//! public prelude, against the in-memory filesystem.

use std::path::Path;

use mason_core::prelude::*;

#[test]
fn full_default_scaffold_workflow() {
    let filesystem = MemoryFilesystem::new();
    filesystem.create_dir_all(Path::new("/output")).unwrap();

    let service = ScaffoldService::new(Box::new(filesystem.clone()));

    let options = ProjectOptions {
        description: Some("integration demo".into()),
        ..ProjectOptions::new("test-project")
    };

    let project_dir = service
        .scaffold(&options, Path::new("/output"), Path::new("/templates"))
        .unwrap();

    assert_eq!(project_dir, Path::new("/output/test-project"));
    assert!(filesystem.exists("/output/test-project".as_ref()));
    assert!(filesystem.exists("/output/test-project/src/main.cpp".as_ref()));
    assert!(filesystem.is_dir("/output/test-project/include".as_ref()));

    let manifest = filesystem
        .read_file("/output/test-project/CMakeLists.txt".as_ref())
        .unwrap();
    assert!(manifest.contains("project(test-project"));
    assert!(manifest.contains("DESCRIPTION \"integration demo\""));
}

#[test]
fn full_template_scaffold_workflow() {
    let filesystem = MemoryFilesystem::new();
    filesystem.create_dir_all(Path::new("/output")).unwrap();
    filesystem
        .create_dir_all(Path::new("/templates/lua-5.4/src"))
        .unwrap();
    filesystem
        .write_file(
            Path::new("/templates/lua-5.4/CMakeLists.txt"),
            "project(__PROJECT_NAME__\n\tVERSION __VERSION__\n\tDESCRIPTION \"__DESCRIPTION__\")\nadd_executable(__NAME__ ${SOURCE_FILES})",
        )
        .unwrap();
    filesystem
        .write_file(
            Path::new("/templates/lua-5.4/src/main.cpp"),
            "#include <lua.hpp>\n",
        )
        .unwrap();

    let service = ScaffoldService::new(Box::new(filesystem.clone()));

    let options = ProjectOptions {
        binary_name: Some("game".into()),
        version: Some("0.9.1".into()),
        description: Some("scripting host".into()),
        template: Some("lua-5.4".into()),
        ..ProjectOptions::new("my-game")
    };

    service
        .scaffold(&options, Path::new("/output"), Path::new("/templates"))
        .unwrap();

    let manifest = filesystem
        .read_file("/output/my-game/CMakeLists.txt".as_ref())
        .unwrap();
    assert!(manifest.contains("project(my-game"));
    assert!(manifest.contains("VERSION 0.9.1"));
    assert!(manifest.contains("DESCRIPTION \"scripting host\""));
    assert!(manifest.contains("add_executable(game"));

    // Template sources come through untouched.
    assert_eq!(
        filesystem
            .read_file("/output/my-game/src/main.cpp".as_ref())
            .unwrap(),
        "#include <lua.hpp>\n"
    );

    // And the template itself is still listed afterwards.
    let names = available_templates(&filesystem, Path::new("/templates")).unwrap();
    assert_eq!(names, vec!["lua-5.4"]);
}
