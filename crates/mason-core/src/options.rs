//! Project options: what one scaffolding run should produce.
//!
//! # Design
//!
//! `ProjectOptions` is a plain value object. Optional fields stay `None`
//! until something (CLI flag, config default) fills them; the accessor
//! methods apply the final fallbacks so that downstream code never has to
//! repeat the defaulting rules:
//!
//! | field        | fallback              |
//! |--------------|-----------------------|
//! | binary name  | the project name      |
//! | version      | `"1.0.0"`             |
//! | description  | empty string          |

use serde::{Deserialize, Serialize};

use crate::error::{ScaffoldError, ScaffoldResult};

/// Version used when neither the CLI nor the config supplies one.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Everything needed to create one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOptions {
    /// Directory name of the new project. Always present; validated by
    /// [`validate_project_name`].
    pub project_name: String,

    /// Name of the produced binary or library. Defaults to `project_name`.
    pub binary_name: Option<String>,

    /// Project version for the build descriptor.
    pub version: Option<String>,

    /// Free-form project description.
    pub description: Option<String>,

    /// Build a shared library instead of an executable.
    pub shared: bool,

    /// Template to copy instead of generating the default skeleton.
    pub template: Option<String>,
}

impl ProjectOptions {
    /// Options for a default (non-template) executable project.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            binary_name: None,
            version: None,
            description: None,
            shared: false,
            template: None,
        }
    }

    /// Binary/library name with the fallback applied.
    pub fn binary_name(&self) -> &str {
        self.binary_name.as_deref().unwrap_or(&self.project_name)
    }

    /// Version with the fallback applied.
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_VERSION)
    }

    /// Description with the fallback applied.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Validate a project (directory) name.
///
/// The rules protect the filesystem layer: the name becomes a single path
/// component under the output directory.
pub fn validate_project_name(name: &str) -> ScaffoldResult<()> {
    if name.is_empty() {
        return Err(ScaffoldError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(ScaffoldError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(ScaffoldError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
