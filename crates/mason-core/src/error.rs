//! Unified error handling for the scaffolding core.
//!
//! One cloneable error type for everything the core can refuse to do, with
//! user-actionable suggestions and a category for CLI styling and exit-code
//! mapping.

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for scaffolding operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScaffoldError {
    /// Project name failed validation.
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// The target project directory already exists.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// The named template does not exist in the template directory.
    #[error("Template '{name}' doesn't exist")]
    TemplateNotFound { name: String },

    /// The template has no build manifest to substitute into.
    #[error("Template '{name}' doesn't have a CMakeLists.txt")]
    TemplateMissingManifest { name: String },

    /// A planned project structure is malformed (empty, duplicate or
    /// absolute paths).
    #[error("Invalid project structure: {reason}")]
    InvalidStructure { reason: String },

    /// A filesystem operation failed.
    ///
    /// The `std::io::Error` is flattened into `reason` so the error stays
    /// cloneable for retry logic.
    #[error("Filesystem operation failed at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Shared filesystem state was poisoned by a panicking writer.
    #[error("filesystem state lock poisoned")]
    LockPoisoned,
}

impl ScaffoldError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: my-project, my_app, project123".into(),
            ],

            Self::ProjectExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Choose a different project name".into(),
                format!("Remove the existing directory: rm -rf {}", path.display()),
            ],

            Self::TemplateNotFound { name } => vec![
                format!("No template named '{}' is installed", name),
                "List installed templates: mason -t".into(),
                "Add templates to the template directory to make them available".into(),
            ],

            Self::TemplateMissingManifest { name } => vec![
                format!("Template '{}' is missing its CMakeLists.txt", name),
                "Every template needs a CMakeLists.txt at its root".into(),
            ],

            Self::InvalidStructure { reason } => vec![
                format!("Planned structure rejected: {}", reason),
                "This appears to be a bug in mason".into(),
            ],

            Self::Filesystem { path, reason } => vec![
                format!("Operation on '{}' failed: {}", path.display(), reason),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],

            Self::LockPoisoned => vec![
                "A previous filesystem operation panicked".into(),
                "Retry the command".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::TemplateMissingManifest { .. } => ErrorCategory::Validation,
            Self::InvalidStructure { .. } => ErrorCategory::Internal,
            Self::Filesystem { .. } => ErrorCategory::Internal,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
