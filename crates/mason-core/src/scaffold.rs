//! Scaffold service - the main orchestrator.
//!
//! Coordinates one scaffolding run:
//! 1. Validate the project name
//! 2. Refuse to overwrite an existing project directory
//! 3. Generate the default skeleton, or copy + render a template
//! 4. Roll the directory back if anything fails mid-write

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    error::{ScaffoldError, ScaffoldResult},
    fs::Filesystem,
    options::{ProjectOptions, validate_project_name},
    render::RenderContext,
    skeleton::{BUILD_MANIFEST, project_skeleton},
    structure::{FsEntry, ProjectStructure},
};

/// Main scaffolding service.
///
/// Owns its [`Filesystem`] adapter; everything it writes goes through the
/// port so the whole flow is testable against [`crate::fs::MemoryFilesystem`].
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Create the project described by `options` inside `output_dir`.
    ///
    /// `template_dir` is the directory holding installed templates; it is
    /// only consulted when `options.template` is set. Returns the path of
    /// the created project directory.
    #[instrument(skip_all, fields(project = %options.project_name))]
    pub fn scaffold(
        &self,
        options: &ProjectOptions,
        output_dir: &Path,
        template_dir: &Path,
    ) -> ScaffoldResult<PathBuf> {
        validate_project_name(&options.project_name)?;

        let project_dir = output_dir.join(&options.project_name);
        if self.filesystem.exists(&project_dir) {
            return Err(ScaffoldError::ProjectExists { path: project_dir });
        }

        // Template existence is checked before anything is created so a
        // typo'd name never leaves a half-made directory behind.
        if let Some(template) = &options.template {
            let source = template_dir.join(template);
            if !self.filesystem.is_dir(&source) {
                return Err(ScaffoldError::TemplateNotFound {
                    name: template.clone(),
                });
            }
        }

        let result = match &options.template {
            Some(template) => {
                info!(template = %template, "Applying template");
                self.apply_template(options, &template_dir.join(template), &project_dir)
            }
            None => {
                info!("Generating default skeleton");
                self.write_structure(&project_skeleton(options, &project_dir))
            }
        };

        match result {
            Ok(()) => {
                info!(path = %project_dir.display(), "Scaffold completed");
                Ok(project_dir)
            }
            Err(e) => {
                warn!("Scaffold failed, attempting rollback");
                self.rollback(&project_dir);
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Copy the template tree into `project_dir` and substitute placeholders
    /// in its build manifest.
    fn apply_template(
        &self,
        options: &ProjectOptions,
        source: &Path,
        project_dir: &Path,
    ) -> ScaffoldResult<()> {
        self.filesystem.create_dir_all(project_dir)?;
        self.copy_tree(source, project_dir)?;

        let manifest = project_dir.join(BUILD_MANIFEST);
        if !self.filesystem.exists(&manifest) {
            return Err(ScaffoldError::TemplateMissingManifest {
                name: options
                    .template
                    .clone()
                    .unwrap_or_else(|| source.display().to_string()),
            });
        }

        let content = self.filesystem.read_to_string(&manifest)?;
        let rendered = RenderContext::from_options(options).render(&content);
        self.filesystem.write_file(&manifest, &rendered)
    }

    /// Recursively copy `source` into `dest`.
    ///
    /// Template files are read as UTF-8 text; the substitution pass needs
    /// strings anyway.
    fn copy_tree(&self, source: &Path, dest: &Path) -> ScaffoldResult<()> {
        for child in self.filesystem.read_dir(source)? {
            let Some(file_name) = child.file_name() else {
                continue;
            };
            let target = dest.join(file_name);

            if self.filesystem.is_dir(&child) {
                self.filesystem.create_dir_all(&target)?;
                self.copy_tree(&child, &target)?;
            } else {
                let content = self.filesystem.read_to_string(&child)?;
                self.filesystem.write_file(&target, &content)?;
            }
        }
        Ok(())
    }

    /// Write all entries in the structure.
    fn write_structure(&self, structure: &ProjectStructure) -> ScaffoldResult<()> {
        structure.validate()?;

        self.filesystem.create_dir_all(&structure.root)?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&structure.root.join(dir))?;
                }
                FsEntry::File(file) => {
                    let path = structure.root.join(&file.path);

                    // Ensure parent exists
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
