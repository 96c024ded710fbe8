//! Implementation of the project-creation flow.
//!
//! Responsibility: echo the resolved configuration, call the core scaffold
//! service, and display results. No business logic lives here.

use std::path::Path;

use tracing::{info, instrument};

use mason_core::{fs::LocalFilesystem, options::ProjectOptions, scaffold::ScaffoldService};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute one scaffolding run in the current working directory.
#[instrument(skip_all, fields(project = %project.project_name))]
pub fn execute(project: ProjectOptions, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "failed to resolve the current directory".into(),
        source: e,
    })?;

    show_summary(&project, &cwd, output)?;

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    info!(project = %project.project_name, "Scaffold started");
    let project_dir = service
        .scaffold(&project, &cwd, &config.template_dir())
        .map_err(CliError::Core)?;
    info!(path = %project_dir.display(), "Scaffold completed");

    output.success(&format!("Project '{}' created!", project.project_name))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", project.project_name))?;
    output.print("  cmake -S . -B build")?;
    output.print("  cmake --build build")?;

    Ok(())
}

/// Echo the resolved configuration before writing anything.
fn show_summary(project: &ProjectOptions, cwd: &Path, out: &OutputManager) -> CliResult<()> {
    out.header("Project Information:")?;
    out.print(&format!("\tName: {}", project.binary_name()))?;
    out.print(&format!("\tVersion: {}", project.version()))?;
    if !project.description().is_empty() {
        out.print(&format!("\tDescription: {}", project.description()))?;
    }
    if let Some(template) = &project.template {
        out.print(&format!("\tTemplate: {template}"))?;
    }
    out.print(&format!(
        "\tShared: {}",
        if project.shared { "yes" } else { "no" }
    ))?;
    out.print(&format!(
        "\tDirectory: {}",
        cwd.join(&project.project_name).display()
    ))?;
    Ok(())
}
