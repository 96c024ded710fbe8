//! Listing of installed templates (`--template` with no value).

use mason_core::{fs::LocalFilesystem, templates::available_templates};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Print the names of the installed templates.
pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let template_dir = config.template_dir();
    let names =
        available_templates(&LocalFilesystem::new(), &template_dir).map_err(CliError::Core)?;

    if names.is_empty() {
        output.info(&format!(
            "No templates installed in {}",
            template_dir.display()
        ))?;
        return Ok(());
    }

    output.header("Templates:")?;
    for name in names {
        output.print(&format!("\t{name}"))?;
    }

    Ok(())
}
