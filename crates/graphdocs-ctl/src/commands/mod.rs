//! Command handlers for the graphdocs CLI
//!
//! Each module handles one subcommand, delegating generation to `graphdocs-tooling`.

pub(crate) mod config;
pub(crate) mod init;
pub(crate) mod procedures;

pub(crate) use config::handle_config_command;
pub(crate) use init::handle_init_command;
pub(crate) use procedures::handle_procedures_command;

use std::path::Path;

use graphdocs_tooling::{DocsError, DocsResult};

use crate::cli_config::{loader::resolve_output_path, CliConfig};
use crate::output;

/// Write generated documentation to `destination`, or to stdout when no path is given.
pub(crate) fn emit(
    content: &str,
    destination: Option<&Path>,
    cli_config: &CliConfig,
    what: &str,
) -> DocsResult<()> {
    let Some(destination) = destination else {
        print!("{content}");
        return Ok(());
    };

    let output_path = resolve_output_path(cli_config, destination);
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            DocsError::config_error(format!(
                "Failed to create output directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }
    std::fs::write(&output_path, content).map_err(|e| {
        DocsError::config_error(format!(
            "Failed to write output file '{}': {}",
            output_path.display(),
            e
        ))
    })?;

    output::success(format!("{what} written to {}", output_path.display()));
    Ok(())
}
