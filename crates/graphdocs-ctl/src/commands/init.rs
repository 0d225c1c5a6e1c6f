//! `graphdocs-ctl init` command: bootstrap a `.graphdocs.toml` with sensible defaults.

use std::path::Path;

use askama::Template;
use graphdocs_tooling::{DocsError, DocsResult};

use crate::cli_config::loader::CONFIG_FILENAME;
use crate::output;

/// Askama template for generating `.graphdocs.toml`.
#[derive(Template, Debug)]
#[template(path = "init-config.toml", escape = "none")]
struct InitConfigTemplate<'a> {
    id_prefix: &'a str,
    split_output: bool,
}

pub(crate) fn handle_init_command(id_prefix: &str, split_output: bool) -> DocsResult<()> {
    let config_path = Path::new(CONFIG_FILENAME);

    if config_path.exists() {
        output::warning(format!("{CONFIG_FILENAME} already exists in this directory."));
        output::hint("Remove it first if you want to reinitialize.");
        return Err(DocsError::config_error(format!(
            "{CONFIG_FILENAME} already exists"
        )));
    }

    let content = InitConfigTemplate {
        id_prefix,
        split_output,
    }
    .render()
    .map_err(|e| DocsError::config_error(format!("Template rendering failed: {}", e)))?;

    std::fs::write(config_path, content).map_err(|e| {
        DocsError::config_error(format!("Failed to write {CONFIG_FILENAME}: {}", e))
    })?;

    output::success(format!("Created {CONFIG_FILENAME}"));
    output::blank();
    output::hint("Next steps:");
    output::plain("  graphdocs-ctl config --registry settings.toml --output settings.adoc");
    output::plain(
        "  graphdocs-ctl procedures --community ce.json --enterprise ee.json --output procedures.adoc",
    );

    Ok(())
}
