//! `graphdocs-ctl config`: the configuration settings reference.

use graphdocs_tooling::config_docs::{ConfigDocsGenerator, OutputMode};
use graphdocs_tooling::settings::{SettingFilter, TomlSettingsRegistry};
use graphdocs_tooling::DocsResult;

use super::emit;
use crate::cli_config::CliConfig;
use crate::ConfigArgs;

pub(crate) fn handle_config_command(args: ConfigArgs, cli_config: &CliConfig) -> DocsResult<()> {
    let filter = SettingFilter {
        include_internal: args.include_internal,
        dynamic_only: args.dynamic_only,
        deprecated_only: args.deprecated_only,
        name_prefix: args.name_prefix,
    };
    let mode = if args.split || cli_config.split_output {
        OutputMode::Split
    } else {
        OutputMode::Unified
    };
    let id_prefix = args.id_prefix.as_deref().unwrap_or(&cli_config.id_prefix);

    let mut generator =
        ConfigDocsGenerator::new(TomlSettingsRegistry::new(&args.registry)).with_output_mode(mode);
    if !cli_config.file_suffixes.is_empty() {
        generator = generator.with_file_suffixes(cli_config.file_suffixes.iter().cloned());
    }

    let doc = generator.document(|m| filter.matches(m), &args.id, &args.title, id_prefix)?;
    emit(&doc, args.output.as_deref(), cli_config, "Settings reference")
}
