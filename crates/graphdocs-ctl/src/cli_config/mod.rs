//! CLI configuration for documentation defaults.
//!
//! Values here only supply defaults; command-line flags always win.

pub(crate) mod loader;

pub(crate) use loader::load_cli_config;

use serde::Deserialize;

fn default_id_prefix() -> String {
    "config_".to_string()
}

/// Developer preferences read from `.graphdocs.toml`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct CliConfig {
    /// Prefix for setting anchors. Default: "config_".
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Directory that relative `--output` paths are resolved against.
    pub output_dir: Option<String>,

    /// Emit HTML and non-HTML variants of each setting table.
    #[serde(default)]
    pub split_output: bool,

    /// File suffixes rendered as file names rather than setting links.
    /// Empty means the built-in default (`.log`).
    #[serde(default)]
    pub file_suffixes: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
            output_dir: None,
            split_output: false,
            file_suffixes: Vec::new(),
        }
    }
}
