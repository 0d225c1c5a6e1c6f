//! Config file discovery and loading for `.graphdocs.toml`.
//!
//! Checks two locations in precedence order:
//! 1. `./.graphdocs.toml` (project-local)
//! 2. `~/.config/graphdocs.toml` (user-global)

use std::path::{Path, PathBuf};

use super::CliConfig;

pub(crate) const CONFIG_FILENAME: &str = ".graphdocs.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "graphdocs.toml";

/// Load CLI config from the first discovered location, or return defaults.
pub(crate) fn load_cli_config() -> CliConfig {
    match find_config_file() {
        Some(path) => load_from(&path),
        None => CliConfig::default(),
    }
}

fn load_from(path: &Path) -> CliConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!(?path, "Loaded CLI config");
                config
            }
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to parse CLI config, using defaults");
                CliConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!(?path, error = %e, "Failed to read CLI config, using defaults");
            CliConfig::default()
        }
    }
}

/// Search for config file in precedence order.
fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    if let Some(home) = home_dir() {
        let global = home.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME);
        if global.is_file() {
            return Some(global);
        }
    }

    None
}

/// Resolve an output path against the configured output directory.
///
/// Absolute paths, and all paths when no output directory is configured, pass through.
pub(crate) fn resolve_output_path(config: &CliConfig, path: &Path) -> PathBuf {
    match &config.output_dir {
        Some(dir) if path.is_relative() => expand_path(dir).join(path),
        _ => path.to_path_buf(),
    }
}

/// Expand a configured path, resolving `~` to the home directory.
pub(crate) fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path("~/docs/partials");
        assert!(expanded.to_str().unwrap().ends_with("docs/partials"));
        assert!(!expanded.to_str().unwrap().starts_with('~'));
    }

    #[test]
    fn test_expand_path_absolute() {
        assert_eq!(expand_path("/srv/docs"), PathBuf::from("/srv/docs"));
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.id_prefix, "config_");
        assert!(config.output_dir.is_none());
        assert!(!config.split_output);
        assert!(config.file_suffixes.is_empty());
    }

    #[test]
    fn test_parse_config_toml() {
        let toml_str = r#"
id-prefix = "settings_"
output-dir = "./docs/partials"
split-output = true
file-suffixes = [".log", ".conf"]
"#;
        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.id_prefix, "settings_");
        assert_eq!(config.output_dir.as_deref(), Some("./docs/partials"));
        assert!(config.split_output);
        assert_eq!(config.file_suffixes, vec![".log", ".conf"]);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: CliConfig = toml::from_str("split-output = true\n").unwrap();
        assert_eq!(config.id_prefix, "config_");
        assert!(config.split_output);
    }

    #[test]
    fn test_load_unparseable_config_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "id-prefix = [not toml").unwrap();
        let config = load_from(&path);
        assert_eq!(config.id_prefix, "config_");
    }

    #[test]
    fn test_resolve_output_path() {
        let config = CliConfig {
            output_dir: Some("/srv/docs".to_string()),
            ..CliConfig::default()
        };
        assert_eq!(
            resolve_output_path(&config, Path::new("settings.adoc")),
            PathBuf::from("/srv/docs/settings.adoc")
        );
        assert_eq!(
            resolve_output_path(&config, Path::new("/tmp/settings.adoc")),
            PathBuf::from("/tmp/settings.adoc")
        );
        assert_eq!(
            resolve_output_path(&CliConfig::default(), Path::new("settings.adoc")),
            PathBuf::from("settings.adoc")
        );
    }
}
