//! Host configuration registry seam and its file-backed implementation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::SettingMetadata;
use crate::error::{DocsError, DocsResult};

/// Source of configuration setting metadata.
pub trait SettingsRegistry {
    /// All settings known to the host, in no particular order.
    fn settings(&self) -> DocsResult<Vec<SettingMetadata>>;
}

/// Registry backed by a TOML file of `[[settings]]` tables.
///
/// ```toml
/// [[settings]]
/// name = "dbms.connector.bolt.listen_address"
/// description = "Address the connector should bind to."
/// valid-values = "a socket address"
/// value = ":7687"
/// ```
#[derive(Debug, Clone)]
pub struct TomlSettingsRegistry {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    settings: Vec<SettingMetadata>,
}

impl TomlSettingsRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse registry contents; `path` is only used for error reporting.
    pub fn parse(contents: &str, path: &Path) -> DocsResult<Vec<SettingMetadata>> {
        let file: SettingsFile = toml::from_str(contents).map_err(|e| DocsError::TomlParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        ensure_unique(&file.settings)?;
        Ok(file.settings)
    }
}

impl SettingsRegistry for TomlSettingsRegistry {
    fn settings(&self) -> DocsResult<Vec<SettingMetadata>> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| DocsError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        let settings = Self::parse(&contents, &self.path)?;
        tracing::debug!(path = ?self.path, count = settings.len(), "Loaded settings registry");
        Ok(settings)
    }
}

/// Registry serving a fixed list of settings.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsRegistry {
    settings: Vec<SettingMetadata>,
}

impl InMemorySettingsRegistry {
    pub fn new(settings: Vec<SettingMetadata>) -> Self {
        Self { settings }
    }
}

impl SettingsRegistry for InMemorySettingsRegistry {
    fn settings(&self) -> DocsResult<Vec<SettingMetadata>> {
        ensure_unique(&self.settings)?;
        Ok(self.settings.clone())
    }
}

fn ensure_unique(settings: &[SettingMetadata]) -> DocsResult<()> {
    let mut seen = HashSet::with_capacity(settings.len());
    for setting in settings {
        if !seen.insert(setting.name.as_str()) {
            return Err(DocsError::DuplicateSetting {
                name: setting.name.clone(),
            });
        }
    }
    Ok(())
}
