//! Configuration setting metadata and the per-run documentation model.
//!
//! [`SettingMetadata`] is the raw record exposed by the host configuration registry.
//! [`SettingDescription`] is the immutable, documentation-ready view built from it
//! once per generation run.

mod registry;

pub use registry::{InMemorySettingsRegistry, SettingsRegistry, TomlSettingsRegistry};

use std::fmt;

use serde::Deserialize;

/// A typed setting value as reported by the host registry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<SettingValue>),
    /// Duration expressed in milliseconds, e.g. `{ millis = 1500 }`.
    Duration {
        millis: u64,
    },
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Duration { millis } => f.write_str(&format_duration_millis(*millis)),
        }
    }
}

/// Whole seconds render as `<n>s`, anything else as `<n>ms`.
pub fn format_duration_millis(millis: u64) -> String {
    if millis % 1000 == 0 {
        format!("{}s", millis / 1000)
    } else {
        format!("{millis}ms")
    }
}

/// Raw metadata for one configuration setting, as exposed by the host registry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SettingMetadata {
    /// Setting name, e.g. `dbms.memory.heap.max_size`.
    pub name: String,

    /// Human-readable description.
    pub description: Option<String>,

    /// Description of the accepted values, rendered in the "Valid values" row.
    #[serde(default)]
    pub valid_values: String,

    /// Default value as it should appear in documentation, overriding `value`.
    pub documented_default: Option<String>,

    /// The setting's current (default) value.
    pub value: Option<SettingValue>,

    #[serde(default)]
    pub internal: bool,

    #[serde(default)]
    pub dynamic: bool,

    #[serde(default)]
    pub deprecated: bool,

    /// Name of the setting that replaces this one, if deprecated.
    pub replacement: Option<String>,
}

impl SettingMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Selects which settings a generation run documents.
///
/// The default filter documents every public setting.
#[derive(Debug, Clone, Default)]
pub struct SettingFilter {
    pub include_internal: bool,
    pub dynamic_only: bool,
    pub deprecated_only: bool,
    pub name_prefix: Option<String>,
}

impl SettingFilter {
    pub fn matches(&self, setting: &SettingMetadata) -> bool {
        if setting.internal && !self.include_internal {
            return false;
        }
        if self.dynamic_only && !setting.dynamic {
            return false;
        }
        if self.deprecated_only && !setting.deprecated {
            return false;
        }
        match &self.name_prefix {
            Some(prefix) => setting.name.starts_with(prefix.as_str()),
            None => true,
        }
    }
}

/// Documentation-ready description of a single setting.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingDescription {
    id: String,
    name: String,
    description: Option<String>,
    validation_message: String,
    default_value: Option<String>,
    deprecated: bool,
    deprecation_message: String,
    internal: bool,
    dynamic: bool,
    replaced_by: Option<String>,
}

impl SettingDescription {
    /// Build a description from host metadata.
    ///
    /// The documented default wins over the typed value. A setting with neither is
    /// logged and documented without a default row.
    pub fn from_metadata(metadata: &SettingMetadata, id_prefix: &str) -> Self {
        let default_value = match (&metadata.documented_default, &metadata.value) {
            (Some(documented), _) => Some(documented.clone()),
            (None, Some(value)) => Some(value.to_string()),
            (None, None) => {
                tracing::warn!(setting = %metadata.name, "failed to get value for setting");
                None
            }
        };

        Self {
            id: format!("{id_prefix}{}", metadata.name),
            name: metadata.name.clone(),
            description: metadata.description.clone(),
            validation_message: metadata.valid_values.clone(),
            default_value,
            deprecated: metadata.deprecated,
            deprecation_message: format!(
                "The {} configuration setting has been deprecated.",
                metadata.name
            ),
            internal: metadata.internal,
            dynamic: metadata.dynamic,
            replaced_by: metadata.replacement.clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn validation_message(&self) -> &str {
        &self.validation_message
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn has_default(&self) -> bool {
        self.default_value.is_some()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    pub fn deprecation_message(&self) -> &str {
        &self.deprecation_message
    }

    pub fn is_internal(&self) -> bool {
        self.internal
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    pub fn replaced_by(&self) -> Option<&str> {
        self.replaced_by.as_deref()
    }

    /// Return a copy with `format` applied to every free-text field.
    pub fn formatted(&self, format: impl Fn(&str) -> String) -> Self {
        Self {
            description: self.description.as_deref().map(&format),
            validation_message: format(&self.validation_message),
            deprecation_message: format(&self.deprecation_message),
            ..self.clone()
        }
    }
}
