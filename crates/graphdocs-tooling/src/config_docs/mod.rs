//! Configuration settings reference generator.
//!
//! ```text
//! SettingsRegistry  →  filter + sort  →  SettingDescription  →  Askama templates  →  AsciiDoc
//! (host metadata)      (by name)         (cross-refs resolved)  (summary + tables)
//! ```
//!
//! A run documents the settings accepted by a filter. Only those settings count as
//! known names for cross-referencing, so a description never links to a setting that
//! is not on the generated page.

mod templates;

use askama::Template;

use crate::crossref::{CrossReferenceResolver, ReferenceStyle, DEFAULT_FILE_SUFFIXES};
use crate::error::{DocsError, DocsResult};
use crate::settings::{SettingDescription, SettingMetadata, SettingsRegistry};

use templates::{SettingBlockTemplate, SummaryRow, SummaryTemplate};

pub const IFNDEF_NONHTMLOUTPUT: &str = "ifndef::nonhtmloutput[]\n";
pub const IFDEF_NONHTMLOUTPUT: &str = "ifdef::nonhtmloutput[]\n";
pub const ENDIF_NONHTMLOUTPUT: &str = "endif::nonhtmloutput[]\n\n";

const NO_DESCRIPTION: &str = "No description available.";

/// How setting tables are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One table per setting with anchor cross-references.
    #[default]
    Unified,
    /// Two tables per setting guarded by `nonhtmloutput` conditionals: anchor
    /// references for HTML, code spans for everything else.
    Split,
}

/// Renders the configuration reference for settings drawn from a registry.
#[derive(Debug)]
pub struct ConfigDocsGenerator<R> {
    registry: R,
    mode: OutputMode,
    file_suffixes: Vec<String>,
}

impl<R: SettingsRegistry> ConfigDocsGenerator<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            mode: OutputMode::default(),
            file_suffixes: DEFAULT_FILE_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace the file suffixes rendered as emphasized file names.
    pub fn with_file_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Document every setting accepted by `filter`, sorted by name.
    ///
    /// `id` and `title` label the summary; each setting's anchor is `id_prefix` followed
    /// by its name.
    pub fn document(
        &self,
        filter: impl Fn(&SettingMetadata) -> bool,
        id: &str,
        title: &str,
        id_prefix: &str,
    ) -> DocsResult<String> {
        let mut metadata = self.registry.settings()?;
        metadata.retain(|m| filter(m));
        metadata.sort_by(|a, b| a.name.cmp(&b.name));

        let settings: Vec<SettingDescription> = metadata
            .iter()
            .map(|m| SettingDescription::from_metadata(m, id_prefix))
            .collect();

        let resolver = CrossReferenceResolver::new(settings.iter().map(|s| s.name().to_string()))
            .with_file_suffixes(self.file_suffixes.iter().cloned());
        let anchors = ReferenceStyle::anchor(id_prefix);

        let mut out = render_summary(id, title, &settings, &resolver)?;
        for setting in &settings {
            match self.mode {
                OutputMode::Unified => {
                    out.push_str(&render_setting(setting, &resolver, &anchors)?);
                }
                OutputMode::Split => {
                    out.push_str(IFNDEF_NONHTMLOUTPUT);
                    out.push_str(&render_setting(setting, &resolver, &anchors)?);
                    out.push_str(ENDIF_NONHTMLOUTPUT);
                    out.push_str(IFDEF_NONHTMLOUTPUT);
                    out.push_str(&render_setting(setting, &resolver, &ReferenceStyle::CodeSpan)?);
                    out.push_str(ENDIF_NONHTMLOUTPUT);
                }
            }
        }

        tracing::info!(id, count = settings.len(), mode = ?self.mode, "Documented settings");
        Ok(out)
    }
}

fn render_summary(
    id: &str,
    title: &str,
    settings: &[SettingDescription],
    resolver: &CrossReferenceResolver,
) -> DocsResult<String> {
    let rows = settings
        .iter()
        .map(|s| SummaryRow {
            reference: format!("<<{},{}>>", s.id(), s.name()),
            description: resolver.format_paragraph(
                s.name(),
                s.description().unwrap_or(NO_DESCRIPTION),
                |n| ReferenceStyle::CodeSpan.render(n),
            ),
        })
        .collect();

    let rendered = SummaryTemplate { id, title, rows }
        .render()
        .map_err(|e| DocsError::render("config/summary.adoc", e))?;
    Ok(format!("{}\n\n", rendered.trim_end()))
}

fn render_setting(
    setting: &SettingDescription,
    resolver: &CrossReferenceResolver,
    style: &ReferenceStyle,
) -> DocsResult<String> {
    let formatted =
        setting.formatted(|p| resolver.format_paragraph(setting.name(), p, |n| style.render(n)));

    let rendered = SettingBlockTemplate {
        setting: &formatted,
        description: formatted.description().unwrap_or(NO_DESCRIPTION),
        replaced_by: formatted.replaced_by().map(|r| style.render(r)),
    }
    .render()
    .map_err(|e| DocsError::render("config/setting.adoc", e))?;
    Ok(format!("{}\n\n", rendered.trim_end()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{InMemorySettingsRegistry, SettingFilter, SettingValue};

    fn registry() -> InMemorySettingsRegistry {
        InMemorySettingsRegistry::new(vec![
            SettingMetadata {
                description: Some(
                    "Log executed queries that take longer than dbms.logs.query.threshold \
                     to query.log"
                        .into(),
                ),
                valid_values: "a boolean".into(),
                dynamic: true,
                value: Some(SettingValue::Bool(false)),
                ..SettingMetadata::new("dbms.logs.query.enabled")
            },
            SettingMetadata {
                description: Some("Queries slower than this are logged".into()),
                valid_values: "a duration".into(),
                value: Some(SettingValue::Duration { millis: 0 }),
                ..SettingMetadata::new("dbms.logs.query.threshold")
            },
            SettingMetadata {
                description: Some("Old query logging switch, see dbms.logs.query.enabled".into()),
                valid_values: "a boolean".into(),
                deprecated: true,
                replacement: Some("dbms.logs.query.enabled".into()),
                value: Some(SettingValue::Bool(false)),
                ..SettingMetadata::new("dbms.querylog.enabled")
            },
            SettingMetadata {
                valid_values: "an integer".into(),
                internal: true,
                ..SettingMetadata::new("unsupported.dbms.block_size")
            },
        ])
    }

    fn public(m: &SettingMetadata) -> bool {
        SettingFilter::default().matches(m)
    }

    #[test]
    fn test_setting_block_layout() {
        let generator = ConfigDocsGenerator::new(registry());
        let out = generator
            .document(
                |m| m.name == "dbms.logs.query.threshold",
                "settings",
                "Settings",
                "config_",
            )
            .unwrap();

        let expected = "[[config_dbms.logs.query.threshold]]\n\
                        .dbms.logs.query.threshold\n\
                        [cols=\"<1h,<4\"]\n\
                        |===\n\
                        |Description\n\
                        a|Queries slower than this are logged.\n\
                        |Valid values\n\
                        a|a duration.\n\
                        |Default value\n\
                        m|0s\n\
                        |===\n\n";
        assert!(out.ends_with(expected), "unexpected output:\n{out}");
    }

    #[test]
    fn test_settings_sorted_and_filtered() {
        let out = ConfigDocsGenerator::new(registry())
            .document(public, "settings", "Settings", "config_")
            .unwrap();

        let enabled = out.find("[[config_dbms.logs.query.enabled]]").unwrap();
        let threshold = out.find("[[config_dbms.logs.query.threshold]]").unwrap();
        let old = out.find("[[config_dbms.querylog.enabled]]").unwrap();
        assert!(enabled < threshold && threshold < old);
        assert!(!out.contains("unsupported.dbms.block_size"));
    }

    #[test]
    fn test_cross_references_in_description() {
        let out = ConfigDocsGenerator::new(registry())
            .document(public, "settings", "Settings", "config_")
            .unwrap();

        assert!(out.contains(
            "a|Log executed queries that take longer than \
             <<config_dbms.logs.query.threshold,dbms.logs.query.threshold>> to _query.log_."
        ));
        assert!(out.contains("|Dynamic a|true\n|Default value\nm|false\n"));
    }

    #[test]
    fn test_deprecated_and_replaced() {
        let out = ConfigDocsGenerator::new(registry())
            .document(public, "settings", "Settings", "config_")
            .unwrap();

        assert!(out.contains(
            "|Deprecated\na|The `dbms.querylog.enabled` configuration setting has been deprecated.\n"
        ));
        assert!(out.contains(
            "|Replaced by\na|<<config_dbms.logs.query.enabled,dbms.logs.query.enabled>>\n"
        ));
    }

    #[test]
    fn test_internal_setting_without_value() {
        let out = ConfigDocsGenerator::new(registry())
            .document(|m| m.internal, "internal", "Internal settings", "config_")
            .unwrap();

        assert!(out.contains("a|No description available.\n"));
        assert!(out.contains(
            "|Internal\na|unsupported.dbms.block_size is an internal, unsupported setting.\n"
        ));
        assert!(!out.contains("|Default value"));
    }

    #[test]
    fn test_links_only_to_documented_settings() {
        // The threshold setting is filtered out, so it must not be linked.
        let out = ConfigDocsGenerator::new(registry())
            .document(
                |m| m.name == "dbms.logs.query.enabled",
                "settings",
                "Settings",
                "config_",
            )
            .unwrap();
        assert!(out.contains("longer than dbms.logs.query.threshold to"));
        assert!(!out.contains("<<config_dbms.logs.query.threshold"));
    }

    #[test]
    fn test_summary() {
        let out = ConfigDocsGenerator::new(registry())
            .document(public, "settings-summary", "All settings", "config_")
            .unwrap();

        assert!(out.starts_with("[[settings-summary]]\n.All settings\nifndef::nonhtmloutput[]\n"));
        assert!(out.contains("|Name|Description\n"));
        assert!(out.contains(
            "|<<config_dbms.logs.query.threshold,dbms.logs.query.threshold>>|Queries slower than this are logged.\n"
        ));
        assert!(out.contains(
            "* <<config_dbms.querylog.enabled,dbms.querylog.enabled>>: \
             Old query logging switch, see `dbms.logs.query.enabled`\n"
        ));
    }

    #[test]
    fn test_no_period_after_trailing_reference() {
        let out = ConfigDocsGenerator::new(registry())
            .document(public, "settings", "Settings", "config_")
            .unwrap();
        assert!(out.contains(
            "a|Old query logging switch, see \
             <<config_dbms.logs.query.enabled,dbms.logs.query.enabled>>\n"
        ));
    }

    #[test]
    fn test_split_mode_emits_both_variants() {
        let out = ConfigDocsGenerator::new(registry())
            .with_output_mode(OutputMode::Split)
            .document(public, "settings", "Settings", "config_")
            .unwrap();

        assert_eq!(out.matches("[[config_dbms.logs.query.enabled]]").count(), 2);
        assert!(out.contains(
            "ifndef::nonhtmloutput[]\n[[config_dbms.logs.query.enabled]]"
        ));
        assert!(out.contains("ifdef::nonhtmloutput[]\n[[config_dbms.logs.query.enabled]]"));
        assert!(out.contains("longer than `dbms.logs.query.threshold` to _query.log_."));
        assert!(out.contains("|===\n\nendif::nonhtmloutput[]\n\n"));

        // The replacement follows each variant's reference style.
        assert!(out.contains(
            "|Replaced by\na|<<config_dbms.logs.query.enabled,dbms.logs.query.enabled>>\n"
        ));
        assert!(out.contains("|Replaced by\na|`dbms.logs.query.enabled`\n"));
    }

    #[test]
    fn test_custom_id_prefix() {
        let out = ConfigDocsGenerator::new(registry())
            .document(public, "s", "S", "settings_")
            .unwrap();
        assert!(out.contains("[[settings_dbms.logs.query.enabled]]"));
        assert!(out.contains("<<settings_dbms.logs.query.threshold,dbms.logs.query.threshold>>"));
    }

    #[test]
    fn test_registry_errors_propagate() {
        let registry = InMemorySettingsRegistry::new(vec![
            SettingMetadata::new("a.b"),
            SettingMetadata::new("a.b"),
        ]);
        let result = ConfigDocsGenerator::new(registry).document(|_| true, "s", "S", "");
        assert!(matches!(result, Err(DocsError::DuplicateSetting { .. })));
    }
}
