//! Cross-reference resolution for setting names mentioned in free text.
//!
//! Setting descriptions routinely mention other settings (`dbms.logs.query.enabled`,
//! `dbms.tx_log.rotation.size`). The resolver finds every setting-name-shaped token and
//! decides how to render it:
//!
//! | Token                              | Rendering                         |
//! |------------------------------------|-----------------------------------|
//! | ends with a file suffix (`.log`)   | `_query.log_` (emphasized)        |
//! | wrapped as `+a.b+`                 | `a.b` (markers stripped)          |
//! | the setting being documented       | `` `a.b` `` (no self link)        |
//! | not a known setting                | unchanged                         |
//! | any other known setting            | caller-supplied [`ReferenceStyle`]|

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// File suffixes recognized when no others are configured.
pub const DEFAULT_FILE_SUFFIXES: &[&str] = &[".log"];

static SETTING_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?[a-z0-9]+((\.|_)[a-z0-9]+)+\+?").expect("setting name pattern is valid")
});

/// How a reference to another known setting is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceStyle {
    /// AsciiDoc cross-reference to the setting's anchor: `<<prefix_name,name>>`.
    Anchor { id_prefix: String },
    /// Plain inline code span, for output formats without working links.
    CodeSpan,
}

impl ReferenceStyle {
    pub fn anchor(id_prefix: impl Into<String>) -> Self {
        Self::Anchor {
            id_prefix: id_prefix.into(),
        }
    }

    pub fn render(&self, setting_name: &str) -> String {
        match self {
            Self::Anchor { id_prefix } => format!("<<{id_prefix}{setting_name},{setting_name}>>"),
            Self::CodeSpan => format!("`{setting_name}`"),
        }
    }
}

/// Rewrites setting names in text against a fixed set of known names.
#[derive(Debug, Clone)]
pub struct CrossReferenceResolver {
    known: HashSet<String>,
    file_suffixes: Vec<String>,
}

impl CrossReferenceResolver {
    pub fn new<I, S>(known_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: known_names.into_iter().map(Into::into).collect(),
            file_suffixes: DEFAULT_FILE_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the recognized file suffixes.
    pub fn with_file_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.known.contains(name)
    }

    /// Rewrite every setting-name-shaped token in `text`.
    ///
    /// `current` is the setting being documented; `render` produces the reference for
    /// any other known setting.
    pub fn resolve(&self, text: &str, current: &str, render: impl Fn(&str) -> String) -> String {
        SETTING_NAME_PATTERN
            .replace_all(text, |caps: &Captures<'_>| {
                self.rewrite_token(&caps[0], current, &render)
            })
            .into_owned()
    }

    /// Resolve cross-references, then terminate the paragraph with a period if needed.
    pub fn format_paragraph(
        &self,
        current: &str,
        paragraph: &str,
        render: impl Fn(&str) -> String,
    ) -> String {
        ensure_ends_with_period(&self.resolve(paragraph, current, render))
    }

    fn rewrite_token(&self, token: &str, current: &str, render: &impl Fn(&str) -> String) -> String {
        if self.file_suffixes.iter().any(|suffix| token.ends_with(suffix.as_str())) {
            return format!("_{token}_");
        }
        if token.len() > 1 && token.starts_with('+') && token.ends_with('+') {
            return token[1..token.len() - 1].to_string();
        }
        if token == current {
            return format!("`{token}`");
        }
        if !self.is_known(token) {
            return token.to_string();
        }
        render(token)
    }
}

/// Append a period when the message ends in a word character.
///
/// Trailing whitespace is ignored and dropped when the period is added. Messages
/// already ending in punctuation are returned unchanged, so applying this twice is the
/// same as applying it once.
pub fn ensure_ends_with_period(message: &str) -> String {
    let trimmed = message.trim_end();
    match trimmed.chars().last() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => format!("{trimmed}."),
        _ => message.to_string(),
    }
}
