//! Askama template structs for the configuration reference.

use askama::Template;

use crate::settings::SettingDescription;

/// One `[cols="<1h,<4"]` table documenting a single setting.
#[derive(Template, Debug)]
#[template(path = "config/setting.adoc", escape = "none")]
pub(super) struct SettingBlockTemplate<'a> {
    pub setting: &'a SettingDescription,
    pub description: &'a str,
    pub replaced_by: Option<String>,
}

/// A row shared by the summary table and the summary list.
#[derive(Debug)]
pub(super) struct SummaryRow {
    pub reference: String,
    pub description: String,
}

/// Anchored summary: a table for HTML output and a bullet list otherwise.
#[derive(Template, Debug)]
#[template(path = "config/summary.adoc", escape = "none")]
pub(super) struct SummaryTemplate<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub rows: Vec<SummaryRow>,
}
