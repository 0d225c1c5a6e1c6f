//! AsciiDoc reference generators for a graph database's configuration settings
//! and stored procedures.
//!
//! This crate provides the formatting logic consumed by `graphdocs-ctl`. It reads
//! metadata already exposed by the host system (through the [`settings::SettingsRegistry`]
//! and [`procedures::ProcedureCatalog`] seams) and renders it into AsciiDoc markup.
//!
//! # Modules
//!
//! - [`settings`] — Setting metadata model, filtering, and registry loading
//! - [`crossref`] — Rewrites setting names in free text into cross-references
//! - [`config_docs`] — Configuration settings reference generator
//! - [`procedures`] — Stored procedure reference generator
//! - [`error`] — Unified error type for the generators

pub mod config_docs;
pub mod crossref;
pub mod error;
pub mod procedures;
pub mod settings;

pub use error::{DocsError, DocsResult};
