//! Stored procedure reference generator.
//!
//! Merges the community and enterprise procedure listings into one table. Procedures
//! available in both editions list the enterprise roles; enterprise-only procedures
//! follow, tagged with `[roles=enterprise]`.

mod catalog;

pub use catalog::{Edition, InMemoryProcedureCatalog, JsonProcedureCatalog, Procedure, ProcedureCatalog};

use std::collections::BTreeMap;

use askama::Template;

use crate::error::{DocsError, DocsResult};

const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug)]
struct ProcedureRow<'a> {
    name: &'a str,
    description: &'a str,
    signature: &'a str,
    roles: String,
    enterprise_only: bool,
}

#[derive(Template, Debug)]
#[template(path = "procedures/reference.adoc", escape = "none")]
struct ProcedureReferenceTemplate<'a> {
    id: &'a str,
    title: &'a str,
    roles_header: String,
    rows: Vec<ProcedureRow<'a>>,
}

/// Wrap text in the enterprise-feature role.
pub fn enterprise_feature(text: &str) -> String {
    format!("[enterprise-feature]#{text}#")
}

/// Renders the procedure reference table from a catalog.
#[derive(Debug)]
pub struct ProcedureReferenceGenerator<C> {
    catalog: C,
}

impl<C: ProcedureCatalog> ProcedureReferenceGenerator<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn document(&self, id: &str, title: &str) -> DocsResult<String> {
        let community = by_name(self.catalog.procedures(Edition::Community)?);
        let enterprise = by_name(self.catalog.procedures(Edition::Enterprise)?);

        let shared = community.values().map(|p| ProcedureRow {
            name: &p.name,
            description: &p.description,
            signature: &p.signature,
            roles: enterprise
                .get(&p.name)
                .and_then(|e| e.roles.as_deref())
                .map_or_else(|| NOT_APPLICABLE.to_string(), format_roles),
            enterprise_only: false,
        });
        let enterprise_only = enterprise
            .values()
            .filter(|p| !community.contains_key(&p.name))
            .map(|p| ProcedureRow {
                name: &p.name,
                description: &p.description,
                signature: &p.signature,
                roles: p
                    .roles
                    .as_deref()
                    .map_or_else(|| NOT_APPLICABLE.to_string(), format_roles),
                enterprise_only: true,
            });
        let rows: Vec<ProcedureRow<'_>> = shared.chain(enterprise_only).collect();

        tracing::info!(
            id,
            community = community.len(),
            total = rows.len(),
            "Documented procedures"
        );

        let rendered = ProcedureReferenceTemplate {
            id,
            title,
            roles_header: enterprise_feature("Roles"),
            rows,
        }
        .render()
        .map_err(|e| DocsError::render("procedures/reference.adoc", e))?;
        Ok(format!("{}\n", rendered.trim_end()))
    }
}

fn format_roles(roles: &[String]) -> String {
    enterprise_feature(&roles.join(", "))
}

fn by_name(procedures: Vec<Procedure>) -> BTreeMap<String, Procedure> {
    let mut map = BTreeMap::new();
    for p in procedures {
        if let Some(previous) = map.insert(p.name.clone(), p) {
            tracing::debug!(name = %previous.name, "Duplicate procedure in listing, keeping the last");
        }
    }
    map
}
