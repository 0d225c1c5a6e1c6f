//! Procedure catalog seam and its JSON-backed implementation.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DocsError, DocsResult};

/// Product edition a procedure listing was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edition {
    Community,
    Enterprise,
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Community => write!(f, "community"),
            Self::Enterprise => write!(f, "enterprise"),
        }
    }
}

/// One row of a procedure listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Procedure {
    pub name: String,
    pub signature: String,
    #[serde(default)]
    pub description: String,
    /// Roles allowed to execute the procedure; absent when the edition has no roles.
    #[serde(default)]
    pub roles: Option<Vec<String>>,
}

/// Source of procedure listings for each edition.
pub trait ProcedureCatalog {
    fn procedures(&self, edition: Edition) -> DocsResult<Vec<Procedure>>;
}

/// Catalog reading one JSON array of procedure rows per edition.
#[derive(Debug, Clone)]
pub struct JsonProcedureCatalog {
    community: PathBuf,
    enterprise: PathBuf,
}

impl JsonProcedureCatalog {
    pub fn new(community: impl Into<PathBuf>, enterprise: impl Into<PathBuf>) -> Self {
        Self {
            community: community.into(),
            enterprise: enterprise.into(),
        }
    }

    fn path(&self, edition: Edition) -> &Path {
        match edition {
            Edition::Community => &self.community,
            Edition::Enterprise => &self.enterprise,
        }
    }
}

impl ProcedureCatalog for JsonProcedureCatalog {
    fn procedures(&self, edition: Edition) -> DocsResult<Vec<Procedure>> {
        let path = self.path(edition);
        let contents = std::fs::read_to_string(path).map_err(|e| DocsError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let procedures: Vec<Procedure> =
            serde_json::from_str(&contents).map_err(|e| DocsError::JsonParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        tracing::debug!(%edition, ?path, count = procedures.len(), "Loaded procedure listing");
        Ok(procedures)
    }
}

/// Catalog serving fixed listings.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProcedureCatalog {
    pub community: Vec<Procedure>,
    pub enterprise: Vec<Procedure>,
}

impl ProcedureCatalog for InMemoryProcedureCatalog {
    fn procedures(&self, edition: Edition) -> DocsResult<Vec<Procedure>> {
        Ok(match edition {
            Edition::Community => self.community.clone(),
            Edition::Enterprise => self.enterprise.clone(),
        })
    }
}
