//! JSON index document: the on-disk form of a rule catalog.
//!
//! The index lists descriptors only; rule document bodies live elsewhere and
//! are fetched by the agent runtime using the IDs the resolver returns.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::RuleCatalog;
use crate::descriptor::RuleDescriptor;
use crate::error::CatalogError;

/// Top-level index document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesIndex {
    pub rules: Vec<RuleDescriptor>,
}

impl RulesIndex {
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validate and seal into an immutable catalog.
    pub fn into_catalog(self) -> Result<RuleCatalog, CatalogError> {
        RuleCatalog::new(self.rules)
    }
}

/// Read, parse, and validate an index file.
///
/// # Errors
/// `CatalogError::Io` when the file cannot be read, `CatalogError::Json` on
/// malformed JSON, and the validation variants on duplicate IDs or
/// self-referencing auto-includes.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RuleCatalog, CatalogError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let index = RulesIndex::from_json(&text)?;
    info!(path = %path.display(), rules = index.rules.len(), "loaded rules index");
    index.into_catalog()
}
