//! Typed error for the rule-catalog crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two descriptors share the same ID. Ambiguous catalogs are rejected
    /// at load time rather than resolved arbitrarily per call.
    #[error("duplicate rule id in catalog: {0}")]
    DuplicateRuleId(String),

    /// A rule auto-includes itself.
    #[error("rule {0} declares an auto-include edge to itself")]
    SelfInclude(String),

    /// Reading the index file from disk failed.
    #[error("failed to read rules index: {0}")]
    Io(#[from] std::io::Error),

    /// The index document is not valid JSON for the expected schema.
    #[error("failed to parse rules index: {0}")]
    Json(#[from] serde_json::Error),
}
