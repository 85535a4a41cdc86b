//! Static registry of rule documents and their activation triggers.
//!
//! A "rule" here is an instruction document for the AI agent, identified by a
//! stable path-like ID. This crate owns the descriptor data model, the
//! immutable [`RuleCatalog`] with its trigger lookups, the JSON index-file
//! loader, and a built-in default corpus. It performs no matching decisions
//! itself; the `rule-resolver` crate drives the lookups.

mod catalog;
mod descriptor;
mod error;

pub mod builtin;
pub mod index;

pub use catalog::RuleCatalog;
pub use descriptor::{AutoInclude, ManifestTrigger, RuleCategory, RuleDescriptor};
pub use error::CatalogError;
