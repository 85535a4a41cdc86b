//! Context-to-rule resolution engine with a single public function.
//!
//! Public API: [`resolve`]. Given an immutable rule catalog and the signals
//! of the current editing turn, it matches trigger tables (explicit mention,
//! file extension, project manifest, request keywords), expands auto-include
//! edges, dedups to the best tier per rule, and truncates to the context-tier
//! cap. The output is an ordered list of rule IDs for the agent runtime to
//! load; document bodies are opaque here.
//!
//! Resolution is synchronous, side-effect-free, and deterministic for
//! identical inputs. Concurrent calls over a shared catalog are safe because
//! the catalog is read-only after construction.

mod expand;
mod limit;
mod matcher;
mod signals;
mod tier;

pub use limit::ResolutionResult;
pub use signals::{ContextSignals, KNOWN_MANIFESTS, normalize_extension};
pub use tier::{ContextTier, MatchTier};

use rule_catalog::RuleCatalog;
use tracing::debug;

/// Resolve which rule documents to load for the given context.
///
/// Every input anomaly (unknown explicit ID, absent manifest, unresolvable
/// edge condition) degrades to "no contribution"; an empty result is the
/// supported degraded mode, so this function has no error path.
///
/// # Example
/// ```
/// use rule_catalog::builtin::default_catalog;
/// use rule_resolver::{ContextSignals, ContextTier, resolve};
///
/// let catalog = default_catalog();
/// let signals = ContextSignals::extract(
///     Some("lib/main.dart"),
///     Default::default(),
///     "",
///     vec![],
///     false,
/// );
/// let result = resolve(&catalog, &signals, ContextTier::SingleFileEdit);
/// assert_eq!(result.ordered_rule_ids, vec!["mobile/flutter"]);
/// ```
pub fn resolve(
    catalog: &RuleCatalog,
    signals: &ContextSignals,
    tier: ContextTier,
) -> ResolutionResult {
    let matched = matcher::match_rules(catalog, signals);
    debug!(candidates = matched.len(), "trigger matching done");

    let expanded = if signals.disable_auto_load {
        matched
    } else {
        let expanded = expand::expand_includes(catalog, signals, matched);
        debug!(candidates = expanded.len(), "auto-include expansion done");
        expanded
    };

    limit::dedup_and_cap(catalog, signals, expanded, tier)
}
