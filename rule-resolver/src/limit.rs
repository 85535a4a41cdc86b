//! Stage 5: best-tier dedup, deterministic ordering, context-tier size cap.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use rule_catalog::RuleCatalog;
use serde::{Deserialize, Serialize};

use crate::matcher::Candidate;
use crate::signals::ContextSignals;
use crate::tier::{ContextTier, MatchTier};

/// Final outcome of a resolution call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Deduplicated rule IDs, best tier first; ties break on catalog
    /// insertion order. Truncated to the context-tier cap, except that
    /// explicitly requested rules are always retained.
    pub ordered_rule_ids: Vec<String>,
    /// Rules that matched but were cut by the cap, in the order they would
    /// have appeared.
    pub dropped_for_limit: Vec<String>,
}

pub(crate) fn dedup_and_cap(
    catalog: &RuleCatalog,
    signals: &ContextSignals,
    candidates: Vec<Candidate>,
    tier: ContextTier,
) -> ResolutionResult {
    // Group by rule, keep the numerically highest tier.
    let mut best: HashMap<usize, MatchTier> = HashMap::new();
    for c in candidates {
        best.entry(c.index)
            .and_modify(|t| *t = (*t).max(c.tier))
            .or_insert(c.tier);
    }

    let mut ordered: Vec<Candidate> = best
        .into_iter()
        .map(|(index, tier)| Candidate { index, tier })
        .collect();
    ordered.sort_unstable_by_key(|c| (Reverse(c.tier), c.index));

    let explicit: HashSet<&str> = signals
        .explicit_rule_ids
        .iter()
        .map(String::as_str)
        .collect();

    let cap = tier.cap();
    let mut kept = Vec::new();
    let mut dropped = Vec::new();
    let mut non_explicit = 0usize;

    for c in ordered {
        let Some(rule) = catalog.get(c.index) else {
            continue;
        };
        if explicit.contains(rule.id.as_str()) {
            // Explicit mentions are exempt from the cap.
            kept.push(rule.id.clone());
        } else if non_explicit < cap {
            kept.push(rule.id.clone());
            non_explicit += 1;
        } else {
            dropped.push(rule.id.clone());
        }
    }

    ResolutionResult {
        ordered_rule_ids: kept,
        dropped_for_limit: dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rule_catalog::{RuleCategory, RuleDescriptor};

    fn catalog(n: usize) -> RuleCatalog {
        RuleCatalog::new(
            (0..n)
                .map(|i| RuleDescriptor::new(format!("rule/{i}"), RuleCategory::General))
                .collect(),
        )
        .unwrap()
    }

    fn candidate(index: usize, tier: MatchTier) -> Candidate {
        Candidate { index, tier }
    }

    #[test]
    fn sorts_by_tier_then_insertion_order() {
        let cat = catalog(3);
        let signals = ContextSignals::default();
        let out = dedup_and_cap(
            &cat,
            &signals,
            vec![
                candidate(2, MatchTier::Keyword),
                candidate(1, MatchTier::FileExtension),
                candidate(0, MatchTier::Keyword),
            ],
            ContextTier::FeatureBuild,
        );
        assert_eq!(out.ordered_rule_ids, vec!["rule/1", "rule/0", "rule/2"]);
        assert!(out.dropped_for_limit.is_empty());
    }

    #[test]
    fn duplicate_candidates_keep_best_tier() {
        let cat = catalog(2);
        let signals = ContextSignals::default();
        let out = dedup_and_cap(
            &cat,
            &signals,
            vec![
                candidate(1, MatchTier::Keyword),
                candidate(0, MatchTier::Keyword),
                candidate(1, MatchTier::ProjectManifest),
            ],
            ContextTier::FeatureBuild,
        );
        // rule/1 was upgraded to ProjectManifest, so it sorts first.
        assert_eq!(out.ordered_rule_ids, vec!["rule/1", "rule/0"]);
    }

    #[test]
    fn cap_truncates_and_records_dropped() {
        let cat = catalog(5);
        let signals = ContextSignals::default();
        let out = dedup_and_cap(
            &cat,
            &signals,
            (0..5).map(|i| candidate(i, MatchTier::Keyword)).collect(),
            ContextTier::SingleFileEdit,
        );
        assert_eq!(out.ordered_rule_ids, vec!["rule/0", "rule/1", "rule/2"]);
        assert_eq!(out.dropped_for_limit, vec!["rule/3", "rule/4"]);
    }

    #[test]
    fn explicit_rules_are_exempt_from_the_cap() {
        let cat = catalog(6);
        let signals = ContextSignals {
            explicit_rule_ids: vec!["rule/4".to_string(), "rule/5".to_string()],
            ..Default::default()
        };

        let mut candidates: Vec<Candidate> =
            (0..4).map(|i| candidate(i, MatchTier::Keyword)).collect();
        candidates.push(candidate(4, MatchTier::ExplicitMention));
        candidates.push(candidate(5, MatchTier::ExplicitMention));

        let out = dedup_and_cap(&cat, &signals, candidates, ContextTier::SingleFileEdit);
        // 2 explicit + 3 capped non-explicit.
        assert_eq!(
            out.ordered_rule_ids,
            vec!["rule/4", "rule/5", "rule/0", "rule/1", "rule/2"]
        );
        assert_eq!(out.dropped_for_limit, vec!["rule/3"]);
    }

    #[test]
    fn empty_candidates_yield_empty_result() {
        let cat = catalog(0);
        let signals = ContextSignals::default();
        let out = dedup_and_cap(&cat, &signals, vec![], ContextTier::Architecture);
        assert!(out.ordered_rule_ids.is_empty());
        assert!(out.dropped_for_limit.is_empty());
    }
}
