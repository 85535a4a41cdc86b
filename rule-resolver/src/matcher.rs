//! Stage 3: map signals to candidate rules, one entry per (rule, tier) hit.

use rule_catalog::RuleCatalog;
use tracing::debug;

use crate::signals::ContextSignals;
use crate::tier::MatchTier;

/// One candidate: catalog insertion index plus the tier it matched under.
/// A rule may appear several times here, once per tier that hit; the limiter
/// keeps the best.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub index: usize,
    pub tier: MatchTier,
}

pub(crate) fn match_rules(catalog: &RuleCatalog, signals: &ContextSignals) -> Vec<Candidate> {
    let mut out = Vec::new();

    for id in &signals.explicit_rule_ids {
        match catalog.insertion_index(id) {
            Some(index) => out.push(Candidate {
                index,
                tier: MatchTier::ExplicitMention,
            }),
            // Unknown explicit IDs signal a caller/config error, not a
            // runtime failure; drop them silently.
            None => debug!(rule = %id, "explicit rule not in catalog, skipped"),
        }
    }

    if signals.disable_auto_load {
        return out;
    }

    if let Some(ext) = &signals.active_extension {
        for rule in catalog.find_by_extension(ext) {
            if let Some(index) = catalog.insertion_index(&rule.id) {
                out.push(Candidate {
                    index,
                    tier: MatchTier::FileExtension,
                });
            }
        }
    }

    if !signals.manifest_contents.is_empty() {
        for rule in catalog.find_by_manifest(&signals.manifest_contents) {
            if let Some(index) = catalog.insertion_index(&rule.id) {
                out.push(Candidate {
                    index,
                    tier: MatchTier::ProjectManifest,
                });
            }
        }
    }

    if !signals.request_text.is_empty() {
        for rule in catalog.find_by_keyword(&signals.request_text) {
            if let Some(index) = catalog.insertion_index(&rule.id) {
                out.push(Candidate {
                    index,
                    tier: MatchTier::Keyword,
                });
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rule_catalog::{RuleCategory, RuleDescriptor};
    use std::collections::HashMap;

    fn catalog() -> RuleCatalog {
        RuleCatalog::new(vec![
            RuleDescriptor::new("mobile/flutter", RuleCategory::Mobile)
                .with_extensions(&[".dart"])
                .with_manifest("pubspec.yaml", "flutter")
                .with_keywords(&["flutter"]),
            RuleDescriptor::new("general/debugging", RuleCategory::General)
                .with_keywords(&["fix", "debug"]),
        ])
        .unwrap()
    }

    #[test]
    fn one_entry_per_matching_tier() {
        let cat = catalog();
        let mut manifests = HashMap::new();
        manifests.insert("pubspec.yaml".to_string(), "uses flutter sdk".to_string());
        let signals = ContextSignals::extract(
            Some("lib/main.dart"),
            manifests,
            "flutter widget tree",
            vec![],
            false,
        );

        let hits = match_rules(&cat, &signals);
        let flutter: Vec<MatchTier> = hits.iter().filter(|c| c.index == 0).map(|c| c.tier).collect();
        assert!(flutter.contains(&MatchTier::FileExtension));
        assert!(flutter.contains(&MatchTier::ProjectManifest));
        assert!(flutter.contains(&MatchTier::Keyword));
    }

    #[test]
    fn unknown_explicit_ids_are_dropped() {
        let cat = catalog();
        let signals =
            ContextSignals::extract(None, HashMap::new(), "", vec!["nope".to_string()], false);
        assert!(match_rules(&cat, &signals).is_empty());
    }

    #[test]
    fn disable_flag_keeps_only_explicit_hits() {
        let cat = catalog();
        let signals = ContextSignals::extract(
            Some("lib/main.dart"),
            HashMap::new(),
            "fix this",
            vec!["general/debugging".to_string()],
            true,
        );
        let hits = match_rules(&cat, &signals);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, 1);
        assert_eq!(hits[0].tier, MatchTier::ExplicitMention);
    }

    #[test]
    fn empty_request_text_skips_keyword_stage() {
        let cat = catalog();
        let signals = ContextSignals::extract(None, HashMap::new(), "   ", vec![], false);
        assert!(match_rules(&cat, &signals).is_empty());
    }
}
