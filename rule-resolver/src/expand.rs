//! Stage 4: breadth-first auto-include expansion over the matched set.

use std::collections::{HashMap, HashSet, VecDeque};

use rule_catalog::{ManifestTrigger, RuleCatalog};
use tracing::debug;

use crate::matcher::Candidate;
use crate::signals::ContextSignals;
use crate::tier::MatchTier;

/// Follow `auto_includes` edges from every matched rule, honoring edge
/// conditions. Each rule is expanded at most once (visited set), so cyclic
/// edge tables terminate. Returns one candidate per rule at its best tier,
/// in catalog insertion order.
pub(crate) fn expand_includes(
    catalog: &RuleCatalog,
    signals: &ContextSignals,
    matches: Vec<Candidate>,
) -> Vec<Candidate> {
    // Collapse direct matches to their best tier per rule.
    let mut best: HashMap<usize, MatchTier> = HashMap::new();
    for c in &matches {
        best.entry(c.index)
            .and_modify(|t| *t = (*t).max(c.tier))
            .or_insert(c.tier);
    }

    // Seed the traversal in catalog order so tier inheritance on shared
    // targets is deterministic.
    let mut seeds: Vec<usize> = best.keys().copied().collect();
    seeds.sort_unstable();

    let mut visited: HashSet<usize> = seeds.iter().copied().collect();
    let mut queue: VecDeque<usize> = seeds.into_iter().collect();

    while let Some(index) = queue.pop_front() {
        let Some(rule) = catalog.get(index) else {
            continue;
        };
        // Included rules inherit the introducer's tier, but expansion never
        // grants explicit-mention priority.
        let inherited = best[&index].min(MatchTier::FileExtension);

        for edge in &rule.auto_includes {
            if !condition_holds(edge.when.as_ref(), signals) {
                continue;
            }
            let Some(target) = catalog.insertion_index(&edge.rule) else {
                debug!(from = %rule.id, to = %edge.rule, "auto-include target not in catalog");
                continue;
            };
            // Re-adding an already-included rule is a no-op.
            if !visited.insert(target) {
                continue;
            }
            best.insert(target, inherited);
            queue.push_back(target);
        }
    }

    let mut out: Vec<Candidate> = best
        .into_iter()
        .map(|(index, tier)| Candidate { index, tier })
        .collect();
    out.sort_unstable_by_key(|c| c.index);
    out
}

/// Evaluate an optional edge condition against the turn's manifest map.
/// An absent manifest makes the condition false, never an error.
fn condition_holds(when: Option<&ManifestTrigger>, signals: &ContextSignals) -> bool {
    match when {
        None => true,
        Some(cond) => signals
            .manifest_contents
            .get(&cond.file)
            .is_some_and(|text| text.contains(&cond.contains)),
    }
}
