//! Immutable, insertion-ordered registry with trigger lookups.

use std::collections::HashMap;

use crate::descriptor::RuleDescriptor;
use crate::error::CatalogError;

/// Registry of rule descriptors, built once at startup and read-only after.
///
/// Registration order is preserved and observable via [`insertion_index`];
/// the resolver uses it as the deterministic tie-break within a match tier.
///
/// [`insertion_index`]: RuleCatalog::insertion_index
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    rules: Vec<RuleDescriptor>,
    by_id: HashMap<String, usize>,
}

impl RuleCatalog {
    /// Build a catalog, validating configuration invariants up front:
    /// duplicate IDs and self-referencing auto-includes fail fast.
    pub fn new(rules: Vec<RuleDescriptor>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(rules.len());
        for (index, rule) in rules.iter().enumerate() {
            if by_id.insert(rule.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateRuleId(rule.id.clone()));
            }
            if rule.auto_includes.iter().any(|e| e.rule == rule.id) {
                return Err(CatalogError::SelfInclude(rule.id.clone()));
            }
        }
        Ok(Self { rules, by_id })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&RuleDescriptor> {
        self.by_id.get(id).map(|&i| &self.rules[i])
    }

    /// Position of a rule in registration order.
    pub fn insertion_index(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Descriptor at a registration-order position.
    pub fn get(&self, index: usize) -> Option<&RuleDescriptor> {
        self.rules.get(index)
    }

    /// All descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RuleDescriptor> {
        self.rules.iter()
    }

    /// Rules whose extension triggers contain `ext` (case-insensitive exact
    /// match; `ext` is expected in normalized `.ext` form).
    pub fn find_by_extension(&self, ext: &str) -> Vec<&RuleDescriptor> {
        self.rules
            .iter()
            .filter(|r| {
                r.extension_triggers
                    .iter()
                    .any(|t| t.eq_ignore_ascii_case(ext))
            })
            .collect()
    }

    /// Rules with at least one manifest trigger satisfied by `manifests`
    /// (filename → raw text). Substring containment is case-sensitive.
    pub fn find_by_manifest(&self, manifests: &HashMap<String, String>) -> Vec<&RuleDescriptor> {
        self.rules
            .iter()
            .filter(|r| {
                r.manifest_triggers.iter().any(|t| {
                    manifests
                        .get(&t.file)
                        .is_some_and(|text| text.contains(&t.contains))
                })
            })
            .collect()
    }

    /// Rules with at least one keyword appearing as a case-insensitive
    /// substring of `request_text`. Substring-only, never fuzzy.
    pub fn find_by_keyword(&self, request_text: &str) -> Vec<&RuleDescriptor> {
        let text = request_text.to_lowercase();
        self.rules
            .iter()
            .filter(|r| {
                r.keyword_triggers
                    .iter()
                    .any(|k| text.contains(&k.to_lowercase()))
            })
            .collect()
    }
}
