//! Data model for rule documents: IDs, categories, triggers, include edges.

use serde::{Deserialize, Serialize};

/// Fixed category taxonomy for rule documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleCategory {
    Database,
    Mobile,
    BackendFrameworks,
    Typescript,
    FrontendFrameworks,
    Nextjs,
    Python,
    WebDevelopment,
    AgenticAi,
    Testing,
    General,
}

/// Manifest predicate: holds when the named manifest file is present and its
/// raw text contains `contains` (case-sensitive substring).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestTrigger {
    pub file: String,
    pub contains: String,
}

/// Edge to another rule that loads together with this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoInclude {
    /// Target rule ID.
    pub rule: String,
    /// Optional secondary predicate; when set, the edge is followed only if
    /// the predicate holds against the current manifest contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<ManifestTrigger>,
}

/// One loadable rule document and its activation triggers.
///
/// The document body is opaque to this crate; descriptors carry only the
/// metadata needed to decide when the document should load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    /// Stable, globally unique, path-like identifier.
    pub id: String,
    pub category: RuleCategory,
    /// File extensions in normalized form (leading dot, lowercase).
    #[serde(default, rename = "extensions", skip_serializing_if = "Vec::is_empty")]
    pub extension_triggers: Vec<String>,
    #[serde(default, rename = "manifests", skip_serializing_if = "Vec::is_empty")]
    pub manifest_triggers: Vec<ManifestTrigger>,
    /// Lowercase keywords/phrases matched as substrings of the request text.
    #[serde(default, rename = "keywords", skip_serializing_if = "Vec::is_empty")]
    pub keyword_triggers: Vec<String>,
    /// Other rules to load whenever this one loads.
    #[serde(default, rename = "auto_includes", skip_serializing_if = "Vec::is_empty")]
    pub auto_includes: Vec<AutoInclude>,
}

impl RuleDescriptor {
    /// Descriptor with no triggers; chain the `with_*` builders to add them.
    pub fn new(id: impl Into<String>, category: RuleCategory) -> Self {
        Self {
            id: id.into(),
            category,
            extension_triggers: Vec::new(),
            manifest_triggers: Vec::new(),
            keyword_triggers: Vec::new(),
            auto_includes: Vec::new(),
        }
    }

    pub fn with_extensions(mut self, exts: &[&str]) -> Self {
        self.extension_triggers
            .extend(exts.iter().map(|e| e.to_string()));
        self
    }

    pub fn with_manifest(mut self, file: &str, contains: &str) -> Self {
        self.manifest_triggers.push(ManifestTrigger {
            file: file.to_string(),
            contains: contains.to_string(),
        });
        self
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keyword_triggers
            .extend(keywords.iter().map(|k| k.to_string()));
        self
    }

    /// Unconditional auto-include edge.
    pub fn with_include(mut self, rule: &str) -> Self {
        self.auto_includes.push(AutoInclude {
            rule: rule.to_string(),
            when: None,
        });
        self
    }

    /// Auto-include edge gated on a manifest predicate.
    pub fn with_conditional_include(mut self, rule: &str, file: &str, contains: &str) -> Self {
        self.auto_includes.push(AutoInclude {
            rule: rule.to_string(),
            when: Some(ManifestTrigger {
                file: file.to_string(),
                contains: contains.to_string(),
            }),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_triggers() {
        let rule = RuleDescriptor::new("frontend-frameworks/vue3", RuleCategory::FrontendFrameworks)
            .with_extensions(&[".vue"])
            .with_manifest("package.json", "vue")
            .with_keywords(&["vue", "composition api"])
            .with_conditional_include("web-development/tailwind", "package.json", "tailwind");

        assert_eq!(rule.extension_triggers, vec![".vue"]);
        assert_eq!(rule.manifest_triggers.len(), 1);
        assert_eq!(rule.keyword_triggers.len(), 2);
        assert_eq!(rule.auto_includes.len(), 1);
        assert!(rule.auto_includes[0].when.is_some());
    }

    #[test]
    fn descriptor_deserializes_with_defaults() {
        let json = r#"{ "id": "general/debugging", "category": "general" }"#;
        let rule: RuleDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(rule.id, "general/debugging");
        assert_eq!(rule.category, RuleCategory::General);
        assert!(rule.extension_triggers.is_empty());
        assert!(rule.auto_includes.is_empty());
    }

    #[test]
    fn category_uses_kebab_case_names() {
        let json = r#""backend-frameworks""#;
        let cat: RuleCategory = serde_json::from_str(json).unwrap();
        assert_eq!(cat, RuleCategory::BackendFrameworks);
        assert_eq!(serde_json::to_string(&cat).unwrap(), json);
    }
}
