//! Built-in default rule corpus.
//!
//! Mirrors the shipped trigger tables of the instruction corpus: one
//! descriptor per expert-rule document, with the extension, manifest, and
//! keyword triggers under which each document auto-activates. Used when no
//! external index file is configured.

use crate::catalog::RuleCatalog;
use crate::descriptor::{RuleCategory, RuleDescriptor};

/// The default catalog. Validity of the built-in corpus is a compile-time
/// responsibility of this module, enforced by tests.
pub fn default_catalog() -> RuleCatalog {
    RuleCatalog::new(default_rules()).expect("built-in rule corpus is valid")
}

fn default_rules() -> Vec<RuleDescriptor> {
    use RuleCategory::*;

    vec![
        RuleDescriptor::new("frontend-frameworks/vue3", FrontendFrameworks)
            .with_extensions(&[".vue"])
            .with_manifest("package.json", "\"vue\"")
            .with_keywords(&["vue", "composition api", "pinia"])
            .with_conditional_include("web-development/tailwind", "package.json", "tailwind"),
        RuleDescriptor::new("frontend-frameworks/react", FrontendFrameworks)
            .with_extensions(&[".jsx"])
            .with_manifest("package.json", "\"react\"")
            .with_keywords(&["react", "jsx", "hooks", "usestate"])
            .with_conditional_include("web-development/tailwind", "package.json", "tailwind"),
        RuleDescriptor::new("frontend-frameworks/angular", FrontendFrameworks)
            .with_manifest("package.json", "@angular/core")
            .with_keywords(&["angular", "ngmodule", "standalone component"]),
        RuleDescriptor::new("nextjs/core", Nextjs)
            .with_manifest("package.json", "\"next\"")
            .with_keywords(&["next.js", "nextjs", "app router", "server component"])
            .with_include("frontend-frameworks/react")
            .with_conditional_include("typescript/core", "package.json", "typescript"),
        RuleDescriptor::new("typescript/core", Typescript)
            .with_extensions(&[".ts", ".tsx"])
            .with_manifest("package.json", "typescript")
            .with_keywords(&["typescript", "type error", "generics"]),
        RuleDescriptor::new("web-development/tailwind", WebDevelopment)
            .with_manifest("package.json", "tailwind")
            .with_keywords(&["tailwind", "utility classes"]),
        RuleDescriptor::new("web-development/css", WebDevelopment)
            .with_extensions(&[".css", ".scss"])
            .with_keywords(&["stylesheet", "css layout", "responsive design"]),
        RuleDescriptor::new("backend-frameworks/php", BackendFrameworks)
            .with_extensions(&[".php"])
            .with_keywords(&["php"]),
        RuleDescriptor::new("backend-frameworks/laravel", BackendFrameworks)
            .with_manifest("composer.json", "laravel/framework")
            .with_keywords(&["laravel", "eloquent", "artisan", "blade"])
            .with_include("backend-frameworks/php"),
        RuleDescriptor::new("backend-frameworks/django", BackendFrameworks)
            .with_manifest("requirements.txt", "django")
            .with_manifest("pyproject.toml", "django")
            .with_keywords(&["django", "queryset", "orm migration"])
            .with_include("python/core"),
        RuleDescriptor::new("backend-frameworks/spring", BackendFrameworks)
            .with_extensions(&[".java", ".kt"])
            .with_manifest("build.gradle", "org.springframework")
            .with_manifest("pom.xml", "spring-boot")
            .with_keywords(&["spring boot", "spring mvc"]),
        RuleDescriptor::new("python/core", Python)
            .with_extensions(&[".py"])
            .with_keywords(&["python"]),
        RuleDescriptor::new("python/fastapi", Python)
            .with_manifest("requirements.txt", "fastapi")
            .with_manifest("pyproject.toml", "fastapi")
            .with_keywords(&["fastapi", "pydantic"])
            .with_include("python/core"),
        RuleDescriptor::new("testing/pytest", Testing)
            .with_manifest("requirements.txt", "pytest")
            .with_manifest("pyproject.toml", "pytest")
            .with_keywords(&["pytest", "unit test", "fixture", "test coverage"])
            .with_include("python/core"),
        RuleDescriptor::new("mobile/flutter", Mobile)
            .with_extensions(&[".dart"])
            .with_manifest("pubspec.yaml", "flutter")
            .with_keywords(&["flutter", "widget", "dart"]),
        RuleDescriptor::new("mobile/react-native", Mobile)
            .with_manifest("package.json", "react-native")
            .with_keywords(&["react native", "expo"])
            .with_include("frontend-frameworks/react"),
        RuleDescriptor::new("database/sql", Database)
            .with_extensions(&[".sql"])
            .with_keywords(&["sql query", "index tuning", "stored procedure"]),
        RuleDescriptor::new("database/design", Database)
            .with_keywords(&["schema design", "database architecture", "normalization"]),
        RuleDescriptor::new("agentic-ai/llm-integration", AgenticAi)
            .with_keywords(&["llm", "prompt engineering", "agent workflow", "rag pipeline"]),
        RuleDescriptor::new("general/debugging", General)
            .with_keywords(&["fix", "debug", "error", "bug", "stack trace"]),
        RuleDescriptor::new("general/git", General)
            .with_keywords(&["merge conflict", "rebase", "cherry-pick"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_corpus_is_valid() {
        // `default_catalog` panics on duplicate IDs or self-edges.
        let catalog = default_catalog();
        assert!(catalog.len() >= 20);
    }

    #[test]
    fn all_include_targets_exist() {
        let catalog = default_catalog();
        for rule in catalog.iter() {
            for edge in &rule.auto_includes {
                assert!(
                    catalog.get_by_id(&edge.rule).is_some(),
                    "rule {} includes unknown target {}",
                    rule.id,
                    edge.rule
                );
            }
        }
    }

    #[test]
    fn extension_triggers_are_normalized() {
        for rule in default_catalog().iter() {
            for ext in &rule.extension_triggers {
                assert!(ext.starts_with('.'), "{} trigger {ext} lacks a dot", rule.id);
                assert_eq!(ext, &ext.to_lowercase(), "{} trigger {ext}", rule.id);
            }
        }
    }

    #[test]
    fn keyword_triggers_are_lowercase() {
        for rule in default_catalog().iter() {
            for kw in &rule.keyword_triggers {
                assert_eq!(kw, &kw.to_lowercase(), "{} keyword {kw}", rule.id);
            }
        }
    }
}
