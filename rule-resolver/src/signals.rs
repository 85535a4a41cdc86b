//! Normalized per-turn context signals.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Manifest filenames the extractor considers. Anything else handed in by
/// the collaborator-side file reader is ignored.
pub const KNOWN_MANIFESTS: &[&str] = &[
    "package.json",
    "composer.json",
    "pubspec.yaml",
    "requirements.txt",
    "pyproject.toml",
    "Cargo.toml",
    "go.mod",
    "Gemfile",
    "build.gradle",
    "pom.xml",
];

/// Context evidence for one resolution call.
///
/// Built fresh per turn via [`ContextSignals::extract`] and discarded after;
/// nothing here is persisted across calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextSignals {
    /// Open file's extension, normalized (leading dot, lowercase), if any.
    pub active_extension: Option<String>,
    /// Raw manifest text keyed by filename, restricted to [`KNOWN_MANIFESTS`].
    pub manifest_contents: HashMap<String, String>,
    /// Free-text request, whitespace-trimmed. May be empty.
    pub request_text: String,
    /// Rule IDs the user force-requested (already parsed by the intent
    /// collaborator; this crate never sees natural language).
    pub explicit_rule_ids: Vec<String>,
    /// When set, trigger matching and auto-includes are skipped entirely and
    /// only the explicit IDs survive.
    pub disable_auto_load: bool,
}

impl ContextSignals {
    /// Normalize raw collaborator inputs into signals.
    ///
    /// Unknown manifest filenames are dropped, the request text is trimmed,
    /// and `active_file` is reduced to its normalized extension. Missing or
    /// malformed inputs never fail; they just contribute nothing.
    pub fn extract(
        active_file: Option<&str>,
        manifests: HashMap<String, String>,
        request_text: &str,
        explicit_rule_ids: Vec<String>,
        disable_auto_load: bool,
    ) -> Self {
        let manifest_contents = manifests
            .into_iter()
            .filter(|(name, _)| KNOWN_MANIFESTS.contains(&name.as_str()))
            .collect();

        Self {
            active_extension: active_file.and_then(normalize_extension),
            manifest_contents,
            request_text: request_text.trim().to_string(),
            explicit_rule_ids,
            disable_auto_load,
        }
    }
}

/// Normalize a path, filename, or bare extension token to `.ext` form.
///
/// `"src/App.Vue"` → `".vue"`, `"Component.VUE"` → `".vue"`, `"rs"` →
/// `".rs"`. Empty or dot-terminated tokens yield `None`.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    // Drop directory segments first so dots in directory names don't leak in.
    let file = trimmed
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(trimmed);
    let token = match file.rfind('.') {
        Some(pos) => &file[pos + 1..],
        // A bare token like "vue" is treated as the extension itself.
        None => file,
    };
    if token.is_empty() {
        return None;
    }
    Some(format!(".{}", token.to_lowercase()))
}
