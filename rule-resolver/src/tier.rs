//! Match priority tiers and per-task-scope size caps.

use serde::{Deserialize, Serialize};

/// Priority class assigned by the signal type that produced a match.
///
/// Declaration order is ascending priority, so the derived `Ord` ranks
/// `ExplicitMention` above everything else ("force load" semantics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    Keyword,
    ProjectManifest,
    FileExtension,
    ExplicitMention,
}

/// Caller-declared scope of the current task. Only selects the output cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContextTier {
    SingleFileEdit,
    FeatureBuild,
    MultiFileTask,
    Architecture,
}

impl ContextTier {
    /// Maximum number of non-explicit rules in the result. Explicit mentions
    /// are exempt and may push the total above this number.
    pub fn cap(self) -> usize {
        match self {
            ContextTier::SingleFileEdit => 3,
            ContextTier::FeatureBuild => 5,
            ContextTier::MultiFileTask => 7,
            // Soft cap: overflow is still reported via `dropped_for_limit`.
            ContextTier::Architecture => 10,
        }
    }
}
