//! Core types for the rewrite pipeline.

use serde::Serialize;

/// What a single rule did to the text.
///
/// `matches == 0` is the visible form of a silent no-op: the rule's
/// expected shape was absent and the text passed through unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct RuleOutcome {
    /// Rule name, stable across runs.
    pub rule: &'static str,
    /// Number of occurrences replaced.
    pub matches: usize,
}

/// Result of applying a rule list to one piece of content.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteResult {
    /// Original content before modification.
    pub original: String,
    /// Modified content after all rules ran.
    pub modified: String,
    /// Total number of replacements across all rules.
    pub count: usize,
    /// Unified diff showing changes (empty when nothing matched).
    pub diff: String,
    /// Per-rule outcomes, in application order, zero-match entries included.
    pub outcomes: Vec<RuleOutcome>,
}

impl RewriteResult {
    /// Whether any rule changed the text.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.count > 0
    }
}

/// Configuration for file-level rewrite operations.
pub struct RewriteConfig {
    /// Maximum file size in bytes (default 1MB).
    pub max_file_size: u64,
    /// Whether to preview only (no actual file modification).
    pub preview_only: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            max_file_size: 1024 * 1024, // 1MB
            preview_only: true,         // Default to preview for safety
        }
    }
}
