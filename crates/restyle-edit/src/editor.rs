//! Core rewriter implementation.
//!
//! Applies ordered rule lists to content or to files in place.

use std::path::Path;

use crate::diff::generate_unified_diff;
use crate::error::EditError;
use crate::rule::Rule;
use crate::types::{RewriteConfig, RewriteResult, RuleOutcome};

/// Rewriter - ordered rule application engine.
///
/// Rules run top to bottom over the whole text. Later rules see the output
/// of earlier ones, which some rule lists depend on (a cleanup rule can
/// only fire on the remnant an earlier deletion left behind).
///
/// # Example
///
/// ```rust,ignore
/// use restyle_edit::{Rewriter, Rule};
///
/// let rules = vec![Rule::literal("svg-classes", "className=\"canvas-svg\"",
///     "className=\"absolute inset-0 w-full h-full pointer-events-none z-0\"")];
/// let result = Rewriter::rewrite("<svg className=\"canvas-svg\">", &rules);
/// assert!(result.changed());
/// ```
pub struct Rewriter;

impl Rewriter {
    /// Apply `rules` in order to `content`.
    ///
    /// Every rule contributes a [`RuleOutcome`], zero-match entries
    /// included; a zero-match rule is additionally logged at WARN so a
    /// drifted target file is visible in the run output.
    #[must_use]
    pub fn rewrite(content: &str, rules: &[Rule]) -> RewriteResult {
        let mut modified = content.to_string();
        let mut count = 0;
        let mut outcomes = Vec::with_capacity(rules.len());

        for rule in rules {
            let (next, matches) = rule.apply(&modified);
            if matches == 0 {
                tracing::warn!(rule = rule.name(), "no match, text left unchanged");
            } else {
                tracing::debug!(rule = rule.name(), matches, "rule applied");
                modified = next;
                count += matches;
            }
            outcomes.push(RuleOutcome {
                rule: rule.name(),
                matches,
            });
        }

        let diff = generate_unified_diff(content, &modified);

        RewriteResult {
            original: content.to_string(),
            modified,
            count,
            diff,
            outcomes,
        }
    }

    /// Apply `rules` to the file at `path`.
    ///
    /// The file is read fully, rewritten in memory, and written back only
    /// when `config.preview_only` is false and at least one rule matched.
    /// A crash mid-rewrite therefore cannot corrupt the on-disk file.
    ///
    /// # Errors
    /// Propagates read failures (`EditError::Io`) and write failures
    /// (`EditError::Write`).
    pub fn rewrite_file<P: AsRef<Path>>(
        path: P,
        rules: &[Rule],
        config: &RewriteConfig,
    ) -> Result<RewriteResult, EditError> {
        let path = path.as_ref();
        let content = restyle_io::read_text_safe(path, config.max_file_size)?;

        let result = Self::rewrite(&content, rules);

        if !config.preview_only && result.count > 0 {
            std::fs::write(path, &result.modified)
                .map_err(|e| EditError::Write(format!("{}: {e}", path.display())))?;
        }

        Ok(result)
    }

    /// Preview a rewrite (no file modification).
    ///
    /// # Errors
    /// Propagates read failures.
    pub fn preview<P: AsRef<Path>>(path: P, rules: &[Rule]) -> Result<RewriteResult, EditError> {
        Self::rewrite_file(path, rules, &RewriteConfig::default())
    }

    /// Apply a rewrite (modify the file in place).
    ///
    /// **Use with caution** - no backup is created.
    ///
    /// # Errors
    /// Propagates read and write failures.
    pub fn apply<P: AsRef<Path>>(path: P, rules: &[Rule]) -> Result<RewriteResult, EditError> {
        Self::rewrite_file(
            path,
            rules,
            &RewriteConfig {
                preview_only: false,
                ..Default::default()
            },
        )
    }

    /// Format a rewrite result for display.
    ///
    /// Returns a human-readable summary: per-rule outcomes, then the diff.
    #[must_use]
    pub fn format_result(result: &RewriteResult, path: Option<&str>) -> String {
        let mut output = String::new();

        if let Some(p) = path {
            output.push_str(&format!("// REWRITE: {p}\n"));
        }
        output.push_str(&format!("// Replacements: {}\n", result.count));

        output.push_str("\n// Rules:\n");
        for outcome in &result.outcomes {
            if outcome.matches == 0 {
                output.push_str(&format!("{}: no match\n", outcome.rule));
            } else {
                output.push_str(&format!("{}: {}\n", outcome.rule, outcome.matches));
            }
        }

        if result.count == 0 {
            output.push_str("\n[No matches found]\n");
            return output;
        }

        output.push_str("\n// Diff:\n");
        output.push_str(&result.diff);

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_applies_in_order() {
        // The second rule only matches the remnant the first one produced.
        let rules = vec![
            Rule::literal("first", "alpha", "beta"),
            Rule::literal("second", "beta beta", "gamma"),
        ];
        let result = Rewriter::rewrite("alpha beta", &rules);
        assert_eq!(result.modified, "gamma");
        assert_eq!(result.count, 2);
    }

    #[test]
    fn test_rewrite_records_zero_match_outcomes() {
        let rules = vec![
            Rule::literal("hit", "x", "y"),
            Rule::literal("miss", "absent", "z"),
        ];
        let result = Rewriter::rewrite("x", &rules);
        assert_eq!(result.outcomes.len(), 2);
        assert_eq!(result.outcomes[0].matches, 1);
        assert_eq!(result.outcomes[1].matches, 0);
    }

    #[test]
    fn test_rewrite_no_matches_preserves_text() {
        let rules = vec![Rule::literal("miss", "absent", "z")];
        let result = Rewriter::rewrite("original text", &rules);
        assert_eq!(result.original, result.modified);
        assert!(!result.changed());
        assert!(result.diff.is_empty());
    }

    #[test]
    fn test_format_result() {
        let rules = vec![Rule::literal("svg-classes", "canvas-svg", "z-0")];
        let result = Rewriter::rewrite("<svg className=\"canvas-svg\">", &rules);
        let formatted = Rewriter::format_result(&result, Some("Canvas.tsx"));

        assert!(formatted.contains("REWRITE: Canvas.tsx"));
        assert!(formatted.contains("Replacements: 1"));
        assert!(formatted.contains("svg-classes: 1"));
        assert!(formatted.contains("Diff:"));
    }

    #[test]
    fn test_format_result_no_matches() {
        let rules = vec![Rule::literal("miss", "absent", "z")];
        let result = Rewriter::rewrite("text", &rules);
        let formatted = Rewriter::format_result(&result, None);

        assert!(formatted.contains("miss: no match"));
        assert!(formatted.contains("[No matches found]"));
    }
}
