//! Rule variants and their application.
//!
//! A rule is one ordered substitution step. Deletions are replacements
//! with an empty `to`.

use regex::{NoExpand, Regex};

use crate::error::EditError;

/// A single substitution step, tagged by matching strategy.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Exact-substring find-and-replace.
    ReplaceLiteral {
        /// Short name used in outcomes and logs.
        name: &'static str,
        /// Substring to find.
        from: String,
        /// Replacement text.
        to: String,
    },
    /// Regular-expression find-and-replace, potentially spanning lines.
    ReplacePattern {
        /// Short name used in outcomes and logs.
        name: &'static str,
        /// Compiled matcher.
        matcher: Regex,
        /// Replacement text, inserted verbatim (no capture expansion).
        replacement: String,
    },
}

impl Rule {
    /// Build a literal substitution rule.
    #[must_use]
    pub fn literal(name: &'static str, from: &str, to: &str) -> Self {
        Self::ReplaceLiteral {
            name,
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Build a literal deletion rule.
    #[must_use]
    pub fn delete_literal(name: &'static str, from: &str) -> Self {
        Self::literal(name, from, "")
    }

    /// Build a pattern substitution rule.
    ///
    /// # Errors
    /// Returns `EditError::Pattern` when the regular expression is invalid.
    pub fn pattern(name: &'static str, pattern: &str, replacement: &str) -> Result<Self, EditError> {
        let matcher = Regex::new(pattern).map_err(|e| EditError::Pattern(e.to_string()))?;
        Ok(Self::ReplacePattern {
            name,
            matcher,
            replacement: replacement.to_string(),
        })
    }

    /// Build a pattern deletion rule.
    ///
    /// # Errors
    /// Returns `EditError::Pattern` when the regular expression is invalid.
    pub fn delete_pattern(name: &'static str, pattern: &str) -> Result<Self, EditError> {
        Self::pattern(name, pattern, "")
    }

    /// The rule's short name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReplaceLiteral { name, .. } | Self::ReplacePattern { name, .. } => name,
        }
    }

    /// Apply the rule to `content`, replacing every occurrence.
    ///
    /// Returns the (possibly unchanged) text and the number of occurrences
    /// replaced. Zero occurrences is a no-op, never an error.
    ///
    /// Pattern replacements are inserted via [`NoExpand`]: the rewritten
    /// class lists contain literal `${...}` template fragments that must
    /// not be interpreted as capture group references.
    #[must_use]
    pub fn apply(&self, content: &str) -> (String, usize) {
        match self {
            Self::ReplaceLiteral { from, to, .. } => {
                let matches = content.matches(from.as_str()).count();
                if matches == 0 {
                    (content.to_string(), 0)
                } else {
                    (content.replace(from.as_str(), to), matches)
                }
            }
            Self::ReplacePattern {
                matcher,
                replacement,
                ..
            } => {
                let matches = matcher.find_iter(content).count();
                if matches == 0 {
                    (content.to_string(), 0)
                } else {
                    (
                        matcher
                            .replace_all(content, NoExpand(replacement))
                            .into_owned(),
                        matches,
                    )
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_replaces_every_occurrence() {
        let rule = Rule::literal("demo", "old", "new");
        let (out, n) = rule.apply("old old old");
        assert_eq!(out, "new new new");
        assert_eq!(n, 3);
    }

    #[test]
    fn test_literal_no_match_is_noop() {
        let rule = Rule::literal("demo", "absent", "new");
        let (out, n) = rule.apply("untouched text");
        assert_eq!(out, "untouched text");
        assert_eq!(n, 0);
    }

    #[test]
    fn test_delete_literal() {
        let rule = Rule::delete_literal("demo", ", unwanted");
        let (out, n) = rule.apply("keep, unwanted, keep");
        assert_eq!(out, "keep, keep");
        assert_eq!(n, 1);
    }

    #[test]
    fn test_pattern_spans_lines() {
        let rule = Rule::pattern("demo", r"a\n\s*b", "ab").unwrap();
        let (out, n) = rule.apply("x a\n   b y");
        assert_eq!(out, "x ab y");
        assert_eq!(n, 1);
    }

    #[test]
    fn test_pattern_replacement_dollar_is_literal() {
        // Replacement text carries template fragments like `${state.x}`;
        // they must land in the output verbatim.
        let rule = Rule::pattern("demo", r"POS", "translate(${state.x}px)").unwrap();
        let (out, n) = rule.apply("transform: POS");
        assert_eq!(out, "transform: translate(${state.x}px)");
        assert_eq!(n, 1);
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let result = Rule::pattern("demo", r"([unclosed", "x");
        assert!(matches!(result, Err(EditError::Pattern(_))));
    }
}
