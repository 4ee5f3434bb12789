//! Diff generation utilities.
//!
//! Unified diff output for rewrite previews, via the `similar` crate.

use similar::{ChangeTag, TextDiff};

/// Generate a unified diff between two strings.
///
/// Line-by-line with three lines of context; hunks are separated by `...`.
/// Returns an empty string when the inputs are identical.
#[must_use]
pub fn generate_unified_diff(original: &str, modified: &str) -> String {
    if original == modified {
        return String::new();
    }

    let diff = TextDiff::from_lines(original, modified);
    let mut output = String::new();

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            output.push_str("...\n");
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };
                output.push_str(sign);
                output.push_str(change.value());
                if change.missing_newline() {
                    output.push('\n');
                }
            }
        }
    }

    output
}
