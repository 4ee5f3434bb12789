#![allow(clippy::doc_markdown)]

//! restyle-edit - Text rewrite engine for the restyle toolchain
//!
//! Applies an ordered list of substitution rules to file content and
//! reports what each rule did. A rule that matches nothing is not an
//! error: the step becomes a no-op, the outcome records zero matches,
//! and the run continues.
//!
//! # Features
//!
//! - **Tagged rules**: literal and pattern substitutions as explicit variants
//! - **Visible no-ops**: per-rule match counts in every result
//! - **Diff Preview**: unified diffs before applying changes
//! - **Preview by default**: files are only written on explicit apply
//!
//! # Architecture
//!
//! ```text
//! restyle-edit/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # EditError enum (thiserror)
//! ├── types.rs    # RewriteResult, RuleOutcome, RewriteConfig
//! ├── rule.rs     # Rule variants and application
//! ├── diff.rs     # Diff generation utilities
//! └── editor.rs   # Rewriter implementation
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use restyle_edit::{Rewriter, Rule};
//!
//! let rules = vec![Rule::literal(
//!     "canvas-area-classes",
//!     "className=\"canvas-area\"",
//!     "id=\"canvas-area\" className=\"flex-1 relative overflow-hidden\"",
//! )];
//! let result = Rewriter::rewrite(content, &rules);
//! assert_eq!(result.outcomes[0].matches, 1);
//! ```

mod diff;
mod editor;
mod error;
mod rule;
mod types;

pub use editor::Rewriter;
pub use error::EditError;
pub use rule::Rule;
pub use types::{RewriteConfig, RewriteResult, RuleOutcome};

// Re-export diff utility for external use
pub use diff::generate_unified_diff;
