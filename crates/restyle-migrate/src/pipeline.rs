//! Sequential migration pipeline over the fixed target files.
//!
//! Each migration performs one scoped read, an in-memory rewrite, and at
//! most one scoped write. The write only happens after the full rewrite
//! succeeded, so an abort mid-run leaves every remaining file in its
//! original state. The first I/O failure ends the run.

use std::path::Path;

use serde::Serialize;

use restyle_edit::{EditError, RewriteConfig, RewriteResult, Rewriter, Rule};

use crate::migrations::{canvas, edge, node};

/// One target file plus its ordered rule list.
pub struct Migration {
    /// Migration name used in logs and reports.
    pub name: &'static str,
    /// Target path relative to the project root.
    pub target: &'static str,
    /// Whether the rewritten text is written back.
    pub persist: bool,
    /// Ordered rules.
    pub rules: Vec<Rule>,
}

/// Report for one migration run.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    /// Migration name.
    pub name: &'static str,
    /// Resolved target path.
    pub path: String,
    /// Whether the result was written back to disk.
    pub persisted: bool,
    /// Rewrite outcome, per-rule counts included.
    pub result: RewriteResult,
}

/// Build the three migrations in execution order.
///
/// # Errors
/// Returns `EditError::Pattern` if any rule list fails to compile.
pub fn plan() -> Result<Vec<Migration>, EditError> {
    Ok(vec![
        Migration {
            name: "canvas",
            target: canvas::TARGET,
            persist: true,
            rules: canvas::rules()?,
        },
        Migration {
            name: "edge",
            target: edge::TARGET,
            persist: true,
            rules: edge::rules()?,
        },
        Migration {
            name: "node",
            target: node::TARGET,
            persist: node::PERSIST,
            rules: node::rules()?,
        },
    ])
}

/// Run every migration sequentially under `root`.
///
/// With `dry_run` no file is written, regardless of each migration's
/// persistence flag. A migration whose rules all miss still produces a
/// report; a missing target file aborts the run.
///
/// # Errors
/// Propagates the first read or write failure.
pub fn run(root: &Path, dry_run: bool) -> Result<Vec<MigrationReport>, EditError> {
    let mut reports = Vec::new();

    for migration in plan()? {
        let path = root.join(migration.target);
        let persisting = migration.persist && !dry_run;
        let config = RewriteConfig {
            preview_only: !persisting,
            ..Default::default()
        };

        tracing::info!(migration = migration.name, path = %path.display(), "rewriting");
        let result = Rewriter::rewrite_file(&path, &migration.rules, &config)?;

        let persisted = persisting && result.changed();
        tracing::info!(
            migration = migration.name,
            replacements = result.count,
            persisted,
            "done"
        );

        reports.push(MigrationReport {
            name: migration.name,
            path: path.display().to_string(),
            persisted,
            result,
        });
    }

    Ok(reports)
}
