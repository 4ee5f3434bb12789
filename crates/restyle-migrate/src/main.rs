//! restyle CLI: rewrite the flow editor components in place.
//!
//! Runs the canvas, edge, and node migrations sequentially under `--root`.
//! There is no backup and no rollback; use `--dry-run` to inspect the
//! diffs first. The node migration is always preview-only (see
//! `restyle_migrate::migrations::node`).
//!
//! Logging: set `RUST_LOG=restyle_migrate=debug` (or `warn`, `info`) to
//! adjust the log level on stderr.

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use restyle_edit::Rewriter;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing: RUST_LOG overrides; default info for the whole
    // toolchain so zero-match warnings from the engine stay visible.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("restyle_migrate=info,restyle_edit=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let reports = restyle_migrate::run(&cli.root, cli.dry_run)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        print!(
            "{}",
            Rewriter::format_result(&report.result, Some(&report.path))
        );
        if report.result.changed() && !report.persisted {
            println!("[Preview only - file not modified]");
        }
        println!();
    }

    Ok(())
}
