use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "restyle")]
#[command(about = "Migrate the flow editor components from inline styles to utility classes.")]
pub(crate) struct Cli {
    /// Project root containing src/components/ (default: current directory).
    #[arg(long, default_value = ".")]
    pub(crate) root: PathBuf,

    /// Compute and print every rewrite without touching any file.
    #[arg(long)]
    pub(crate) dry_run: bool,

    /// Emit the per-file reports as JSON on stdout.
    #[arg(long)]
    pub(crate) json: bool,
}
