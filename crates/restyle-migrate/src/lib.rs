#![allow(clippy::doc_markdown)]

//! restyle-migrate - Utility-class migration for the flow editor front-end
//!
//! Rewrites the three component files of the flow editor --
//! `Canvas.tsx`, `Edge.tsx`, `Node.tsx` -- from hand-written CSS class
//! names and inline style attributes to utility class lists. Each file
//! owns an ordered rule list; the pipeline runs the files strictly
//! sequentially and reports what every rule matched, so a target file
//! that has drifted away from the expected shapes shows up as zero-match
//! outcomes instead of disappearing silently.
//!
//! The node migration is computed and reported but never written back;
//! see [`migrations::node`].
//!
//! # Architecture
//!
//! ```text
//! restyle-migrate/src/
//! ├── lib.rs              # Re-exports (this file)
//! ├── pipeline.rs         # Sequential run over the fixed targets
//! ├── migrations/
//! │   ├── canvas.rs       # Canvas.tsx rules
//! │   ├── edge.rs         # Edge.tsx rules
//! │   └── node.rs         # Node.tsx rules (preview-only)
//! ├── cli.rs              # clap surface (binary)
//! └── main.rs             # restyle binary
//! ```

pub mod migrations;
mod pipeline;

pub use pipeline::{Migration, MigrationReport, plan, run};
