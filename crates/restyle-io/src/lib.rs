#![allow(clippy::doc_markdown)]

//! restyle-io - Safe file reads for the restyle toolchain
//!
//! The migration rewrites component files in place, so reads are strict:
//! a file that cannot be decoded losslessly must never reach the rewrite
//! stage, or the write-back would corrupt it.
//!
//! # Features
//!
//! - **Safety**: Binary detection & size limits
//! - **Strict decoding**: invalid UTF-8 is an error, never a lossy fixup
//!
//! # Architecture
//!
//! ```text
//! restyle-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum
//! ├── detect.rs   # Binary detection & decoding
//! └── read.rs     # Synchronous read API
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use restyle_io::read_text_safe;
//!
//! let content = read_text_safe("src/components/Canvas.tsx", 1024 * 1024)?;
//! ```

mod detect;
mod error;
mod read;

pub use detect::{decode_buffer, is_binary};
pub use error::IoError;
pub use read::read_text_safe;
