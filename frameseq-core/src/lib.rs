//! File sequence detection and frame range compression
//!
//! frameseq groups file-system items that share a name pattern but differ
//! by an embedded numeric index (`fileA.0001.png`, `fileA.0002.png`) into
//! logical sequences, and converts between discrete item lists, compact
//! strings (`fileA.1-3.png`) and numeric frame ranges with gaps.
//!
//! The engine consumes flat lists of names or paths plus an optional
//! injected metadata provider; it never mutates the filesystem and never
//! walks directories itself. Traversal, CLI parsing and file operations
//! belong to callers such as the `lss` tool.
//!
//! # Example
//!
//! ```rust
//! use frameseq_core::get_sequences;
//!
//! let seqs = get_sequences(vec![
//!     "file.0001.jpg",
//!     "file.0002.jpg",
//!     "file.0003.jpg",
//! ]);
//! assert_eq!(seqs.len(), 1);
//! assert_eq!(seqs[0].to_string(), "file.1-3.jpg");
//! assert_eq!(seqs[0].format("%h%p%t %r").unwrap(), "file.%04d.jpg 1-3");
//! ```
//!
//! Formatted strings parse back into sequences through the same template:
//!
//! ```rust
//! use frameseq_core::{uncompress, Config};
//!
//! let config = Config::default();
//! let seq = uncompress("012_vb_110_v002.1-150.dpx", "%h%r%t", &config).unwrap();
//! assert_eq!(seq.len(), 150);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod format;
pub mod item;
pub mod metadata;
pub mod pattern;
pub mod range;
pub mod scan;
pub mod sequence;

pub use config::{Config, ConfigBuilder, DEFAULT_RANGE_SEPARATOR};
pub use error::{Error, Result};
pub use format::{uncompress, Directive};
pub use item::Item;
pub use metadata::{FsMetadata, MetadataProvider, NoMetadata};
pub use pattern::FramePattern;
pub use range::Range;
pub use scan::{get_sequences, Scan, SequenceScanner};
pub use sequence::{Sequence, DEFAULT_FORMAT, GLOBAL_FORMAT};
