//! Output formatting module

use anyhow::Result;
use frameseq_core::Sequence;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output a single sequence
    fn format_sequence(&mut self, sequence: &Sequence) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
