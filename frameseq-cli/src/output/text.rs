//! Plain text output formatter

use super::OutputFormatter;
use crate::error::CliError;
use anyhow::Result;
use frameseq_core::Sequence;
use std::io::{self, Write};

/// Plain text formatter - outputs one sequence per line
pub struct TextFormatter<W: Write> {
    writer: W,
    template: String,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter rendering with the given template
    pub fn new(writer: W, template: impl Into<String>) -> Self {
        Self {
            writer,
            template: template.into(),
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout(template: impl Into<String>) -> Self {
        Self::new(io::stdout(), template)
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_sequence(&mut self, sequence: &Sequence) -> Result<()> {
        let line = sequence
            .format(&self.template)
            .map_err(|e| CliError::FormatError(e.to_string()))?;
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
