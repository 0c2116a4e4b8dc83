//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use frameseq_core::{Range, Sequence};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sequences as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    sequences: Vec<SequenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SequenceData {
    /// Directory the members live in, with a trailing slash
    pub directory: String,
    /// Text before the frame number
    pub head: String,
    /// Text after the frame number
    pub tail: String,
    /// Frame pad width
    pub pad: usize,
    /// Number of member files
    pub length: usize,
    /// First frame, absent for non-sequence entries
    pub start: Option<u64>,
    /// Last frame, absent for non-sequence entries
    pub end: Option<u64>,
    /// Present frames compressed into ranges
    pub ranges: Vec<Range>,
    /// Gaps between present frames
    pub missing: Vec<Range>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sequences: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_sequence(&mut self, sequence: &Sequence) -> Result<()> {
        let frames = sequence.frames();
        self.sequences.push(SequenceData {
            directory: sequence.directory(),
            head: sequence.head().to_string(),
            tail: sequence.tail().to_string(),
            pad: sequence.pad_width(),
            length: sequence.len(),
            start: frames.first().copied(),
            end: frames.last().copied(),
            ranges: sequence.ranges(),
            missing: sequence.missing_ranges(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.sequences)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frameseq_core::get_sequences;

    #[test]
    fn emits_an_array_with_ranges() {
        let sequences = get_sequences(vec!["a.0001.exr", "a.0002.exr", "a.0006.exr"]);
        let mut out = Vec::new();
        let mut formatter = JsonFormatter::new(&mut out);

        for sequence in &sequences {
            formatter.format_sequence(sequence).unwrap();
        }
        formatter.finish().unwrap();

        let parsed: Vec<SequenceData> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].head, "a.");
        assert_eq!(parsed[0].start, Some(1));
        assert_eq!(parsed[0].end, Some(6));
        assert_eq!(parsed[0].ranges.len(), 2);
        assert_eq!(parsed[0].missing.len(), 1);
    }

    #[test]
    fn non_sequence_entry_has_no_frames() {
        let sequences = get_sequences(vec!["notes.txt"]);
        let mut out = Vec::new();
        let mut formatter = JsonFormatter::new(&mut out);
        formatter.format_sequence(&sequences[0]).unwrap();
        formatter.finish().unwrap();

        let parsed: Vec<SequenceData> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0].start, None);
        assert!(parsed[0].ranges.is_empty());
    }
}
