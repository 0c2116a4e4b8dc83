//! Recursive directory traversal
//!
//! Walks a directory tree, compressing each directory's files into
//! sequences, and renders the result as a tree with box-drawing
//! connectors. Hidden entries (dot-prefixed) are skipped.

use anyhow::{Context, Result};
use frameseq_core::{Sequence, SequenceScanner};

use crate::error::CliError;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One visited directory and its compressed contents
#[derive(Debug)]
pub struct WalkEntry {
    /// The visited directory
    pub dir: PathBuf,
    /// Sequences found among the directory's files
    pub sequences: Vec<Sequence>,
}

/// Walk `source` and collect sequences per directory
///
/// `level` limits the traversal depth; `None` walks the entire tree,
/// `Some(1)` stays in `source` itself.
pub fn walk(
    source: &Path,
    level: Option<usize>,
    scanner: &SequenceScanner,
) -> Result<Vec<WalkEntry>> {
    let mut entries = Vec::new();
    walk_dir(source, level, scanner, &mut entries)?;
    Ok(entries)
}

fn walk_dir(
    dir: &Path,
    remaining: Option<usize>,
    scanner: &SequenceScanner,
    out: &mut Vec<WalkEntry>,
) -> Result<()> {
    if remaining == Some(0) {
        return Ok(());
    }

    let (subdirs, files) = list_dir(dir)?;
    let sequences = scanner
        .scan(files.iter().map(|p| p.to_string_lossy().into_owned()))
        .into_sequences();
    out.push(WalkEntry {
        dir: dir.to_path_buf(),
        sequences,
    });

    let next = remaining.map(|n| n - 1);
    for subdir in subdirs {
        walk_dir(&subdir, next, scanner, out)?;
    }

    Ok(())
}

/// Render `source` as a tree of directories and sequences
pub fn render_tree<W: Write>(
    writer: &mut W,
    source: &Path,
    level: Option<usize>,
    template: &str,
    scanner: &SequenceScanner,
) -> Result<()> {
    writeln!(writer, "{}", source.display())?;
    render_dir(writer, source, "", level, template, scanner)
}

fn render_dir<W: Write>(
    writer: &mut W,
    dir: &Path,
    prefix: &str,
    remaining: Option<usize>,
    template: &str,
    scanner: &SequenceScanner,
) -> Result<()> {
    if remaining == Some(0) {
        return Ok(());
    }

    let (subdirs, files) = list_dir(dir)?;
    let sequences = scanner
        .scan(files.iter().map(|p| p.to_string_lossy().into_owned()))
        .into_sequences();

    // Subdirectories at the depth limit are neither shown nor entered
    let recurse = remaining != Some(1);
    let subdirs: Vec<PathBuf> = if recurse { subdirs } else { Vec::new() };
    let next = remaining.map(|n| n - 1);

    let total = sequences.len() + subdirs.len();
    for (i, sequence) in sequences.iter().enumerate() {
        let connector = if i + 1 == total { "└── " } else { "├── " };
        let line = sequence
            .format(template)
            .map_err(|e| CliError::FormatError(e.to_string()))?;
        writeln!(writer, "{prefix}{connector}{line}")?;
    }

    for (i, subdir) in subdirs.iter().enumerate() {
        let last = sequences.len() + i + 1 == total;
        let connector = if last { "└── " } else { "├── " };
        let name = subdir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        writeln!(writer, "{prefix}{connector}{name}")?;

        let child_prefix = if last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };
        render_dir(writer, subdir, &child_prefix, next, template, scanner)?;
    }

    Ok(())
}

/// Sorted, non-hidden children split into directories and files
fn list_dir(dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut subdirs = Vec::new();
    let mut files = Vec::new();

    let listing = std::fs::read_dir(dir)
        .with_context(|| format!("Cannot read directory: {}", dir.display()))?;
    for entry in listing {
        let entry = entry.with_context(|| format!("Cannot read directory: {}", dir.display()))?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else {
            files.push(path);
        }
    }

    subdirs.sort();
    files.sort();
    Ok((subdirs, files))
}
