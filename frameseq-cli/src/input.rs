//! Input resolution for listing targets
//!
//! Each positional argument is either a directory (listed one level
//! deep) or a glob pattern expanded against the filesystem.

use anyhow::Context;
use glob::glob;
use std::path::Path;

use crate::error::{CliError, CliResult};

/// Resolve directories and glob patterns to entry paths
///
/// Directory arguments contribute their immediate children; anything
/// else is treated as a glob pattern. Fails when arguments were given
/// but nothing on disk matched any of them.
pub fn resolve_entries(args: &[String]) -> CliResult<Vec<String>> {
    let mut entries = Vec::new();

    for arg in args {
        let path = Path::new(arg);
        if path.is_dir() {
            list_directory(path, &mut entries)?;
        } else {
            expand_pattern(arg, &mut entries)?;
        }
    }

    if entries.is_empty() && !args.is_empty() {
        return Err(CliError::FileNotFound(args.join(", ")).into());
    }

    entries.sort();
    entries.dedup();

    Ok(entries)
}

fn list_directory(dir: &Path, entries: &mut Vec<String>) -> CliResult<()> {
    let listing = std::fs::read_dir(dir)
        .with_context(|| format!("Cannot read directory: {}", dir.display()))?;

    for entry in listing {
        let entry = entry.with_context(|| format!("Cannot read directory: {}", dir.display()))?;
        entries.push(entry.path().to_string_lossy().into_owned());
    }

    Ok(())
}

fn expand_pattern(pattern: &str, entries: &mut Vec<String>) -> CliResult<()> {
    let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

    for path_result in paths {
        let path =
            path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
        entries.push(path.to_string_lossy().into_owned());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        File::create(dir.path().join(name)).unwrap();
    }

    #[test]
    fn directory_argument_lists_children() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "a.0001.exr");
        touch(&dir, "a.0002.exr");

        let args = vec![dir.path().to_string_lossy().into_owned()];
        let entries = resolve_entries(&args).unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries[0].ends_with("a.0001.exr"));
    }

    #[test]
    fn glob_argument_expands_matches() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "a.0001.exr");
        touch(&dir, "b.txt");

        let pattern = dir.path().join("*.exr").to_string_lossy().into_owned();
        let entries = resolve_entries(&[pattern]).unwrap();

        assert_eq!(entries.len(), 1);
        assert!(entries[0].ends_with("a.0001.exr"));
    }

    #[test]
    fn nothing_matched_is_an_error() {
        let err = resolve_entries(&["definitely-missing.txt".to_string()]).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn empty_directory_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let args = vec![dir.path().to_string_lossy().into_owned()];
        assert!(resolve_entries(&args).unwrap().is_empty());
    }
}
