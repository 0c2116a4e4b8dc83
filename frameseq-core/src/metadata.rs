//! Injected file metadata capability
//!
//! The engine never touches the filesystem on its own. Size, mtime and
//! existence lookups go through a [`MetadataProvider`] supplied by the
//! caller; each lookup may fail independently, and a failure only leaves
//! that attribute unset. Results are memoized per item, never invalidated.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Capability interface for file metadata lookups
pub trait MetadataProvider: Send + Sync + fmt::Debug {
    /// Size of the file in bytes, if it can be determined
    fn size(&self, path: &Path) -> Option<u64>;

    /// Modification time of the file, if it can be determined
    fn mtime(&self, path: &Path) -> Option<SystemTime>;

    /// Whether the file exists
    fn exists(&self, path: &Path) -> bool;
}

/// The default provider, backed by `std::fs` (read-only)
#[derive(Debug, Default, Clone, Copy)]
pub struct FsMetadata;

impl MetadataProvider for FsMetadata {
    fn size(&self, path: &Path) -> Option<u64> {
        fs::metadata(path).ok().map(|m| m.len())
    }

    fn mtime(&self, path: &Path) -> Option<SystemTime> {
        fs::metadata(path).ok().and_then(|m| m.modified().ok())
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// A provider that knows nothing; every attribute stays unset
///
/// Useful when sequences are built from bare name lists with no backing
/// files, e.g. in tests or when parsing formatted strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMetadata;

impl MetadataProvider for NoMetadata {
    fn size(&self, _path: &Path) -> Option<u64> {
        None
    }

    fn mtime(&self, _path: &Path) -> Option<SystemTime> {
        None
    }

    fn exists(&self, _path: &Path) -> bool {
        false
    }
}
