//! The item model
//!
//! An [`Item`] is one named entity decomposed into head / number / tail
//! around the digit run chosen by the frame pattern. Items without an
//! eligible digit run are still constructible; they are non-sequenceable
//! and surface in scan results as standalone entries.

use std::path::Path;
use std::sync::OnceLock;
use std::time::SystemTime;

use crate::metadata::MetadataProvider;
use crate::pattern::FramePattern;

/// Memoized metadata for one item
#[derive(Debug, Clone, Default)]
pub struct ItemStat {
    /// Size in bytes, unset when the provider could not determine it
    pub size: Option<u64>,
    /// Modification time, unset when the provider could not determine it
    pub mtime: Option<SystemTime>,
    /// Whether the backing file exists
    pub exists: bool,
}

/// One member (or candidate member) of a sequence
///
/// Immutable once built: `head + number_string + tail == name` whenever a
/// number was matched, and the number string's length is the pad width.
#[derive(Debug, Clone)]
pub struct Item {
    path: String,
    name: String,
    head: String,
    tail: String,
    number: Option<u64>,
    pad: usize,
    stat: OnceLock<ItemStat>,
}

impl Item {
    /// Build an item from a path string using the given extraction rule
    pub fn new(path: impl Into<String>, pattern: &FramePattern) -> Self {
        let path = path.into();
        let name = match path.rsplit_once('/') {
            Some((_, base)) => base.to_string(),
            None => path.clone(),
        };
        let (head, tail, number, pad) = match pattern.extract(&name) {
            Some(span) => (
                span.head.to_string(),
                span.tail.to_string(),
                Some(span.value()),
                span.pad(),
            ),
            None => (name.clone(), String::new(), None, 0),
        };
        Self {
            path,
            name,
            head,
            tail,
            number,
            pad,
            stat: OnceLock::new(),
        }
    }

    /// Full path string of the item
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Base name of the item
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory part of the path, empty for a bare name
    pub fn dirname(&self) -> &str {
        match self.path.rsplit_once('/') {
            Some((dir, _)) => dir,
            None => "",
        }
    }

    /// Substring before the matched number
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Substring after the matched number
    pub fn tail(&self) -> &str {
        &self.tail
    }

    /// The frame number, absent for a non-sequenceable item
    pub fn number(&self) -> Option<u64> {
        self.number
    }

    /// Digit count of the matched number, leading zeros included
    pub fn pad(&self) -> usize {
        self.pad
    }

    /// The matched digit run as originally written, zeros and all
    pub fn number_string(&self) -> Option<String> {
        self.number.map(|n| format!("{:0width$}", n, width = self.pad))
    }

    /// Whether a frame number was matched at all
    pub fn is_sequenceable(&self) -> bool {
        self.number.is_some()
    }

    /// Whether `other` belongs to the same sequence family
    ///
    /// True iff both items are sequenceable and their head/tail pairs match
    /// exactly (case-sensitive). This is the sole criterion.
    pub fn is_sibling(&self, other: &Item) -> bool {
        self.is_sequenceable()
            && other.is_sequenceable()
            && self.head == other.head
            && self.tail == other.tail
    }

    /// Memoized metadata, populated through the provider on first call
    pub fn stat(&self, provider: &dyn MetadataProvider) -> &ItemStat {
        self.stat.get_or_init(|| {
            let path = Path::new(&self.path);
            ItemStat {
                size: provider.size(path),
                mtime: provider.mtime(path),
                exists: provider.exists(path),
            }
        })
    }

    /// Size in bytes, if the provider can determine it
    pub fn size(&self, provider: &dyn MetadataProvider) -> Option<u64> {
        self.stat(provider).size
    }

    /// Modification time, if the provider can determine it
    pub fn mtime(&self, provider: &dyn MetadataProvider) -> Option<SystemTime> {
        self.stat(provider).mtime
    }

    /// Whether the backing file exists
    pub fn exists(&self, provider: &dyn MetadataProvider) -> bool {
        self.stat(provider).exists
    }

    /// Assemble an item from known parts, bypassing pattern extraction
    ///
    /// Used when reconstructing sequences from formatted strings: head,
    /// tail and frame are already known and must not be re-derived from a
    /// name that may contain other digit runs. `pad` below the frame's
    /// decimal width widens to fit.
    pub(crate) fn from_parts(
        dirname: Option<&str>,
        head: &str,
        frame: u64,
        pad: usize,
        tail: &str,
    ) -> Item {
        let digits = format!("{:0pad$}", frame, pad = pad);
        let name = format!("{head}{digits}{tail}");
        let path = match dirname {
            Some(dir) if !dir.is_empty() => format!("{dir}/{name}"),
            _ => name.clone(),
        };
        Item {
            path,
            name,
            head: head.to_string(),
            tail: tail.to_string(),
            number: Some(frame),
            pad: digits.len(),
            stat: OnceLock::new(),
        }
    }

    /// A copy of this item renumbered to `frame` at the given pad width
    ///
    /// The name and path are rewritten around the new digit run; memoized
    /// metadata does not carry over. Used by sequence reindexing.
    pub(crate) fn with_frame(&self, frame: u64, pad: usize) -> Item {
        let name = format!("{}{:0pad$}{}", self.head, frame, self.tail, pad = pad);
        let path = if self.dirname().is_empty() {
            name.clone()
        } else {
            format!("{}/{}", self.dirname(), name)
        };
        Item {
            path,
            name,
            head: self.head.clone(),
            tail: self.tail.clone(),
            number: Some(frame),
            pad,
            stat: OnceLock::new(),
        }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Item {}
