//! The sequence collection type
//!
//! A [`Sequence`] is an ordered, mutable collection of items sharing one
//! head/tail pair. Items stay sorted by frame number, at most one item per
//! frame. Mutations re-check the invariants and fail without touching the
//! collection; the reported pad width is derived from current membership,
//! never frozen at ingestion.

use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format;
use crate::item::Item;
use crate::metadata::MetadataProvider;
use crate::range::{self, Range};

/// Default display format, `head range tail`
pub const DEFAULT_FORMAT: &str = "%h%r%t";

/// Verbose listing format used by the `lss` tool
pub const GLOBAL_FORMAT: &str = "%4l %h%p%t %R";

/// A group of same-pattern items differing only by frame number
#[derive(Debug, Clone)]
pub struct Sequence {
    items: Vec<Item>,
    head: String,
    tail: String,
    strict_padding: bool,
    range_separator: String,
    metadata: Arc<dyn MetadataProvider>,
}

impl Sequence {
    /// Start a sequence from its first item
    ///
    /// The first item fixes the head/tail pair. A non-sequenceable item is
    /// accepted and yields a one-item group with no frames; any further
    /// append to such a group fails with [`Error::NotSibling`].
    pub fn new(first: Item, config: &Config) -> Self {
        let head = first.head().to_string();
        let tail = first.tail().to_string();
        Self {
            items: vec![first],
            head,
            tail,
            strict_padding: config.strict_padding(),
            range_separator: config.range_separator().to_string(),
            metadata: Arc::clone(config.metadata()),
        }
    }

    /// Number of items in the sequence
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; a sequence holds at least its first item
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The members, sorted by frame number ascending
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The first member
    pub fn first(&self) -> &Item {
        &self.items[0]
    }

    /// Substring preceding the frame number
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Substring following the frame number
    pub fn tail(&self) -> &str {
        &self.tail
    }

    /// Separator used when joining broken-range tokens
    pub fn range_separator(&self) -> &str {
        &self.range_separator
    }

    /// The injected metadata capability
    pub fn metadata(&self) -> &Arc<dyn MetadataProvider> {
        &self.metadata
    }

    /// The present frame numbers, ascending
    pub fn frames(&self) -> Vec<u64> {
        self.items.iter().filter_map(Item::number).collect()
    }

    /// First frame number, 0 when no frames are present
    pub fn start(&self) -> u64 {
        self.items.iter().find_map(Item::number).unwrap_or(0)
    }

    /// Last frame number, 0 when no frames are present
    pub fn end(&self) -> u64 {
        self.items.iter().rev().find_map(Item::number).unwrap_or(0)
    }

    /// Present frames compressed into minimal ranges
    pub fn ranges(&self) -> Vec<Range> {
        range::compress(&self.frames())
    }

    /// Gaps strictly inside the bounding interval, as ranges
    pub fn missing_ranges(&self) -> Vec<Range> {
        range::missing_in(&self.frames())
    }

    /// Gaps strictly inside the bounding interval, expanded to frames
    pub fn missing(&self) -> Vec<u64> {
        range::expand(&self.missing_ranges())
    }

    /// The pad width in force for this sequence
    ///
    /// Recomputed from current membership on every call: the larger of the
    /// decimal width of the current maximum frame and the widest member
    /// whose digit string carries a leading zero. Growing past the widest
    /// member raises it; replacing membership through [`Self::reindex`]
    /// can shrink it.
    pub fn pad_width(&self) -> usize {
        let max_width = decimal_width(self.end());
        let zero_padded = self
            .items
            .iter()
            .filter(|i| {
                i.number()
                    .is_some_and(|n| i.pad() > decimal_width(n) || (n == 0 && i.pad() > 0))
            })
            .map(Item::pad)
            .max()
            .unwrap_or(0);
        max_width.max(zero_padded)
    }

    /// Pad specifier in printf form, e.g. `%04d`; `%d` below width 2 and
    /// empty for a group with no frames
    pub fn pad_spec(&self) -> String {
        if self.frames().is_empty() {
            return String::new();
        }
        let pad = self.pad_width();
        if pad < 2 {
            "%d".to_string()
        } else {
            format!("%{:02}d", pad)
        }
    }

    /// Whether `item` could belong to this sequence
    ///
    /// Head and tail must match exactly; under strict padding the digit
    /// width must match the established width as well. The item's frame
    /// need not be absent, so this answers "is it family", not "is it new".
    pub fn includes(&self, item: &Item) -> bool {
        let family = item.is_sequenceable()
            && !self.frames().is_empty()
            && item.head() == self.head
            && item.tail() == self.tail;
        if !family {
            return false;
        }
        !self.strict_padding || item.pad() == self.first().pad()
    }

    /// Whether an item with this exact frame is already a member
    pub fn contains(&self, item: &Item) -> bool {
        self.includes(item)
            && item
                .number()
                .is_some_and(|frame| self.find(frame).is_ok())
    }

    /// Add a member, keeping items sorted by frame
    ///
    /// Fails with [`Error::NotSibling`] for a foreign item,
    /// [`Error::PaddingConflict`] under strict padding, or
    /// [`Error::DuplicateMember`] for an already-present frame. The
    /// sequence is unchanged on any failure.
    pub fn append(&mut self, item: Item) -> Result<()> {
        let sibling = item.is_sequenceable()
            && self.first().is_sequenceable()
            && item.head() == self.head
            && item.tail() == self.tail;
        let frame = match item.number() {
            Some(frame) if sibling => frame,
            _ => {
                return Err(Error::NotSibling {
                    name: item.name().to_string(),
                })
            }
        };
        if self.strict_padding && item.pad() != self.first().pad() {
            return Err(Error::PaddingConflict {
                expected: self.first().pad(),
                found: item.pad(),
            });
        }
        match self.find(frame) {
            Ok(_) => Err(Error::DuplicateMember { frame }),
            Err(pos) => {
                self.items.insert(pos, item);
                Ok(())
            }
        }
    }

    /// Add a member; position is determined by frame order
    ///
    /// Same contract as [`Self::append`]; the two exist for parity with
    /// collection APIs, not to allow out-of-order placement.
    pub fn insert(&mut self, item: Item) -> Result<()> {
        self.append(item)
    }

    /// Add several members; stops at the first rejected item
    pub fn extend<I: IntoIterator<Item = Item>>(&mut self, items: I) -> Result<()> {
        for item in items {
            self.append(item)?;
        }
        Ok(())
    }

    /// Renumber every frame by `offset`, optionally changing the pad
    ///
    /// The pure numeric remap: item names and paths are rewritten in
    /// memory, nothing touches the filesystem. All-or-nothing: the offset
    /// is validated against every frame before any item changes, and
    /// [`Error::FrameUnderflow`] leaves the sequence untouched.
    pub fn reindex(&mut self, offset: i64, pad: Option<usize>) -> Result<()> {
        let pad = pad.unwrap_or_else(|| self.pad_width());
        let mut remapped = Vec::with_capacity(self.items.len());
        for item in &self.items {
            match item.number() {
                Some(frame) => {
                    let shifted = frame
                        .checked_add_signed(offset)
                        .ok_or(Error::FrameUnderflow { frame, offset })?;
                    remapped.push(item.with_frame(shifted, pad));
                }
                None => remapped.push(item.clone()),
            }
        }
        self.items = remapped;
        Ok(())
    }

    /// Render the sequence through a format template
    pub fn format(&self, template: &str) -> Result<String> {
        format::render(self, template)
    }

    /// Parent directory of the first member, with a trailing separator
    pub fn directory(&self) -> String {
        let dir = self.first().dirname();
        if dir.is_empty() {
            String::new()
        } else {
            format!("{dir}/")
        }
    }

    /// Total size of all members in bytes; unavailable sizes count as 0
    pub fn size(&self) -> u64 {
        self.items
            .iter()
            .filter_map(|i| i.size(self.metadata.as_ref()))
            .sum()
    }

    /// Total size in human-readable form, e.g. `  1.5M`
    pub fn human_size(&self) -> String {
        human_size(self.size())
    }

    /// Latest modification time across members, if any is known
    pub fn mtime(&self) -> Option<SystemTime> {
        self.items
            .iter()
            .filter_map(|i| i.mtime(self.metadata.as_ref()))
            .max()
    }

    /// Binary search by frame among sequenceable members
    fn find(&self, frame: u64) -> std::result::Result<usize, usize> {
        self.items
            .binary_search_by_key(&frame, |i| i.number().unwrap_or(0))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format(DEFAULT_FORMAT) {
            Ok(s) => f.write_str(&s),
            Err(_) => f.write_str(self.first().name()),
        }
    }
}

fn decimal_width(mut n: u64) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:7.1}{}", size, UNITS[unit])
}
