//! Grouping a batch of names into sequences
//!
//! The aggregator is a pure function of one batch: items are stable-sorted
//! by path, then bucketed by their `(head, tail)` pair through a hash map,
//! so grouping stays O(n log n) for the sort and O(n) after it, and the
//! result is independent of input order. Callers scanning several
//! directories aggregate each batch independently and merge the results.

use std::collections::HashMap;

use crate::config::Config;
use crate::item::Item;
use crate::sequence::Sequence;

/// Result of grouping one batch of names
#[derive(Debug)]
pub struct Scan {
    /// Detected sequences, in order of first appearance of each group
    pub sequences: Vec<Sequence>,
    /// Items with no eligible digit run, in sorted input order
    pub singles: Vec<Item>,
    config: Config,
}

impl Scan {
    /// Fold the non-sequenceable singles in as one-item groups
    ///
    /// Convenient for listings that show everything; sequences come first,
    /// singles after, both in their detection order.
    pub fn into_sequences(self) -> Vec<Sequence> {
        let mut sequences = self.sequences;
        for item in self.singles {
            sequences.push(Sequence::new(item, &self.config));
        }
        sequences
    }
}

/// Groups batches of names into sequences under one configuration
#[derive(Debug, Default)]
pub struct SequenceScanner {
    config: Config,
}

impl SequenceScanner {
    /// Create a scanner with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// The scanner's configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Partition a batch of names into sequences and leftover singles
    ///
    /// A duplicate frame number inside one bucket never aborts the scan:
    /// the offending item is excluded from its group and reported as a
    /// one-item sequence of its own.
    pub fn scan<I, S>(&self, names: I) -> Scan
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pattern = self.config.frame_pattern();
        let mut items: Vec<Item> = names
            .into_iter()
            .map(|name| Item::new(name, pattern))
            .collect();
        items.sort_by(|a, b| a.path().cmp(b.path()));

        let strict = self.config.strict_padding();
        let mut sequences: Vec<Sequence> = Vec::new();
        let mut singles: Vec<Item> = Vec::new();
        // under strict padding, equal numbers at different widths are
        // siblings of different sequences
        let mut buckets: HashMap<(String, String, usize), usize> = HashMap::new();

        for item in items {
            if !item.is_sequenceable() {
                singles.push(item);
                continue;
            }
            let key = (
                item.head().to_string(),
                item.tail().to_string(),
                if strict { item.pad() } else { 0 },
            );
            match buckets.get(&key) {
                Some(&index) => {
                    if sequences[index].append(item.clone()).is_err() {
                        // duplicate frame; report it individually
                        sequences.push(Sequence::new(item, &self.config));
                    }
                }
                None => {
                    buckets.insert(key, sequences.len());
                    sequences.push(Sequence::new(item, &self.config));
                }
            }
        }

        Scan {
            sequences,
            singles,
            config: self.config.clone(),
        }
    }
}

/// Group names into sequences with the default configuration
///
/// Non-sequenceable names are included as one-item groups at the end,
/// matching what a directory listing shows.
pub fn get_sequences<I, S>(names: I) -> Vec<Sequence>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    SequenceScanner::new().scan(names).into_sequences()
}
