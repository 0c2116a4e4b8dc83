//! Listing order for sequences
//!
//! Flat listings sort by extension first, then by a natural key that
//! compares embedded digit runs numerically, so `file.9` sorts before
//! `file.10` and families with the same extension stay together.

use frameseq_core::Sequence;
use std::cmp::Ordering;

/// One chunk of a name: either a digit run or a stretch of text
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Chunk {
    Number(u64),
    Text(String),
}

/// Split a name into alternating text and numeric chunks
fn natural_key(name: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut buf = String::new();
    let mut digits = false;

    for c in name.chars() {
        if c.is_ascii_digit() != digits && !buf.is_empty() {
            chunks.push(finish(&mut buf, digits));
        }
        digits = c.is_ascii_digit();
        buf.push(c);
    }
    if !buf.is_empty() {
        chunks.push(finish(&mut buf, digits));
    }
    chunks
}

fn finish(buf: &mut String, digits: bool) -> Chunk {
    let text = std::mem::take(buf);
    if digits {
        // oversized runs fall back to text comparison
        match text.parse() {
            Ok(n) => Chunk::Number(n),
            Err(_) => Chunk::Text(text),
        }
    } else {
        Chunk::Text(text)
    }
}

fn extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext,
        _ => "",
    }
}

/// Ordering for flat listings: extension, then natural name order
pub fn listing_order(a: &Sequence, b: &Sequence) -> Ordering {
    let (a, b) = (a.first().name(), b.first().name());
    extension(a)
        .cmp(extension(b))
        .then_with(|| natural_key(a).cmp(&natural_key(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use frameseq_core::get_sequences;

    #[test]
    fn digit_runs_compare_numerically() {
        assert!(natural_key("file.9.jpg") < natural_key("file.10.jpg"));
        assert!(natural_key("file.0100.jpg") > natural_key("file.99.jpg"));
    }

    #[test]
    fn extension_groups_come_first() {
        let mut seqs = get_sequences(vec![
            "b.0001.png",
            "a.0001.tif",
            "c.0001.png",
        ]);
        seqs.sort_by(listing_order);
        let names: Vec<&str> = seqs.iter().map(|s| s.first().name()).collect();
        assert_eq!(names, vec!["b.0001.png", "c.0001.png", "a.0001.tif"]);
    }

    #[test]
    fn dotless_names_sort_before_extensions() {
        assert_eq!(extension("README"), "");
        assert_eq!(extension(".hidden"), "");
        assert_eq!(extension("a.tar.gz"), "gz");
    }
}
