//! Property-based tests for range compression and grouping

use std::collections::BTreeSet;
use std::sync::Arc;

use proptest::prelude::*;

use frameseq_core::range::{compress, expand, missing_in, parse_list};
use frameseq_core::{uncompress, Config, NoMetadata, Sequence, SequenceScanner};

fn config() -> Config {
    Config::builder()
        .metadata(Arc::new(NoMetadata))
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn compress_expand_round_trips(set in prop::collection::btree_set(0u64..100_000, 0..200)) {
        let frames: Vec<u64> = set.into_iter().collect();
        let ranges = compress(&frames);
        prop_assert_eq!(expand(&ranges), frames);
    }

    #[test]
    fn compressed_ranges_are_minimal(set in prop::collection::btree_set(0u64..10_000, 1..100)) {
        let frames: Vec<u64> = set.into_iter().collect();
        let ranges = compress(&frames);
        // no two adjacent or overlapping ranges survive compression
        for pair in ranges.windows(2) {
            prop_assert!(pair[0].end + 1 < pair[1].start);
        }
    }

    #[test]
    fn present_and_missing_partition_the_span(set in prop::collection::btree_set(0u64..5_000, 2..100)) {
        let frames: Vec<u64> = set.iter().copied().collect();
        let gaps = missing_in(&frames);
        let covered: BTreeSet<u64> = expand(&compress(&frames))
            .into_iter()
            .chain(expand(&gaps))
            .collect();
        let span: BTreeSet<u64> = (frames[0]..=frames[frames.len() - 1]).collect();
        prop_assert_eq!(covered, span);
    }

    #[test]
    fn range_list_string_round_trips(set in prop::collection::btree_set(0u64..50_000, 1..100)) {
        let frames: Vec<u64> = set.into_iter().collect();
        let ranges = compress(&frames);
        let text = frameseq_core::range::format_list(&ranges, ", ");
        let parsed = parse_list(&text, ", ").unwrap();
        prop_assert_eq!(expand(&parsed), frames);
    }

    #[test]
    fn grouping_is_permutation_invariant(
        frames in prop::collection::btree_set(1u64..2_000, 1..40),
        seed in any::<u64>(),
    ) {
        let mut names: Vec<String> = frames
            .iter()
            .map(|f| format!("shot.{f:04}.exr"))
            .collect();
        // cheap deterministic shuffle
        let len = names.len();
        for i in 0..len {
            let j = ((seed.wrapping_mul(6364136223846793005).wrapping_add(i as u64)) % len as u64) as usize;
            names.swap(i, j);
        }

        let scanner = SequenceScanner::with_config(config());
        let shuffled = scanner.scan(names.clone());
        names.sort();
        let sorted = scanner.scan(names);

        let render = |seqs: &[Sequence]| -> Vec<String> {
            seqs.iter().map(|s| s.to_string()).collect()
        };
        prop_assert_eq!(render(&shuffled.sequences), render(&sorted.sequences));
    }

    #[test]
    fn render_uncompress_recovers_frame_sets(set in prop::collection::btree_set(1u64..5_000, 1..60)) {
        let cfg = config();
        let names: Vec<String> = set.iter().map(|f| format!("shot.{f:04}.exr")).collect();
        let scan = SequenceScanner::with_config(cfg.clone()).scan(names);
        prop_assert_eq!(scan.sequences.len(), 1);
        let seq = &scan.sequences[0];

        let rendered = seq.format("%h%p%t %R").unwrap();
        let back = uncompress(&rendered, "%h%p%t %R", &cfg).unwrap();
        prop_assert_eq!(back.frames(), seq.frames());
        prop_assert_eq!(back.head(), seq.head());
        prop_assert_eq!(back.tail(), seq.tail());
    }
}
