//! End-to-end scenarios for sequence detection and formatting

use std::sync::Arc;

use frameseq_core::{
    get_sequences, uncompress, Config, Error, FramePattern, Item, NoMetadata, SequenceScanner,
};

fn config() -> Config {
    Config::builder()
        .metadata(Arc::new(NoMetadata))
        .build()
        .unwrap()
}

#[test]
fn contiguous_sequence_renders_padded() {
    let seqs = get_sequences(vec!["file.0001.jpg", "file.0002.jpg", "file.0003.jpg"]);
    assert_eq!(seqs.len(), 1);
    assert_eq!(seqs[0].format("%h%p%t %r").unwrap(), "file.%04d.jpg 1-3");
}

#[test]
fn appended_gap_shows_in_broken_range() {
    let mut seqs = get_sequences(vec!["file.0001.jpg", "file.0002.jpg", "file.0003.jpg"]);
    let mut seq = seqs.remove(0);
    seq.append(Item::new("file.0006.jpg", &FramePattern::digits()))
        .unwrap();
    assert_eq!(seq.format("%h%p%t %R").unwrap(), "file.%04d.jpg [1-3, 6]");
}

#[test]
fn uncompress_recovers_one_hundred_fifty_frames() {
    let seq = uncompress("012_vb_110_v002.1-150.dpx", "%h%r%t", &config()).unwrap();
    assert_eq!(seq.len(), 150);
    assert_eq!(seq.frames(), (1..=150).collect::<Vec<_>>());
}

#[test]
fn missing_frames_render_as_ranges() {
    let seqs = get_sequences(vec![
        "a.0004.tga",
        "a.0005.tga",
        "a.0006.tga",
        "a.0007.tga",
        "a.0008.tga",
        "a.0009.tga",
        "a.0011.tga",
    ]);
    assert_eq!(seqs.len(), 1);
    assert_eq!(seqs[0].format("%l %h%r%t %M").unwrap(), "7 a.4-11.tga [10]");
}

#[test]
fn distinct_families_never_merge() {
    let seqs = get_sequences(vec![
        "fileA.0001.jpg",
        "fileA.0002.jpg",
        "fileB.0001.png",
        "fileB.0002.png",
    ]);
    assert_eq!(seqs.len(), 2);
    assert_eq!(seqs[0].to_string(), "fileA.1-2.jpg");
    assert_eq!(seqs[1].to_string(), "fileB.1-2.png");
}

#[test]
fn directory_listing_shapes() {
    // the classic mixed directory from the original tool's fixtures
    let seqs = get_sequences(vec![
        "012_vb_110_v001.0001.png",
        "012_vb_110_v001.0002.png",
        "012_vb_110_v002.0001.png",
        "012_vb_110_v002.0002.png",
        "alpha.txt",
        "file_02.tif",
    ]);
    let rendered: Vec<String> = seqs.iter().map(|s| s.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "012_vb_110_v001.1-2.png",
            "012_vb_110_v002.1-2.png",
            "file_2.tif",
            "alpha.txt",
        ]
    );
}

#[test]
fn duplicate_member_leaves_sequence_unchanged() {
    let mut seqs = get_sequences(vec!["file.0001.jpg", "file.0002.jpg"]);
    let mut seq = seqs.remove(0);
    let err = seq
        .append(Item::new("file.0002.jpg", &FramePattern::digits()))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateMember { frame: 2 }));
    assert_eq!(seq.frames(), vec![1, 2]);
}

#[test]
fn strict_padding_config_splits_and_lax_merges() {
    let names = vec!["file.1.jpg", "file.02.jpg", "file.003.jpg"];

    let lax = SequenceScanner::new().scan(names.clone());
    assert_eq!(lax.sequences.len(), 1);
    assert_eq!(lax.sequences[0].pad_width(), 3);

    let strict = SequenceScanner::with_config(
        Config::builder().strict_padding(true).build().unwrap(),
    )
    .scan(names);
    assert_eq!(strict.sequences.len(), 3);
}

#[test]
fn custom_separator_round_trips() {
    let config = Config::builder()
        .range_separator("; ")
        .metadata(Arc::new(NoMetadata))
        .build()
        .unwrap();
    let scan = SequenceScanner::with_config(config.clone()).scan(vec![
        "file.0001.jpg",
        "file.0002.jpg",
        "file.0006.jpg",
    ]);
    let rendered = scan.sequences[0].format("%h%p%t %R").unwrap();
    assert_eq!(rendered, "file.%04d.jpg [1-2; 6]");

    let back = uncompress(&rendered, "%h%p%t %R", &config).unwrap();
    assert_eq!(back.frames(), vec![1, 2, 6]);
}

#[test]
fn custom_pattern_changes_grouping() {
    // dot-delimited runs only: the trailing run in `file_02` is ignored
    let config = Config::builder()
        .pattern_rule(FramePattern::delimited('.').unwrap())
        .metadata(Arc::new(NoMetadata))
        .build()
        .unwrap();
    let scan = SequenceScanner::with_config(config).scan(vec![
        "file.001.jpg",
        "file.002.jpg",
        "file_02.tif",
    ]);
    assert_eq!(scan.sequences.len(), 1);
    assert_eq!(scan.singles.len(), 1);
    assert_eq!(scan.singles[0].name(), "file_02.tif");
}

#[test]
fn verbose_listing_format() {
    let seqs = get_sequences(vec![
        "file.0001.jpg",
        "file.0002.jpg",
        "file.0003.jpg",
        "file.0006.jpg",
    ]);
    assert_eq!(
        seqs[0].format(frameseq_core::GLOBAL_FORMAT).unwrap(),
        "   4 file.%04d.jpg [1-3, 6]"
    );
}
