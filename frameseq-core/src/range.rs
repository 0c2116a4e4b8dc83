//! Frame range compression and expansion
//!
//! A sorted set of distinct frame numbers compresses into the minimal list
//! of closed ranges (adjacent ranges always merge), plus a separate list of
//! gaps inside the bounding interval. Expansion is the exact inverse; the
//! single implied range (`start-end` ignoring gaps) is display-only and
//! never used for reconstruction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A closed integer interval `[start, end]` with implicit step 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// First frame in the interval
    pub start: u64,
    /// Last frame in the interval, inclusive
    pub end: u64,
}

impl Range {
    /// Build a range; endpoints are reordered if given backwards
    pub fn new(start: u64, end: u64) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    /// Number of frames covered
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Always false; a range covers at least one frame
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `frame` falls inside the interval
    pub fn contains(&self, frame: u64) -> bool {
        self.start <= frame && frame <= self.end
    }

    /// Whether the range covers exactly one frame
    pub fn is_singleton(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_singleton() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Compress sorted distinct frames into the minimal list of ranges
///
/// Every frame lands in exactly one range and no two output ranges are
/// adjacent or overlapping. Input must be sorted ascending with no
/// duplicates, which is what [`crate::Sequence::frames`] yields.
pub fn compress(frames: &[u64]) -> Vec<Range> {
    debug_assert!(frames.windows(2).all(|w| w[0] < w[1]));

    let mut ranges: Vec<Range> = Vec::new();
    for &frame in frames {
        match ranges.last_mut() {
            Some(last) if frame == last.end + 1 => last.end = frame,
            _ => ranges.push(Range::new(frame, frame)),
        }
    }
    ranges
}

/// Expand ranges back into the exact list of frames they cover
pub fn expand(ranges: &[Range]) -> Vec<u64> {
    let mut frames = Vec::new();
    for range in ranges {
        frames.extend(range.start..=range.end);
    }
    frames
}

/// Gaps strictly between the first and last of the given sorted frames
pub fn missing_in(frames: &[u64]) -> Vec<Range> {
    debug_assert!(frames.windows(2).all(|w| w[0] < w[1]));

    let mut gaps = Vec::new();
    for pair in frames.windows(2) {
        if pair[1] > pair[0] + 1 {
            gaps.push(Range::new(pair[0] + 1, pair[1] - 1));
        }
    }
    gaps
}

/// Join ranges into a separator-delimited token list
pub fn format_list(ranges: &[Range], separator: &str) -> String {
    ranges
        .iter()
        .map(Range::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Parse a separator-delimited list of `start-end` or integer tokens
///
/// A bare integer token is a singleton range. An empty input is an empty
/// list. Any other token fails the whole parse with
/// [`Error::InvalidRangeToken`].
pub fn parse_list(text: &str, separator: &str) -> Result<Vec<Range>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut ranges = Vec::new();
    for token in text.split(separator.trim_end()) {
        let token = token.trim();
        ranges.push(parse_token(token)?);
    }
    Ok(ranges)
}

fn parse_token(token: &str) -> Result<Range> {
    let invalid = || Error::InvalidRangeToken {
        token: token.to_string(),
    };

    match token.split_once('-') {
        Some((start, end)) => {
            let start: u64 = start.trim().parse().map_err(|_| invalid())?;
            let end: u64 = end.trim().parse().map_err(|_| invalid())?;
            if start > end {
                return Err(invalid());
            }
            Ok(Range::new(start, end))
        }
        None => {
            let frame: u64 = token.parse().map_err(|_| invalid())?;
            Ok(Range::new(frame, frame))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_frames_merge() {
        let ranges = compress(&[1, 2, 3, 6]);
        assert_eq!(ranges, vec![Range::new(1, 3), Range::new(6, 6)]);
    }

    #[test]
    fn lone_frame_is_a_singleton() {
        assert_eq!(compress(&[7]), vec![Range::new(7, 7)]);
        assert_eq!(compress(&[]), Vec::new());
    }

    #[test]
    fn expand_is_the_exact_inverse() {
        let frames = vec![1, 2, 3, 10, 12, 13, 14];
        assert_eq!(expand(&compress(&frames)), frames);
    }

    #[test]
    fn gaps_inside_the_bounds() {
        let gaps = missing_in(&[4, 5, 6, 7, 8, 9, 11]);
        assert_eq!(gaps, vec![Range::new(10, 10)]);

        let gaps = missing_in(&[1, 5, 9]);
        assert_eq!(gaps, vec![Range::new(2, 4), Range::new(6, 8)]);

        assert!(missing_in(&[1, 2, 3]).is_empty());
        assert!(missing_in(&[42]).is_empty());
    }

    #[test]
    fn display_forms() {
        assert_eq!(Range::new(1, 3).to_string(), "1-3");
        assert_eq!(Range::new(6, 6).to_string(), "6");
        assert_eq!(format_list(&[Range::new(1, 3), Range::new(6, 6)], ", "), "1-3, 6");
    }

    #[test]
    fn parse_list_round_trips() {
        let ranges = parse_list("1-3, 10, 12-14", ", ").unwrap();
        assert_eq!(expand(&ranges), vec![1, 2, 3, 10, 12, 13, 14]);
        assert!(parse_list("", ", ").unwrap().is_empty());
    }

    #[test]
    fn parse_list_with_custom_separator() {
        let ranges = parse_list("1-3; 6", "; ").unwrap();
        assert_eq!(expand(&ranges), vec![1, 2, 3, 6]);
    }

    #[test]
    fn malformed_tokens_abort_the_parse() {
        assert!(matches!(
            parse_list("1-3, x", ", "),
            Err(Error::InvalidRangeToken { .. })
        ));
        assert!(matches!(
            parse_list("5-1", ", "),
            Err(Error::InvalidRangeToken { .. })
        ));
        assert!(matches!(
            parse_list("1--3", ", "),
            Err(Error::InvalidRangeToken { .. })
        ));
    }
}
