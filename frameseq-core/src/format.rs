//! Sequence formatting and reverse parsing
//!
//! A format template is scanned left to right; each `%x` directive is
//! substituted with its computed value and literal text passes through
//! verbatim. The reverse direction, [`uncompress`], aligns a previously
//! rendered string against the same template and recovers head, tail, pad
//! width and the exact frame set. Display-only metadata (sizes, mtimes)
//! never round-trips.
//!
//! Directive table:
//!
//! | Directive | Meaning                              |
//! |-----------|--------------------------------------|
//! | `%s`      | sequence start                       |
//! | `%e`      | sequence end                         |
//! | `%l`      | sequence length                      |
//! | `%f`      | list of present frames               |
//! | `%m`      | list of missing frames               |
//! | `%M`      | explicit missing ranges, `[11-14]`   |
//! | `%p`      | pad specifier, e.g. `%04d`           |
//! | `%r`      | implied range, `start-end`           |
//! | `%R`      | explicit broken range, `[1-10, 15]`  |
//! | `%d`      | disk usage in bytes                  |
//! | `%H`      | disk usage, human readable           |
//! | `%D`      | parent directory                     |
//! | `%h`      | string preceding the frame number    |
//! | `%t`      | string after the frame number        |
//!
//! A digit group after `%` (e.g. `%04l`) sets the field width; a leading
//! zero pads with zeros, otherwise with spaces. `%%` is a literal `%`.

use regex::Regex;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::item::Item;
use crate::range::{self, Range};
use crate::sequence::Sequence;

/// The fixed set of format directives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `%s`, first frame number
    Start,
    /// `%e`, last frame number
    End,
    /// `%l`, count of present items
    Length,
    /// `%f`, bracketed list of present frames
    Frames,
    /// `%m`, bracketed list of missing frames
    Missing,
    /// `%M`, bracketed missing ranges
    MissingRanges,
    /// `%p`, pad specifier such as `%04d`
    PadSpec,
    /// `%r`, implied contiguous range
    ImpliedRange,
    /// `%R`, explicit broken range
    BrokenRange,
    /// `%d`, disk usage in bytes
    DiskUsage,
    /// `%H`, disk usage human readable
    DiskUsageHuman,
    /// `%D`, parent directory
    Directory,
    /// `%h`, head
    Head,
    /// `%t`, tail
    Tail,
}

impl Directive {
    /// Map a directive character to its variant
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Self::Start),
            'e' => Some(Self::End),
            'l' => Some(Self::Length),
            'f' => Some(Self::Frames),
            'm' => Some(Self::Missing),
            'M' => Some(Self::MissingRanges),
            'p' => Some(Self::PadSpec),
            'r' => Some(Self::ImpliedRange),
            'R' => Some(Self::BrokenRange),
            'd' => Some(Self::DiskUsage),
            'H' => Some(Self::DiskUsageHuman),
            'D' => Some(Self::Directory),
            'h' => Some(Self::Head),
            't' => Some(Self::Tail),
            _ => None,
        }
    }

    fn group_name(self) -> &'static str {
        match self {
            Self::Start => "s",
            Self::End => "e",
            Self::Length => "l",
            Self::Frames => "f",
            Self::Missing => "m",
            Self::MissingRanges => "M",
            Self::PadSpec => "p",
            Self::ImpliedRange => "r",
            Self::BrokenRange => "R",
            Self::DiskUsage => "d",
            Self::DiskUsageHuman => "H",
            Self::Directory => "D",
            Self::Head => "h",
            Self::Tail => "t",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Start | Self::End | Self::Length | Self::DiskUsage
        )
    }
}

/// Field width parsed from the digit group after `%`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FieldWidth {
    width: usize,
    zero: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Directive {
        width: Option<FieldWidth>,
        directive: Directive,
    },
}

/// Parse a template into literal and directive segments
fn parse_template(template: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            literal.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            literal.push('%');
            continue;
        }
        let mut digits = String::new();
        while let Some(d) = chars.peek().filter(|d| d.is_ascii_digit()) {
            digits.push(*d);
            chars.next();
        }
        let c = chars.next().ok_or_else(|| Error::FormatMismatch {
            reason: "template ends inside a directive".to_string(),
        })?;
        let directive = Directive::from_char(c).ok_or(Error::UnknownDirective { directive: c })?;
        let width = if digits.is_empty() {
            None
        } else {
            Some(FieldWidth {
                zero: digits.starts_with('0'),
                width: digits.parse().map_err(|_| Error::FormatMismatch {
                    reason: format!("field width '{digits}' is out of range"),
                })?,
            })
        };
        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }
        segments.push(Segment::Directive { width, directive });
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

/// Render a sequence through a format template
pub fn render(seq: &Sequence, template: &str) -> Result<String> {
    let mut out = String::new();
    for segment in parse_template(template)? {
        match segment {
            Segment::Literal(s) => out.push_str(&s),
            Segment::Directive { width, directive } => {
                if directive.is_numeric() {
                    let n = match directive {
                        Directive::Start => seq.start(),
                        Directive::End => seq.end(),
                        Directive::Length => seq.len() as u64,
                        Directive::DiskUsage => seq.size(),
                        _ => unreachable!(),
                    };
                    out.push_str(&pad_number(n, width));
                } else {
                    let s = string_value(seq, directive);
                    match width {
                        Some(w) => out.push_str(&format!("{:>width$}", s, width = w.width)),
                        None => out.push_str(&s),
                    }
                }
            }
        }
    }
    Ok(out)
}

fn pad_number(n: u64, width: Option<FieldWidth>) -> String {
    match width {
        Some(w) if w.zero => format!("{:0width$}", n, width = w.width),
        Some(w) => format!("{:>width$}", n, width = w.width),
        None => n.to_string(),
    }
}

fn string_value(seq: &Sequence, directive: Directive) -> String {
    let sep = seq.range_separator();
    match directive {
        Directive::Frames => bracket_frames(&seq.frames(), sep),
        Directive::Missing => bracket_frames(&seq.missing(), sep),
        Directive::MissingRanges => bracket_ranges(&seq.missing_ranges(), sep),
        Directive::BrokenRange => bracket_ranges(&seq.ranges(), sep),
        Directive::ImpliedRange => implied_range(&seq.frames()),
        Directive::PadSpec => seq.pad_spec(),
        Directive::DiskUsageHuman => seq.human_size(),
        Directive::Directory => seq.directory(),
        Directive::Head => seq.head().to_string(),
        Directive::Tail => seq.tail().to_string(),
        _ => unreachable!(),
    }
}

fn bracket_frames(frames: &[u64], separator: &str) -> String {
    let tokens: Vec<String> = frames.iter().map(u64::to_string).collect();
    format!("[{}]", tokens.join(separator))
}

fn bracket_ranges(ranges: &[Range], separator: &str) -> String {
    if ranges.is_empty() {
        String::new()
    } else {
        format!("[{}]", range::format_list(ranges, separator))
    }
}

fn implied_range(frames: &[u64]) -> String {
    match (frames.first(), frames.last()) {
        (Some(start), Some(end)) if start == end => start.to_string(),
        (Some(start), Some(end)) => format!("{start}-{end}"),
        _ => String::new(),
    }
}

/// Parse a previously rendered string back into a sequence
///
/// `template` must be the template the string was rendered with. The frame
/// set is recovered from the most precise directive available: `%R`, then
/// `%f`, then `%r` or `%s`/`%e` with `%m`/`%M` subtracted. A string that
/// does not align with the template's literal/directive skeleton fails
/// with [`Error::FormatMismatch`] and no partial sequence is returned.
pub fn uncompress(text: &str, template: &str, config: &Config) -> Result<Sequence> {
    let segments = parse_template(template)?;

    // the directory is recovered from the text itself; %D never appears in
    // the matched part, mirroring how the strings are rendered from paths
    let (dirname, name) = match text.rsplit_once('/') {
        Some((dir, base)) => (Some(dir), base),
        None => (None, text),
    };

    // `%h%r%t` is ambiguous when the implied range may be a bare frame
    // number: a greedy head would steal all but one digit. Try the strict
    // start-end form first, then fall back to the singleton form.
    let caps = match captures(&segments, name, r"\d+-\d+")? {
        Some(caps) => caps,
        None => captures(&segments, name, r"\d+")?.ok_or_else(|| Error::FormatMismatch {
            reason: "string does not match the template".to_string(),
        })?,
    };

    let sep = config.range_separator();
    let pad = caps.get("p").map(|s| parse_pad_spec(&s)).unwrap_or(0);

    let frames: Vec<u64> = if let Some(list) = caps.get("R") {
        range::expand(&range::parse_list(bracket_inner(&list), sep)?)
    } else if let Some(list) = caps.get("f") {
        range::expand(&range::parse_list(bracket_inner(&list), sep)?)
    } else {
        let span = if let Some(r) = caps.get("r") {
            range::parse_list(&r, sep)?.first().copied()
        } else {
            match (caps.get("s"), caps.get("e")) {
                (Some(s), Some(e)) => {
                    let start = parse_padded(&s)?;
                    let end = parse_padded(&e)?;
                    Some(Range::new(start, end))
                }
                _ => None,
            }
        };
        let span = span.ok_or_else(|| Error::FormatMismatch {
            reason: "template carries no frame information".to_string(),
        })?;
        let missing: Vec<u64> = if let Some(list) = caps.get("m") {
            range::expand(&range::parse_list(bracket_inner(&list), sep)?)
        } else if let Some(list) = caps.get("M") {
            range::expand(&range::parse_list(bracket_inner(&list), sep)?)
        } else {
            Vec::new()
        };
        (span.start..=span.end)
            .filter(|f| !missing.contains(f))
            .collect()
    };

    let head = caps.get("h").unwrap_or_default();
    let tail = caps.get("t").unwrap_or_default();

    let mut items = frames
        .iter()
        .map(|&frame| Item::from_parts(dirname, &head, frame, pad, &tail));
    let first = items.next().ok_or_else(|| Error::FormatMismatch {
        reason: "no frames recovered from the string".to_string(),
    })?;
    let mut seq = Sequence::new(first, config);
    for item in items {
        match seq.append(item) {
            Ok(()) => {}
            // under strict padding, frames wider than the pad fall out
            Err(Error::PaddingConflict { .. }) => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(seq)
}

/// Captured directive values keyed by group name
#[derive(Debug, Default)]
struct Captured(std::collections::HashMap<&'static str, String>);

impl Captured {
    fn get(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

fn captures(
    segments: &[Segment],
    name: &str,
    implied_range_pattern: &str,
) -> Result<Option<Captured>> {
    let mut pattern = String::from("^");
    let mut names: Vec<&'static str> = Vec::new();
    for segment in segments {
        match segment {
            Segment::Literal(s) => pattern.push_str(&regex::escape(s)),
            Segment::Directive { width, directive } => {
                if *directive == Directive::Directory {
                    continue;
                }
                let group = directive.group_name();
                if names.contains(&group) {
                    return Err(Error::FormatMismatch {
                        reason: format!("directive %{group} appears twice in the template"),
                    });
                }
                names.push(group);
                let sub = capture_pattern(*directive, *width, implied_range_pattern);
                pattern.push_str(&format!("(?P<{group}>{sub})"));
            }
        }
    }
    pattern.push('$');

    let re = Regex::new(&pattern).map_err(|e| Error::FormatMismatch {
        reason: format!("template does not compile to a matcher: {e}"),
    })?;
    let caps = match re.captures(name) {
        Some(caps) => caps,
        None => return Ok(None),
    };
    let mut captured = Captured::default();
    for group in names {
        if let Some(m) = caps.name(group) {
            captured.0.insert(group, m.as_str().to_string());
        }
    }
    Ok(Some(captured))
}

fn capture_pattern(
    directive: Directive,
    width: Option<FieldWidth>,
    implied_range_pattern: &str,
) -> String {
    match directive {
        Directive::Start | Directive::End | Directive::Length | Directive::DiskUsage => {
            match width {
                Some(w) if w.zero => format!(r"\d{{{}}}", w.width),
                Some(w) => format!(r"\s*\d{{1,{}}}", w.width),
                None => r"\d+".to_string(),
            }
        }
        Directive::Head | Directive::Tail => r"\S*".to_string(),
        Directive::ImpliedRange => implied_range_pattern.to_string(),
        Directive::BrokenRange
        | Directive::MissingRanges
        | Directive::Frames
        | Directive::Missing => r"\[[^\]]*\]".to_string(),
        Directive::PadSpec => r"%\d*d".to_string(),
        Directive::DiskUsageHuman => r"\s*[\d.]+[BKMGT]".to_string(),
        Directive::Directory => unreachable!("directory segments are skipped"),
    }
}

fn bracket_inner(list: &str) -> &str {
    list.trim_start_matches('[').trim_end_matches(']')
}

fn parse_pad_spec(spec: &str) -> usize {
    spec.trim_start_matches('%')
        .trim_end_matches('d')
        .parse()
        .unwrap_or(0)
}

fn parse_padded(field: &str) -> Result<u64> {
    field.trim().parse().map_err(|_| Error::FormatMismatch {
        reason: format!("'{field}' is not a frame number"),
    })
}
