//! Frame number extraction rules
//!
//! A [`FramePattern`] locates the digit run inside a file name that stands
//! for the frame number. The rule is a single regular expression and is
//! swappable: the default matches any maximal run of decimal digits and
//! prefers the rightmost one (version tags like `v001` tend to sit left of
//! the frame number), while presets cover common alternate conventions.

use regex::Regex;

use crate::error::Result;

/// The decomposition of a name around its matched digit run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSpan<'a> {
    /// Substring before the digit run
    pub head: &'a str,
    /// The digit run itself, leading zeros included
    pub digits: &'a str,
    /// Substring after the digit run
    pub tail: &'a str,
}

impl NumberSpan<'_> {
    /// The frame number value of the digit run
    pub fn value(&self) -> u64 {
        // extract() only yields runs that parse
        self.digits.parse().unwrap_or(0)
    }

    /// The pad width of the digit run
    pub fn pad(&self) -> usize {
        self.digits.len()
    }
}

/// A configurable rule for locating the frame number in a name
#[derive(Debug, Clone)]
pub struct FramePattern {
    regex: Regex,
    use_group: bool,
}

impl FramePattern {
    /// Compile a custom extraction rule
    ///
    /// When the expression contains at least one capture group, group 1 is
    /// taken as the digit field and surrounding context stays part of the
    /// head/tail; otherwise the whole match is the digit field. When the
    /// rule matches more than once, the rightmost match wins.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        let use_group = regex.captures_len() > 1;
        Ok(Self { regex, use_group })
    }

    /// The default rule: any maximal run of decimal digits, rightmost wins
    pub fn digits() -> Self {
        Self {
            regex: Regex::new(r"\d+").expect("digit pattern compiles"),
            use_group: false,
        }
    }

    /// Digit runs enclosed by a delimiter character, e.g. `.1001.`
    pub fn delimited(delimiter: char) -> Result<Self> {
        let d = regex::escape(&delimiter.to_string());
        Self::new(&format!(r"{d}(\d+){d}"))
    }

    /// Digit runs not immediately preceded by `v`, skipping version tags
    pub fn skip_versions() -> Self {
        // no lookbehind in the regex crate; anchor the run start instead
        Self::new(r"(?:^|[^v0-9])(\d+)").expect("version-skip pattern compiles")
    }

    /// Locate the frame number in `name`, or `None` for a name with no
    /// eligible digit run
    pub fn extract<'a>(&self, name: &'a str) -> Option<NumberSpan<'a>> {
        let mut best = None;
        let mut at = 0;
        // resume each scan after the digit group, not the whole match, so
        // a delimiter shared by back-to-back runs (`a.1.2.jpg`) can open
        // the next match
        while at <= name.len() {
            let caps = match self.regex.captures_at(name, at) {
                Some(caps) => caps,
                None => break,
            };
            let whole = caps.get(0).expect("match group 0 always present");
            let m = if self.use_group {
                match caps.get(1) {
                    Some(m) => m,
                    None => {
                        at = whole.end().max(at + 1);
                        continue;
                    }
                }
            } else {
                whole
            };
            at = m.end().max(at + 1);
            // runs too large for u64 are not frame numbers
            if m.as_str().parse::<u64>().is_ok() {
                best = Some(m);
            }
        }
        best.map(|m| NumberSpan {
            head: &name[..m.start()],
            digits: m.as_str(),
            tail: &name[m.end()..],
        })
    }
}

impl Default for FramePattern {
    fn default() -> Self {
        Self::digits()
    }
}
