use std::borrow::Cow;

use itertools::Itertools;

use crate::error::{BuildError, BuildErrorKind};

/// The built-in character class kinds.
///
/// `num` and `dec` resolve to the same [`Dec`](ClassKind::Dec) kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// `str`: letters `A-Z` and `a-z`.
    Str,
    /// `anum`: letters and digits `0-9`.
    Anum,
    /// `num` / `dec`: digits `0-9`.
    Dec,
    /// `hex`: digits plus `A-F` and `a-f`.
    Hex,
    /// `oct`: digits `0-7`.
    Oct,
    /// `bin`: `0` and `1`.
    Bin,
}

// Default interval tables. Read-only and shared by every class built without
// a custom range.
const STR_RANGES: &[(char, char)] = &[('A', 'Z'), ('a', 'z')];
const ANUM_RANGES: &[(char, char)] = &[('0', '9'), ('A', 'Z'), ('a', 'z')];
const DEC_RANGES: &[(char, char)] = &[('0', '9')];
const HEX_RANGES: &[(char, char)] = &[('0', '9'), ('A', 'F'), ('a', 'f')];
const OCT_RANGES: &[(char, char)] = &[('0', '7')];
const BIN_RANGES: &[(char, char)] = &[('0', '1')];

impl ClassKind {
    /// Resolves a class identifier. Identifiers are case-sensitive; anything
    /// but the seven known ones yields `None`.
    pub fn from_ident(ident: &str) -> Option<ClassKind> {
        Some(match ident {
            "str" => ClassKind::Str,
            "anum" => ClassKind::Anum,
            "num" | "dec" => ClassKind::Dec,
            "hex" => ClassKind::Hex,
            "oct" => ClassKind::Oct,
            "bin" => ClassKind::Bin,
            _ => return None,
        })
    }

    fn default_ranges(self) -> &'static [(char, char)] {
        match self {
            ClassKind::Str => STR_RANGES,
            ClassKind::Anum => ANUM_RANGES,
            ClassKind::Dec => DEC_RANGES,
            ClassKind::Hex => HEX_RANGES,
            ClassKind::Oct => OCT_RANGES,
            ClassKind::Bin => BIN_RANGES,
        }
    }
}

/// A resolved character class: a kind plus a set of inclusive character
/// intervals. Immutable once built.
///
/// ## Example
/// ```
/// use tokmatch::pattern::{CharClass, ClassKind};
///
/// let hex = CharClass::new(ClassKind::Hex);
/// assert!(hex.contains('f'));
/// assert!(hex.contains('F'));
/// assert!(!hex.contains('g'));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharClass {
    kind: ClassKind,
    ranges: Cow<'static, [(char, char)]>,
}

impl CharClass {
    /// A class with the kind's default range.
    pub fn new(kind: ClassKind) -> CharClass {
        CharClass {
            kind,
            ranges: Cow::Borrowed(kind.default_ranges()),
        }
    }

    /// A class built from a custom range specification such as `A-Za-z0-9`
    /// or `S|s`, replacing the kind's default.
    ///
    /// The specification is a left-to-right sequence of inclusive `X-Y`
    /// intervals and singleton characters, optionally separated by `|`; a
    /// `-` between two characters always forms an interval. `\X` contributes
    /// the literal `X`. An inverted interval or an empty result is an error.
    pub fn with_ranges(kind: ClassKind, spec: &str, offset: usize) -> Result<CharClass, BuildError> {
        let invalid = || BuildError::new(BuildErrorKind::InvalidRange(spec.into()), offset);

        // Decode escapes up front so the interval scan below only has to
        // look at (character, was-escaped) pairs.
        let chars = spec
            .chars()
            .batching(|it| match it.next()? {
                '\\' => it.next().map(|c| (c, true)),
                c => Some((c, false)),
            })
            .collect_vec();

        let mut ranges = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let (c, escaped) = chars[i];
            if c == '|' && !escaped {
                i += 1;
                continue;
            }
            if i + 2 < chars.len() && chars[i + 1] == ('-', false) {
                let (end, _) = chars[i + 2];
                if c > end {
                    return Err(invalid());
                }
                ranges.push((c, end));
                i += 3;
            } else {
                ranges.push((c, c));
                i += 1;
            }
        }

        if ranges.is_empty() {
            return Err(invalid());
        }
        Ok(CharClass {
            kind,
            ranges: Cow::Owned(ranges),
        })
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// The inclusive intervals forming the membership test.
    pub fn ranges(&self) -> &[(char, char)] {
        &self.ranges
    }

    /// Whether `c` is a member of this class.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.ranges.iter().any(|&(start, end)| start <= c && c <= end)
    }
}
