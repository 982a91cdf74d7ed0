/*!
The backtracking match engine and the search routines built on it.

A [`Matcher`] executes a compiled [`Pattern`](crate::pattern::Pattern)
against haystacks. Class tokens are matched greedily: each one first takes
the longest run its class and bounds allow, and gives characters back one at
a time when a later element (or the end-of-haystack requirement) cannot be
satisfied. Literal characters are required exactly and create no branch
point of their own.

## Usage
```
use tokmatch::matcher::Matcher;

// Whole-string matching.
let matcher = Matcher::new("[str:A-Z:]").unwrap();
assert!(matcher.is_full_match("MARK"));
assert!(matcher.is_full_match("Mark") == false);

// Searching.
let matcher = Matcher::new("[dec::]").unwrap();
let m = matcher.find("abc123def456").unwrap();
assert_eq!(m.range(), 3..6);
assert_eq!(
    matcher.find_all("abc123def456").len(),
    2,
);
```

## Captures
Every class token records the span it finally settled on, in pattern order:
```
use tokmatch::matcher::Matcher;

let matcher = Matcher::new("[anum::]@[anum::]").unwrap();
let haystack = "user@domain";
let m = matcher.find(haystack).unwrap();
let captured: Vec<_> = m.captures().iter().map(|s| &haystack[s.range()]).collect();
assert_eq!(captured, vec!["user", "domain"]);
```

All offsets are byte offsets on `char` boundaries; classes, literals and
run lengths are measured in characters, so non-ASCII haystacks and ranges
work as expected.
*/
use crate::{
    error::BuildError,
    pattern::{Pattern, PatternElement},
};

mod input;
mod matches;

pub use input::Input;
pub use matches::{Match, Span};

/// Executes a compiled pattern against haystacks.
///
/// A `Matcher` is immutable: every attempt owns its own cursor and stack, so
/// one matcher can serve any number of concurrent searches.
#[derive(Clone, Debug)]
pub struct Matcher {
    pattern: Pattern,
}

/// One backtracking point: the run a class element currently holds.
#[derive(Clone, Copy, Debug)]
struct Frame {
    /// Index of the class element this frame belongs to.
    element: usize,
    /// Byte offset where the run starts.
    start: usize,
    /// Byte offset just past the run.
    end: usize,
    /// Current run length in characters.
    len: usize,
}

impl Matcher {
    /// Compiles `pattern` and wraps it in a matcher.
    pub fn new(pattern: &str) -> Result<Matcher, BuildError> {
        Ok(Matcher::with_pattern(Pattern::compile(pattern)?))
    }

    /// Wraps an already compiled pattern.
    pub fn with_pattern(pattern: Pattern) -> Matcher {
        Matcher { pattern }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns true if and only if the pattern consumes the whole haystack.
    ///
    /// ## Example
    /// ```
    /// use tokmatch::matcher::Matcher;
    ///
    /// let matcher = Matcher::new("[bin::8]").unwrap();
    /// assert!(matcher.is_full_match("10101010"));
    /// assert!(matcher.is_full_match("12345678") == false);
    /// ```
    pub fn is_full_match(&self, haystack: &str) -> bool {
        self.match_at(Input::builder(haystack).to_end(true).build())
            .is_some()
    }

    /// Returns true if the pattern matches anywhere in the haystack.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.find(haystack).is_some()
    }

    /// The leftmost match, if any: attempts at successive character offsets,
    /// first success wins.
    pub fn find(&self, haystack: &str) -> Option<Match> {
        self.find_iter(haystack).next()
    }

    /// Iterator over all non-overlapping matches, in left-to-right order.
    pub fn find_iter<'m, 'h>(&'m self, haystack: &'h str) -> FindMatches<'m, 'h> {
        FindMatches {
            matcher: self,
            haystack,
            at: 0,
        }
    }

    /// All non-overlapping matches, collected.
    ///
    /// ## Example
    /// ```
    /// use tokmatch::matcher::Matcher;
    ///
    /// let matcher = Matcher::new("[dec::]").unwrap();
    /// let haystack = "abc123def456";
    /// let all: Vec<_> = matcher
    ///     .find_all(haystack)
    ///     .iter()
    ///     .map(|m| &haystack[m.range()])
    ///     .collect();
    /// assert_eq!(all, vec!["123", "456"]);
    /// ```
    pub fn find_all(&self, haystack: &str) -> Vec<Match> {
        self.find_iter(haystack).collect()
    }

    /// A single match attempt, per [`Input`]: starts exactly at
    /// `input.start` and, in to-end mode, must consume through to the end of
    /// the haystack.
    pub fn match_at<'h, I: Into<Input<'h>>>(&self, input: I) -> Option<Match> {
        let Input {
            haystack,
            start,
            to_end,
        } = input.into();
        let elements = self.pattern.elements();
        let mut stack: Vec<Frame> = Vec::with_capacity(elements.len());
        let mut element = 0;
        let mut cursor = start;
        loop {
            if element == elements.len() {
                if !to_end || cursor == haystack.len() {
                    let captures = stack
                        .iter()
                        .map(|f| Span {
                            start: f.start,
                            end: f.end,
                        })
                        .collect();
                    return Some(Match {
                        start,
                        end: cursor,
                        captures,
                    });
                }
                // Stopped short of the required boundary: treat it as a
                // failure of the last element.
                (element, cursor) = self.backtrack(haystack, &mut stack)?;
                continue;
            }
            match &elements[element] {
                PatternElement::Literal(c) => {
                    if haystack[cursor..].chars().next() == Some(*c) {
                        cursor += c.len_utf8();
                        element += 1;
                    } else {
                        (element, cursor) = self.backtrack(haystack, &mut stack)?;
                    }
                }
                PatternElement::Class(class, length) => {
                    // Longest feasible run from the cursor.
                    let mut len = 0;
                    let mut end = cursor;
                    for c in haystack[cursor..].chars() {
                        if length.max().is_some_and(|max| len == max) {
                            break;
                        }
                        if !class.contains(c) {
                            break;
                        }
                        len += 1;
                        end += c.len_utf8();
                    }
                    // The run is capped at the maximum above, so only the
                    // minimum can still rule it out here.
                    if !length.matches(len) {
                        (element, cursor) = self.backtrack(haystack, &mut stack)?;
                        continue;
                    }
                    stack.push(Frame {
                        element,
                        start: cursor,
                        end,
                        len,
                    });
                    cursor = end;
                    element += 1;
                }
            }
        }
    }

    /// Gives one character back to the most recent class run that still sits
    /// above its minimum, popping exhausted runs along the way. Returns the
    /// element index and cursor to resume at, or `None` when the attempt has
    /// no alternatives left.
    fn backtrack(&self, haystack: &str, stack: &mut Vec<Frame>) -> Option<(usize, usize)> {
        let elements = self.pattern.elements();
        while let Some(frame) = stack.last_mut() {
            let PatternElement::Class(_, length) = &elements[frame.element] else {
                unreachable!("only class elements push frames");
            };
            if frame.len > length.min() {
                let run = &haystack[frame.start..frame.end];
                let Some(last) = run.chars().next_back() else {
                    unreachable!("a non-minimal run is never empty");
                };
                frame.end -= last.len_utf8();
                frame.len -= 1;
                return Some((frame.element + 1, frame.end));
            }
            stack.pop();
        }
        None
    }
}

/// Iterator over non-overlapping matches. Resumes after each match's end;
/// an empty match advances the scan by one character so the iteration
/// always terminates.
#[derive(Clone, Debug)]
pub struct FindMatches<'m, 'h> {
    matcher: &'m Matcher,
    haystack: &'h str,
    at: usize,
}

impl Iterator for FindMatches<'_, '_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        while self.at < self.haystack.len() {
            let step = self.haystack[self.at..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            match self
                .matcher
                .match_at(Input::builder(self.haystack).start(self.at).build())
            {
                Some(m) => {
                    self.at = if m.is_empty() { self.at + step } else { m.end };
                    return Some(m);
                }
                None => self.at += step,
            }
        }
        None
    }
}
