use std::ops::Range;

/// The byte offsets of one class token's captured run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Range<usize> {
        span.range()
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Span {
        Span {
            start: range.start,
            end: range.end,
        }
    }
}

/// A successful match: the matched span plus the captured span of every
/// class token, in pattern order. Literal elements capture nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) captures: Vec<Span>,
}

impl Match {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn span(&self) -> Span {
        Span {
            start: self.start,
            end: self.end,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// One captured span per class token in the pattern, left to right.
    pub fn captures(&self) -> &[Span] {
        &self.captures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let m = Match {
            start: 3,
            end: 7,
            captures: vec![Span { start: 3, end: 5 }],
        };
        assert_eq!(m.range(), 3..7);
        assert_eq!(m.len(), 4);
        assert!(!m.is_empty());
        assert_eq!(m.captures()[0].range(), 3..5);
        assert_eq!(m.captures()[0].len(), 2);
    }
}
