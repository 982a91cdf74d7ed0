use std::fmt;

/// An error that occurred while compiling a pattern string.
///
/// Compilation either fully succeeds, producing a reusable
/// [`Pattern`](crate::pattern::Pattern), or fails with one of these. Matching
/// itself never errors: a haystack that does not match is an ordinary
/// `None`/`false` result.
///
/// ## Example
/// ```
/// use tokmatch::{BuildError, BuildErrorKind, Pattern};
///
/// let err = Pattern::compile("ab[str:Z-A:]").unwrap_err();
/// assert!(matches!(err.kind(), BuildErrorKind::InvalidRange(_)));
/// assert_eq!(err.offset(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildError {
    kind: BuildErrorKind,
    offset: usize,
}

/// The kind of a [`BuildError`].
///
/// The first three kinds are lexical (the token stream itself is malformed),
/// the rest come from resolving an otherwise well-formed `[class:range:length]`
/// token.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildErrorKind {
    /// A `[` with no matching unescaped `]` before the end of the pattern.
    UnclosedBracket,
    /// A `\` at the very end of the pattern, escaping nothing.
    DanglingEscape,
    /// A bracketed token whose body is not split by exactly two unescaped
    /// `:` separators.
    TokenFields {
        /// How many separators the body actually contained.
        found: usize,
    },
    /// The class field is not one of the recognized identifiers
    /// (`str`, `anum`, `num`, `dec`, `hex`, `oct`, `bin`; case-sensitive).
    UnknownClass(Box<str>),
    /// The range field contains an inverted interval (start above end) or
    /// resolves to no characters at all.
    InvalidRange(Box<str>),
    /// The length field does not follow the bound grammar, or its bounds are
    /// contradictory (minimum above maximum).
    InvalidLength(Box<str>),
}

impl BuildError {
    pub(crate) fn new(kind: BuildErrorKind, offset: usize) -> BuildError {
        BuildError { kind, offset }
    }

    pub fn kind(&self) -> &BuildErrorKind {
        &self.kind
    }

    /// The byte offset of the offending token in the pattern string. For
    /// errors inside a `[class:range:length]` token this is the offset of
    /// the opening `[`.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BuildErrorKind::*;
        match &self.kind {
            UnclosedBracket => {
                write!(f, "unclosed `[` at offset {}", self.offset)
            }
            DanglingEscape => {
                write!(f, "dangling `\\` at offset {}", self.offset)
            }
            TokenFields { found } => write!(
                f,
                "token at offset {} must have the form [class:range:length], \
                 but has {} `:` separator(s) instead of 2",
                self.offset, found,
            ),
            UnknownClass(ident) => write!(
                f,
                "unknown class identifier `{}` at offset {}",
                ident, self.offset,
            ),
            InvalidRange(range) => {
                write!(f, "invalid range `{}` at offset {}", range, self.offset)
            }
            InvalidLength(length) => write!(
                f,
                "invalid length constraint `{}` at offset {}",
                length, self.offset,
            ),
        }
    }
}

impl std::error::Error for BuildError {}

#[cfg(test)]
mod tests {
    use crate::pattern::Pattern;

    use super::*;

    #[test]
    fn display() {
        let err = Pattern::compile("a[str::").unwrap_err();
        assert_eq!(err.to_string(), "unclosed `[` at offset 1");

        let err = Pattern::compile("[nope::]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown class identifier `nope` at offset 0"
        );

        let err = Pattern::compile("x[str:]").unwrap_err();
        assert_eq!(err.kind(), &BuildErrorKind::TokenFields { found: 1 });
        assert_eq!(err.offset(), 1);
    }
}
