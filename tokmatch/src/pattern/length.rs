use crate::error::{BuildError, BuildErrorKind};

/// The run-length bounds of a class token: a minimum and an optional
/// (unbounded when `None`) maximum, both inclusive.
///
/// Source forms, after trimming:
///
/// | Form | (min, max) |
/// |---|---|
/// | empty | `(1, unbounded)` |
/// | `N` | `(N, N)` |
/// | `>=N` | `(N, unbounded)` |
/// | `>N` | `(N+1, unbounded)` |
/// | `<=M` | `(0, M)` |
/// | `<M` | `(0, M-1)` |
/// | `>N<M` etc. | both sides applied independently |
///
/// The exclusive arithmetic is literal: `>1<3` admits exactly length 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthConstraint {
    min: usize,
    max: Option<usize>,
}

impl LengthConstraint {
    /// The default constraint: one or more.
    pub const ONE_OR_MORE: LengthConstraint = LengthConstraint { min: 1, max: None };

    pub fn min(self) -> usize {
        self.min
    }

    pub fn max(self) -> Option<usize> {
        self.max
    }

    /// Whether a run of `len` characters satisfies the bounds.
    pub fn matches(self, len: usize) -> bool {
        len >= self.min && self.max.map_or(true, |max| len <= max)
    }

    /// Parses a length field. `offset` is the position of the enclosing
    /// token, used for error reporting.
    pub(crate) fn parse(text: &str, offset: usize) -> Result<LengthConstraint, BuildError> {
        let invalid = || BuildError::new(BuildErrorKind::InvalidLength(text.into()), offset);

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(LengthConstraint::ONE_OR_MORE);
        }
        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            let n = trimmed.parse().map_err(|_| invalid())?;
            return Ok(LengthConstraint {
                min: n,
                max: Some(n),
            });
        }

        // An optional lower bound followed by an optional upper bound, at
        // least one of them present and nothing trailing.
        let mut rest = trimmed;
        let mut min = None;
        let mut max = None;
        if let Some(r) = rest.strip_prefix(">=") {
            let (n, r) = leading_number(r).ok_or_else(invalid)?;
            min = Some(n);
            rest = r;
        } else if let Some(r) = rest.strip_prefix('>') {
            let (n, r) = leading_number(r).ok_or_else(invalid)?;
            min = Some(n.checked_add(1).ok_or_else(invalid)?);
            rest = r;
        }
        if let Some(r) = rest.strip_prefix("<=") {
            let (n, r) = leading_number(r).ok_or_else(invalid)?;
            max = Some(n);
            rest = r;
        } else if let Some(r) = rest.strip_prefix('<') {
            let (n, r) = leading_number(r).ok_or_else(invalid)?;
            max = Some(n.checked_sub(1).ok_or_else(invalid)?);
            rest = r;
        }
        if !rest.is_empty() || (min.is_none() && max.is_none()) {
            return Err(invalid());
        }

        let min = min.unwrap_or(0);
        if max.is_some_and(|max| min > max) {
            return Err(invalid());
        }
        Ok(LengthConstraint { min, max })
    }
}

impl Default for LengthConstraint {
    fn default() -> LengthConstraint {
        LengthConstraint::ONE_OR_MORE
    }
}

/// Splits a leading decimal integer off `s`. `None` if there is none or it
/// overflows.
fn leading_number(s: &str) -> Option<(usize, &str)> {
    let digits = s.len() - s.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let n = s[..digits].parse().ok()?;
    Some((n, &s[digits..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<LengthConstraint, BuildError> {
        LengthConstraint::parse(text, 0)
    }

    fn bounds(text: &str) -> (usize, Option<usize>) {
        let len = parse(text).unwrap();
        (len.min(), len.max())
    }

    #[test]
    fn forms() {
        assert_eq!(bounds(""), (1, None));
        assert_eq!(bounds("  "), (1, None));
        assert_eq!(bounds("5"), (5, Some(5)));
        assert_eq!(bounds(">=5"), (5, None));
        assert_eq!(bounds(">5"), (6, None));
        assert_eq!(bounds("<=5"), (0, Some(5)));
        assert_eq!(bounds("<5"), (0, Some(4)));
        assert_eq!(bounds(">1<5"), (2, Some(4)));
        assert_eq!(bounds(">=1<=5"), (1, Some(5)));
        assert_eq!(bounds(">1<=5"), (2, Some(5)));
        assert_eq!(bounds(">=1<5"), (1, Some(4)));
        assert_eq!(bounds("0"), (0, Some(0)));
    }

    #[test]
    fn exclusive_collapse() {
        // `>1<3` leaves exactly one admissible length.
        assert_eq!(bounds(">1<3"), (2, Some(2)));
    }

    #[test]
    fn inconsistent_bounds() {
        assert!(parse(">3<4").is_err());
        assert!(parse(">=5<=4").is_err());
        assert!(parse("<0").is_err());
    }

    #[test]
    fn malformed() {
        assert!(parse("abc").is_err());
        assert!(parse(">=").is_err());
        assert!(parse(">= 5").is_err());
        assert!(parse("5x").is_err());
        assert!(parse("<=5>=1").is_err());
        assert!(parse(">1>2").is_err());
        assert!(parse("=5").is_err());
        assert!(parse("-5").is_err());
    }

    #[test]
    fn matches() {
        let len = parse(">=2<=4").unwrap();
        assert!(!len.matches(1));
        assert!(len.matches(2));
        assert!(len.matches(4));
        assert!(!len.matches(5));

        assert!(LengthConstraint::ONE_OR_MORE.matches(1_000_000));
        assert!(!LengthConstraint::ONE_OR_MORE.matches(0));
    }
}
