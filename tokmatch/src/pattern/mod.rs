/*!
Compiled patterns.

[`Pattern::compile`] runs the [syntax](crate::syntax) lexer over a pattern
string and resolves every raw token into a [`PatternElement`]: literal
characters pass through, `[class:range:length]` tokens become a
[`CharClass`] membership test plus a [`LengthConstraint`]. The result is an
immutable element sequence that a [`Matcher`](crate::matcher::Matcher) can
execute any number of times, from any number of threads.

## Example
```
use tokmatch::pattern::{Pattern, PatternElement};

let pattern = Pattern::compile("#[hex::6]").unwrap();
assert_eq!(pattern.elements().len(), 2);
assert!(matches!(pattern.elements()[0], PatternElement::Literal('#')));
```
*/
use crate::{
    error::{BuildError, BuildErrorKind},
    syntax::{self, RawToken},
};

mod class;
mod length;

pub use class::{CharClass, ClassKind};
pub use length::LengthConstraint;

/// One element of a compiled pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternElement {
    /// One exact character.
    Literal(char),
    /// A length-constrained run of characters from a class.
    Class(CharClass, LengthConstraint),
}

/// A compiled pattern: an ordered sequence of [`PatternElement`]s.
///
/// Stateless and reusable; compiling the same string twice yields patterns
/// that behave identically on every haystack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    elements: Vec<PatternElement>,
}

impl Pattern {
    /// Compiles a pattern string.
    ///
    /// ## Example
    /// ```
    /// use tokmatch::pattern::Pattern;
    ///
    /// let ok = Pattern::compile("[str:A-Z:>=5]");
    /// assert!(ok.is_ok());
    ///
    /// // Inverted interval.
    /// let err = Pattern::compile("[str:Z-A:]");
    /// assert!(err.is_err());
    /// ```
    pub fn compile(pattern: &str) -> Result<Pattern, BuildError> {
        let tokens = syntax::tokenize(pattern)?;
        let mut elements = Vec::with_capacity(tokens.len());
        for token in tokens {
            elements.push(match token {
                RawToken::Literal(c) => PatternElement::Literal(c),
                RawToken::Class(raw) => {
                    let ident = raw.class.trim();
                    let kind = ClassKind::from_ident(ident).ok_or_else(|| {
                        BuildError::new(BuildErrorKind::UnknownClass(ident.into()), raw.offset)
                    })?;
                    let range = raw.range.trim();
                    let class = if range.is_empty() {
                        CharClass::new(kind)
                    } else {
                        CharClass::with_ranges(kind, range, raw.offset)?
                    };
                    let length = LengthConstraint::parse(raw.length, raw.offset)?;
                    PatternElement::Class(class, length)
                }
            });
        }
        Ok(Pattern { elements })
    }

    /// The elements in source order, the order the matcher consumes them in.
    pub fn elements(&self) -> &[PatternElement] {
        &self.elements
    }
}
