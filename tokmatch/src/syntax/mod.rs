/*!
Pattern syntax support.

A pattern is a flat sequence of literal characters and bracketed
`[class:range:length]` tokens:

- A literal character matches itself, once.
- `\` escapes the next character (including `[`, `]`, `:` and `\` itself),
  turning it into a literal.
- `[class:range:length]` matches a length-constrained run of characters from
  a character class. The body is split on exactly two unescaped `:`
  separators; each field may be empty to pick its default.

There is no grouping, no alternation between tokens and no anchors; the
grammar is intentionally flat.

## Example
```
use tokmatch::syntax::{tokenize, RawToken};

let tokens = tokenize(r"#[hex::6]").unwrap();
assert!(matches!(tokens[0], RawToken::Literal('#')));
assert!(matches!(
    &tokens[1],
    RawToken::Class(c) if c.class == "hex" && c.range == "" && c.length == "6",
));
```
*/
use logos::Logos;

use crate::error::{BuildError, BuildErrorKind};

/// The surface tokens of the pattern syntax.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum SyntaxToken {
    /// `\` followed by any character; the character is taken verbatim.
    #[regex(r"\\[\s\S]")]
    Escaped,

    /// A `[class:range:length]` token. The body may contain escaped pairs,
    /// including `\]` and `\:`.
    #[regex(r"\[([^\]\\]|\\[\s\S])*\]")]
    Class,

    /// Plain text, matched verbatim character by character.
    #[regex(r"[^\[\\]+")]
    Text,
}

/// A raw token produced by [`tokenize`], before class and length resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawToken<'p> {
    /// One literal character, required verbatim.
    Literal(char),
    /// An unresolved `[class:range:length]` token.
    Class(RawClassToken<'p>),
}

/// The three raw fields of a `[class:range:length]` token, untrimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawClassToken<'p> {
    pub class: &'p str,
    pub range: &'p str,
    pub length: &'p str,
    /// Byte offset of the opening `[` in the pattern.
    pub offset: usize,
}

/// Scans a pattern string into an ordered sequence of raw tokens.
///
/// Fails on an unmatched `[`, a trailing `\`, or a bracketed token whose body
/// does not contain exactly two unescaped `:` separators.
pub fn tokenize(pattern: &str) -> Result<Vec<RawToken<'_>>, BuildError> {
    let mut lex = SyntaxToken::lexer(pattern);
    let mut tokens = Vec::new();
    while let Some(token) = lex.next() {
        let offset = lex.span().start;
        match token {
            Ok(SyntaxToken::Escaped) => {
                let mut chars = lex.slice().chars();
                chars.next();
                if let Some(c) = chars.next() {
                    tokens.push(RawToken::Literal(c));
                }
            }
            Ok(SyntaxToken::Text) => {
                tokens.extend(lex.slice().chars().map(RawToken::Literal));
            }
            Ok(SyntaxToken::Class) => {
                let slice = lex.slice();
                let body = &slice[1..slice.len() - 1];
                let fields = split_fields(body);
                match fields[..] {
                    [class, range, length] => tokens.push(RawToken::Class(RawClassToken {
                        class,
                        range,
                        length,
                        offset,
                    })),
                    _ => {
                        return Err(BuildError::new(
                            BuildErrorKind::TokenFields {
                                found: fields.len() - 1,
                            },
                            offset,
                        ))
                    }
                }
            }
            Err(()) => {
                // Only two inputs are unlexable: a `[` that never closes and
                // a `\` that escapes nothing.
                let kind = if pattern[offset..].starts_with('[') {
                    BuildErrorKind::UnclosedBracket
                } else {
                    BuildErrorKind::DanglingEscape
                };
                return Err(BuildError::new(kind, offset));
            }
        }
    }
    Ok(tokens)
}

/// Splits a token body on unescaped `:` separators.
fn split_fields(body: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            ':' => {
                fields.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(&body[start..]);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_token() {
        let input = r"a\[b[str::]c";
        let mut lexer = SyntaxToken::lexer(input);
        assert_eq!(lexer.next(), Some(Ok(SyntaxToken::Text)));
        assert_eq!(lexer.next(), Some(Ok(SyntaxToken::Escaped)));
        assert_eq!(lexer.next(), Some(Ok(SyntaxToken::Text)));
        assert_eq!(lexer.next(), Some(Ok(SyntaxToken::Class)));
        assert_eq!(lexer.slice(), "[str::]");
        assert_eq!(lexer.next(), Some(Ok(SyntaxToken::Text)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn literals_only() {
        let tokens = tokenize("hello").unwrap();
        assert_eq!(tokens.len(), 5);
        let text: String = tokens
            .iter()
            .map(|t| match t {
                RawToken::Literal(c) => *c,
                RawToken::Class(_) => unreachable!(),
            })
            .collect();
        assert_eq!(text, "hello");
    }

    #[test]
    fn class_between_literals() {
        let tokens = tokenize("[anum::]@[anum::]").unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(matches!(&tokens[0], RawToken::Class(c) if c.offset == 0));
        assert_eq!(tokens[1], RawToken::Literal('@'));
        assert!(matches!(&tokens[2], RawToken::Class(c) if c.offset == 9));
    }

    #[test]
    fn fields() {
        let tokens = tokenize("[str:A-Z:>=5]").unwrap();
        let RawToken::Class(c) = &tokens[0] else {
            panic!("expected a class token");
        };
        assert_eq!(c.class, "str");
        assert_eq!(c.range, "A-Z");
        assert_eq!(c.length, ">=5");
    }

    #[test]
    fn escapes() {
        let tokens = tokenize(r"\[test\]").unwrap();
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[0], RawToken::Literal('['));
        assert_eq!(tokens[5], RawToken::Literal(']'));

        let tokens = tokenize(r"\\").unwrap();
        assert_eq!(tokens, vec![RawToken::Literal('\\')]);
    }

    #[test]
    fn escaped_separator_in_body() {
        // `\:` does not count towards the two-separator rule.
        let tokens = tokenize(r"[str:\::]").unwrap();
        let RawToken::Class(c) = &tokens[0] else {
            panic!("expected a class token");
        };
        assert_eq!(c.range, r"\:");
    }

    #[test]
    fn unclosed_bracket() {
        let err = tokenize("ab[str::").unwrap_err();
        assert_eq!(err.kind(), &BuildErrorKind::UnclosedBracket);
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn dangling_escape() {
        let err = tokenize(r"abc\").unwrap_err();
        assert_eq!(err.kind(), &BuildErrorKind::DanglingEscape);
        assert_eq!(err.offset(), 3);
    }

    #[test]
    fn field_count() {
        let err = tokenize("[str]").unwrap_err();
        assert_eq!(err.kind(), &BuildErrorKind::TokenFields { found: 0 });

        let err = tokenize("[str:A-Z:3:extra]").unwrap_err();
        assert_eq!(err.kind(), &BuildErrorKind::TokenFields { found: 3 });
    }
}
