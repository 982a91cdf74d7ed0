/*!
A small token-pattern matcher. Patterns mix literal text with bracketed
class tokens of the form `[type:range:length]`, and compile into a greedy
backtracking engine with whole-string, first-match and all-matches
searches.

## Pattern syntax
A class token always carries two `:` separators, with each field optional:

- **type**: `str` (letters), `anum` (letters and digits), `num`/`dec`
  (decimal digits), `hex`, `oct`, `bin`.
- **range**: `|`-separated alternatives, each a single character or an
  inclusive `X-Y` interval, replacing the type's default set. Empty keeps
  the default.
- **length**: a run length in characters. Empty means one or more; a bare
  number is exact; bounds `>=N`, `>N`, `<=M`, `<M` may be combined one per
  side.

Outside brackets every character is a literal; `\` escapes the next
character, so `\[` and `\]` match real brackets.

## Examples
```
use tokmatch::Matcher;

let matcher = Matcher::new("[anum::]@[anum::].[str::>=2<=4]")?;
assert!(matcher.is_full_match("example@mail.com"));
assert!(matcher.is_full_match("user123@domain.co"));
assert!(matcher.is_full_match("invalid@domain.x") == false);
# Ok::<(), tokmatch::BuildError>(())
```

Searching a haystack instead of matching all of it:
```
use tokmatch::Matcher;

let matcher = Matcher::new("[dec::]")?;
let haystack = "order 66, table 4";
let numbers: Vec<_> = matcher
    .find_iter(haystack)
    .map(|m| &haystack[m.range()])
    .collect();
assert_eq!(numbers, vec!["66", "4"]);
# Ok::<(), tokmatch::BuildError>(())
```

A pattern can be compiled once and shared:
```
use tokmatch::{Matcher, Pattern};

let pattern = Pattern::compile("[hex::>=2]")?;
let matcher = Matcher::with_pattern(pattern);
assert!(matcher.is_match("color #1a2b3c"));
# Ok::<(), tokmatch::BuildError>(())
```
*/
pub mod error;
pub mod matcher;
pub mod pattern;
pub mod syntax;

pub use error::{BuildError, BuildErrorKind};
pub use matcher::{Input, Match, Matcher, Span};
pub use pattern::Pattern;
