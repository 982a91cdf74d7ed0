use bon::Builder;

/// A single match attempt over a haystack.
///
/// The attempt consumes text starting exactly at `start`; with `to_end` set
/// it must additionally consume through to the end of the haystack
/// (full-consumption mode, used by whole-string matching), otherwise it may
/// stop anywhere (open mode, used by searching).
///
/// ## Example
/// ```
/// use tokmatch::matcher::{Input, Matcher};
///
/// let matcher = Matcher::new("[dec::]").unwrap();
/// let m = matcher.match_at(Input::builder("ab123").start(2).build()).unwrap();
/// assert_eq!(m.range(), 2..5);
/// ```
#[derive(Builder, Clone, Copy)]
pub struct Input<'h> {
    #[builder(start_fn)]
    pub(crate) haystack: &'h str,
    /// Byte offset the attempt starts at. Must lie on a character boundary.
    #[builder(default = 0)]
    pub(crate) start: usize,
    /// Require the attempt to consume the haystack through to its end.
    #[builder(default = false)]
    pub(crate) to_end: bool,
}

impl<'h> From<&'h str> for Input<'h> {
    #[inline]
    fn from(haystack: &'h str) -> Self {
        Input {
            haystack,
            start: 0,
            to_end: false,
        }
    }
}
