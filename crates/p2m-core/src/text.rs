//! Append-only macro text buffer with argument separator rules.

use std::fmt;

/// Accumulates one macro invocation or raw constructor.
///
/// Two joining rules apply:
/// - [`MacroText::separator`] inserts `", "` between positional arguments,
///   except directly after an opening parenthesis or a name-building `_`.
/// - [`MacroText::or_join`] inserts `" | "` only after a closed flag
///   sub-expression, i.e. when the buffer ends in `)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroText {
    buf: String,
}

impl MacroText {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Current contents.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Returns `true` when nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Length of the contents in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Consumes the buffer.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Appends `text` verbatim.
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self
    }

    /// Discards the contents and restarts with `text`.
    pub fn reset(&mut self, text: &str) -> &mut Self {
        self.buf.clear();
        self.buf.push_str(text);
        self
    }

    /// Replaces the contents with an empty string and returns what was there.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }

    /// Appends `", "` unless the buffer is empty or ends in `(` or `_`.
    pub fn separator(&mut self) -> &mut Self {
        if !matches!(self.buf.chars().last(), None | Some('(' | '_')) {
            self.buf.push_str(", ");
        }
        self
    }

    /// Appends `" | "` iff the buffer ends in `)`.
    pub fn or_join(&mut self) -> &mut Self {
        if self.buf.ends_with(')') {
            self.buf.push_str(" | ");
        }
        self
    }

    /// Appends `text` as the next positional argument.
    pub fn argument(&mut self, text: &str) -> &mut Self {
        self.separator().append(text)
    }
}

impl fmt::Display for MacroText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
