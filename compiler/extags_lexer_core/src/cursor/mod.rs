//! Forward-only cursor over a single source line.
//!
//! The cursor yields bytes until the end of the line, where [`current()`]
//! returns the `0x00` sentinel. No byte that the cursor consumes through
//! [`skip_whitespace()`] or [`scan_identifier()`] is ever outside ASCII, so
//! the position always sits on a UTF-8 character boundary after those calls.
//!
//! [`current()`]: LineCursor::current
//! [`skip_whitespace()`]: LineCursor::skip_whitespace
//! [`scan_identifier()`]: LineCursor::scan_identifier

use crate::IdentClass;

/// Returns `true` for the C-locale whitespace bytes: space, `\t`, `\n`,
/// `\v`, `\f` and `\r`.
#[inline]
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Read-only cursor into one line of source text.
///
/// The cursor is [`Copy`]; it only ever moves forward.
#[derive(Clone, Copy, Debug)]
pub struct LineCursor<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor at the start of `line`.
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// Returns the byte at the current position, or `0x00` at end of line.
    #[inline]
    pub fn current(&self) -> u8 {
        self.line.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// Advance by one byte. Saturates at end of line.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.line.len() {
            self.pos += 1;
        }
    }

    /// Returns `true` once every byte of the line has been consumed.
    #[inline]
    pub fn is_eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Current byte offset into the line.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Text between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.line.get(start..self.pos).unwrap_or("")
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, otherwise the loop only stops at the
    /// end of the line because [`advance()`](Self::advance) saturates.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eol() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Skip any run of whitespace. No-op if the current byte is not
    /// whitespace.
    #[inline]
    pub fn skip_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Scan the maximal run of `class` bytes starting at the cursor.
    ///
    /// `buf` is cleared first and holds the scanned text on return (possibly
    /// empty). The byte that stops the run is not consumed. Returns the
    /// number of bytes scanned.
    pub fn scan_identifier(&mut self, class: IdentClass, buf: &mut String) -> usize {
        buf.clear();
        let start = self.pos();
        self.eat_while(|b| class.contains(b));
        buf.push_str(self.slice_from(start));
        self.pos - start
    }
}
