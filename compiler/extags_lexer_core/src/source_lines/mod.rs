//! Splits a source text into numbered lines.
//!
//! Lines are yielded in file order with the terminating `\n` removed (and a
//! `\r` directly before it, so CRLF files scan the same as LF files). A
//! final line without a newline is still yielded; an empty source yields
//! nothing. A leading UTF-8 byte order mark is dropped so that a directive
//! on the first line is still found.

/// UTF-8 byte order mark.
const UTF8_BOM: &str = "\u{feff}";

/// Iterator over `(line_number, line)` pairs. Line numbers are 1-based.
#[derive(Clone, Debug)]
pub struct SourceLines<'a> {
    rest: &'a str,
    line: u32,
}

impl<'a> SourceLines<'a> {
    /// Create a line iterator over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            rest: source.strip_prefix(UTF8_BOM).unwrap_or(source),
            line: 0,
        }
    }
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = (u32, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let (line, rest) = match memchr::memchr(b'\n', self.rest.as_bytes()) {
            // `\n` is ASCII, so both split points are character boundaries.
            Some(nl) => (&self.rest[..nl], &self.rest[nl + 1..]),
            None => (self.rest, ""),
        };
        self.rest = rest;
        self.line = self.line.saturating_add(1);

        Some((self.line, line.strip_suffix('\r').unwrap_or(line)))
    }
}
