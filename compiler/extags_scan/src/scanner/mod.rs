//! File-scan driver.
//!
//! A [`TagScanner`] owns the scan state for one file at a time: the current
//! module name and the identifier buffers reused across lines. Module scope
//! is flat. The most recent `defmodule` applies to every later function in
//! the same file, regardless of nesting, and is cleared before and after
//! each file so it never leaks into the next one.
//!
//! Scanners share nothing. A host scanning files concurrently creates one
//! scanner per file (or per worker).

use std::io::{self, BufRead};

use extags_lexer_core::SourceLines;

use crate::dispatch;
use crate::{ScanConfig, Tag, TagSink};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Mutable state threaded through every line of one file.
#[derive(Clone, Debug, Default)]
pub struct ScanContext {
    /// Most recent `defmodule` name; empty when none has been seen.
    pub(crate) module: String,
    /// Leading identifier of the current line.
    pub(crate) directive: String,
    /// Identifier following the directive keyword.
    pub(crate) name: String,
}

impl ScanContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current module, or `None` before the first `defmodule`.
    pub fn module(&self) -> Option<&str> {
        if self.module.is_empty() {
            None
        } else {
            Some(&self.module)
        }
    }

    /// Forget the current module.
    pub fn reset(&mut self) {
        self.module.clear();
        self.directive.clear();
        self.name.clear();
    }
}

/// Scans files line by line and forwards tags to a [`TagSink`].
#[derive(Debug)]
pub struct TagScanner<'c> {
    config: &'c ScanConfig,
    ctx: ScanContext,
}

impl<'c> TagScanner<'c> {
    pub fn new(config: &'c ScanConfig) -> Self {
        TagScanner {
            config,
            ctx: ScanContext::new(),
        }
    }

    pub fn context(&self) -> &ScanContext {
        &self.ctx
    }

    /// Start a new file. Module scope becomes empty.
    pub fn begin_file(&mut self) {
        self.ctx.reset();
    }

    /// Finish the current file. Module scope is released.
    pub fn finish_file(&mut self) {
        self.ctx.reset();
    }

    /// Process one line of the current file.
    ///
    /// Hosts feeding lines one at a time call [`begin_file`](Self::begin_file)
    /// first and [`finish_file`](Self::finish_file) after the last line.
    pub fn scan_line<S: TagSink + ?Sized>(&mut self, line_no: u32, line: &str, sink: &mut S) {
        dispatch::scan_line(&mut self.ctx, self.config, line_no, line, sink);
    }

    /// Scan a whole file supplied as `(line_number, line)` pairs.
    pub fn scan_lines<'l, I, S>(&mut self, lines: I, sink: &mut S)
    where
        I: IntoIterator<Item = (u32, &'l str)>,
        S: TagSink + ?Sized,
    {
        self.begin_file();
        for (line_no, line) in lines {
            self.scan_line(line_no, line, sink);
        }
        self.finish_file();
    }

    /// Scan a whole file held in memory.
    pub fn scan_source<S: TagSink + ?Sized>(&mut self, source: &str, sink: &mut S) {
        self.scan_lines(SourceLines::new(source), sink);
    }

    /// Scan a whole file from a reader.
    ///
    /// Lines are decoded lossily; invalid UTF-8 never matches an identifier
    /// byte, so it only costs tags on the affected lines. Tags found before
    /// a read error have already been emitted when the error is returned.
    pub fn scan_reader<R: BufRead, S: TagSink + ?Sized>(
        &mut self,
        mut reader: R,
        sink: &mut S,
    ) -> io::Result<()> {
        self.begin_file();

        let mut buf = Vec::new();
        let mut line_no = 0u32;
        let result = loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break Ok(()),
                Ok(_) => {
                    line_no = line_no.saturating_add(1);
                    let mut bytes = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
                    bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
                    if line_no == 1 {
                        bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                    }
                    let line = String::from_utf8_lossy(bytes);
                    self.scan_line(line_no, &line, sink);
                }
                Err(e) => break Err(e),
            }
        };

        self.finish_file();
        result
    }
}

/// Scan `source` with `config` and collect the tags.
pub fn scan_to_vec(source: &str, config: &ScanConfig) -> Vec<Tag> {
    let mut tags = Vec::new();
    TagScanner::new(config).scan_source(source, &mut tags);
    tags
}
