//! Extended-format ctags writer.
//!
//! Each tag becomes one line:
//!
//! ```text
//! name<TAB>file<TAB>line;"<TAB>kind:<kind>[<TAB>module:<Module>]
//! ```
//!
//! The address is a line number, so the file stays valid however the source
//! is edited around the definition. A block of `!_TAG_` pseudo tags comes
//! first.

use rustc_hash::FxHashSet;

use extags_scan::Tag;

use crate::scan::FileTags;

pub const PROGRAM_NAME: &str = "extags";

/// Prefix shared by all pseudo tag lines.
const PSEUDO_TAG_PREFIX: &str = "!_";

/// One tag line plus the fields it is ordered by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagLine {
    pub name: String,
    pub file: String,
    pub line: u32,
    pub text: String,
}

impl TagLine {
    /// Render `tag` found in `file`.
    pub fn render(file: &str, tag: &Tag) -> Self {
        let mut text = format!(
            "{}\t{}\t{};\"\tkind:{}",
            tag.name, file, tag.line, tag.kind
        );
        if let Some(scope) = &tag.scope {
            text.push('\t');
            text.push_str(&scope.to_string());
        }
        TagLine {
            name: tag.name.clone(),
            file: file.to_string(),
            line: tag.line,
            text,
        }
    }

    /// Parse a line of an existing tag file.
    ///
    /// Returns `None` for pseudo tags and for lines without the three
    /// mandatory fields. A non-numeric address sorts as line 0.
    pub fn parse(text: &str) -> Option<Self> {
        if text.starts_with(PSEUDO_TAG_PREFIX) {
            return None;
        }
        let mut fields = text.splitn(4, '\t');
        let name = fields.next()?;
        let file = fields.next()?;
        let address = fields.next()?;
        if name.is_empty() || file.is_empty() {
            return None;
        }
        let line = address.trim_end_matches(";\"").parse().unwrap_or(0);
        Some(TagLine {
            name: name.to_string(),
            file: file.to_string(),
            line,
            text: text.to_string(),
        })
    }

    fn sort_key(&self) -> (&str, &str, u32) {
        (&self.name, &self.file, self.line)
    }
}

/// Tag lines are tab-separated and newline-terminated, so the file field
/// cannot contain either.
fn is_writable_path(path: &str) -> bool {
    !path.contains(['\t', '\n', '\r'])
}

/// The pseudo tag header.
pub fn pseudo_tags(sorted: bool) -> String {
    format!(
        "!_TAG_FILE_FORMAT\t2\t/extended format; --format=1 will not append ;\" to lines/\n\
         !_TAG_FILE_SORTED\t{}\t/0=unsorted, 1=sorted, 2=foldcase/\n\
         !_TAG_PROGRAM_NAME\t{PROGRAM_NAME}\t//\n\
         !_TAG_PROGRAM_VERSION\t{}\t//\n",
        u8::from(sorted),
        env!("CARGO_PKG_VERSION"),
    )
}

/// Tag file contents being assembled.
#[derive(Clone, Debug, Default)]
pub struct TagFile {
    lines: Vec<TagLine>,
    sorted: bool,
}

impl TagFile {
    pub fn new(sorted: bool) -> Self {
        TagFile {
            lines: Vec::new(),
            sorted,
        }
    }

    /// Number of tag lines (pseudo tags excluded).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Keep the entries of an existing tag file, except those belonging to a
    /// file in `rescanned`, whose entries are about to be replaced.
    pub fn retain_existing(&mut self, existing: &str, rescanned: &FxHashSet<String>) {
        self.lines.extend(
            existing
                .lines()
                .filter_map(TagLine::parse)
                .filter(|line| !rescanned.contains(&line.file)),
        );
    }

    /// Add every tag of one scanned file and return how many were added.
    ///
    /// A path containing a tab or line break cannot be written into a tag
    /// line; such a file contributes nothing and is reported at `warn`.
    pub fn add_file(&mut self, file: &FileTags) -> usize {
        let name = file.path.display().to_string();
        if !is_writable_path(&name) {
            tracing::warn!(path = ?name, "path contains a tab or line break, skipping its tags");
            return 0;
        }
        self.lines
            .extend(file.tags.iter().map(|tag| TagLine::render(&name, tag)));
        file.tags.len()
    }

    /// Produce the final file contents.
    pub fn render(mut self) -> String {
        if self.sorted {
            self.lines.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        }
        let mut out = pseudo_tags(self.sorted);
        for line in &self.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }
}
