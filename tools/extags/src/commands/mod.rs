//! Command handlers for the `extags` CLI.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write as _};

use extags_scan::{KindSet, ELIXIR};
use rustc_hash::FxHashSet;

use crate::discovery::discover_sources;
use crate::scan::scan_files;
use crate::writer::TagFile;
use crate::{OutputTarget, TagsError, TagsOptions};

/// Counts reported after a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TagsSummary {
    pub files: usize,
    pub tags: usize,
}

/// Discover, scan and write the tag file.
pub fn generate_tags(options: &TagsOptions) -> Result<TagsSummary, TagsError> {
    let files = discover_sources(&options.inputs, options.recurse, &ELIXIR)?;
    let scanned = scan_files(&files, &options.scan)?;

    let mut tag_file = TagFile::new(options.sort);
    if options.append {
        if let OutputTarget::File(path) = &options.output {
            match fs::read_to_string(path) {
                Ok(existing) => {
                    let rescanned: FxHashSet<String> = scanned
                        .iter()
                        .map(|f| f.path.display().to_string())
                        .collect();
                    tag_file.retain_existing(&existing, &rescanned);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(TagsError::io(path, e)),
            }
        }
    }
    let mut summary = TagsSummary {
        files: scanned.len(),
        tags: 0,
    };
    for file in &scanned {
        summary.tags += tag_file.add_file(file);
    }

    let contents = tag_file.render();

    match &options.output {
        OutputTarget::File(path) => {
            fs::write(path, contents).map_err(|e| TagsError::io(path, e))?;
        }
        OutputTarget::Stdout => {
            io::stdout()
                .lock()
                .write_all(contents.as_bytes())
                .map_err(|e| TagsError::io("<stdout>", e))?;
        }
    }

    tracing::debug!(files = summary.files, tags = summary.tags, "tag file written");
    Ok(summary)
}

/// `--list-kinds` output: one row per kind, `[off]` marking disabled kinds.
pub fn list_kinds(kinds: KindSet) -> String {
    let mut out = String::new();
    for kind in ELIXIR.kinds {
        let _ = write!(
            out,
            "{}  {:<10} {}",
            kind.code(),
            kind.name(),
            kind.description()
        );
        if !kinds.is_enabled(*kind) {
            out.push_str(" [off]");
        }
        out.push('\n');
    }
    out
}

/// `--list-maps` output.
pub fn list_maps() -> String {
    let patterns: Vec<String> = ELIXIR.extensions.iter().map(|e| format!("*.{e}")).collect();
    format!("{:<10} {}\n", ELIXIR.name, patterns.join(" "))
}

/// `--help` output.
pub fn usage() -> &'static str {
    "\
Usage: extags [options] <file|dir>...

Generate a ctags-compatible tag file for Elixir sources.

Options:
  -R, --recurse              Recurse into directories
  -f, -o <file>              Write tags to <file> (default: tags, '-' for stdout)
  -a, --append               Merge into an existing tag file
  --sort=yes|no              Sort tags by name (default: yes)
  --kinds-elixir=<spec>      Enable/disable kinds, e.g. -pl or fm
  --ident=punctuated|dotted  Identifier class (default: punctuated)
  --no-scope                 Do not attach module scope to functions
  --all-names                Also tag functions not starting with a letter
                             (def __struct__, defp _helper)
  --legacy                   Dotted identifiers, no protocol/impl, no scope,
                             all function names
  --list-kinds[=Elixir]      List tag kinds
  --list-maps                List file extensions
  -v, --verbose              Debug logging (or set EXTAGS_LOG)
  -h, --help                 Show this help
  -V, --version              Show version
"
}
