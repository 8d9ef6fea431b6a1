//! Source file discovery.
//!
//! Explicit files are taken as given when their extension belongs to the
//! parser. Directories are only entered with `-R`; the walk skips hidden
//! entries, Mix build/dependency directories and symlinked directories.
//! Files are deduplicated by canonical path, so `a.ex` and `./a.ex` name the
//! same file.

use std::fs;
use std::path::{Path, PathBuf};

use extags_scan::ParserDefinition;
use rustc_hash::FxHashSet;

use crate::TagsError;

/// Directory names never descended into.
const SKIPPED_DIRS: &[&str] = &["_build", "deps", "cover", "target", "node_modules"];

/// Resolve command-line inputs to the list of files to scan.
///
/// Keeps command-line order; files found under one directory are sorted by
/// path. A file reached twice is scanned once, under the first path it was
/// reached by.
pub fn discover_sources(
    inputs: &[PathBuf],
    recurse: bool,
    parser: &ParserDefinition,
) -> Result<Vec<PathBuf>, TagsError> {
    let mut seen = FxHashSet::default();
    let mut files = Vec::new();
    let mut push = |path: PathBuf| {
        if seen.insert(canonical_key(&path)) {
            files.push(path);
        }
    };

    for input in inputs {
        let metadata = fs::metadata(input).map_err(|e| TagsError::io(input, e))?;

        if metadata.is_dir() {
            if !recurse {
                tracing::warn!(path = %input.display(), "skipping directory (use -R to recurse)");
                continue;
            }
            let mut found = Vec::new();
            discover_recursive(input, parser, &mut found);
            found.sort();
            for path in found {
                push(path);
            }
        } else if parser.matches_path(input) {
            push(input.clone());
        } else {
            tracing::debug!(path = %input.display(), "not an {} source, skipping", parser.name);
        }
    }

    Ok(files)
}

/// Identity used for deduplication. Falls back to the path as given when it
/// cannot be resolved.
fn canonical_key(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn discover_recursive(dir: &Path, parser: &ParserDefinition, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        tracing::debug!(path = %dir.display(), "unreadable directory, skipping");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        // Skip hidden files and directories
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                continue;
            }
        }

        if path.is_dir() {
            // A linked directory may point back at an ancestor.
            if file_type.is_symlink() {
                tracing::debug!(path = %path.display(), "not following directory symlink");
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if SKIPPED_DIRS.contains(&name) {
                    continue;
                }
            }
            discover_recursive(&path, parser, files);
        } else if parser.matches_path(&path) {
            files.push(path);
        }
    }
}
