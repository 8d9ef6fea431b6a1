//! Parallel multi-file scanning.
//!
//! Each file gets its own [`TagScanner`], so module scope can never cross
//! from one file into another even when rayon scans them on the same
//! worker thread. Results come back in input order.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use extags_scan::{ScanConfig, Tag, TagScanner};
use rayon::prelude::*;

use crate::TagsError;

/// Tags found in one file, in discovery order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileTags {
    pub path: PathBuf,
    pub tags: Vec<Tag>,
}

/// Scan one file.
pub fn scan_file(path: &Path, config: &ScanConfig) -> Result<FileTags, TagsError> {
    let file = File::open(path).map_err(|e| TagsError::io(path, e))?;

    let mut tags = Vec::new();
    TagScanner::new(config)
        .scan_reader(BufReader::new(file), &mut tags)
        .map_err(|e| TagsError::io(path, e))?;

    tracing::debug!(path = %path.display(), tags = tags.len(), "scanned");
    Ok(FileTags {
        path: path.to_path_buf(),
        tags,
    })
}

/// Scan `files` in parallel. Stops at the first file that cannot be read.
#[tracing::instrument(level = "debug", skip_all, fields(files = files.len()))]
pub fn scan_files(files: &[PathBuf], config: &ScanConfig) -> Result<Vec<FileTags>, TagsError> {
    files
        .par_iter()
        .map(|path| scan_file(path, config))
        .collect()
}
