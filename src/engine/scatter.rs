//! Scatter: flatten matching files out of one level of subfolders into a
//! single target directory, renaming each to `<folder>_<file>` so gather can
//! put it back later.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::encoded;
use crate::errors::RelocateError;
use crate::guard::PathGuard;

use super::{guarded_create_dir, guarded_move, immediate_entries};

/// Inclusion criteria for scatter.
///
/// An empty extension list matches every file. Extension comparison is
/// case-insensitive and tolerant of a leading dot in the filter entries, so
/// `.JPG` matches `photo.jpg`. Size bounds are inclusive on both ends and
/// independent; an absent bound leaves that side unbounded.
#[derive(Debug, Clone, Default)]
pub struct ScatterFilter {
    pub extensions: Vec<String>,
    pub min_size: Option<u64>,
    pub max_size: Option<u64>,
}

impl ScatterFilter {
    fn matches(&self, extension: Option<&str>, len: u64) -> bool {
        if let Some(min) = self.min_size
            && len < min
        {
            return false;
        }
        if let Some(max) = self.max_size
            && len > max
        {
            return false;
        }
        if self.extensions.is_empty() {
            return true;
        }
        let Some(ext) = extension else {
            return false;
        };
        self.extensions
            .iter()
            .map(|f| f.trim().trim_start_matches('.'))
            .any(|f| f.eq_ignore_ascii_case(ext))
    }
}

/// Aggregate outcome of one scatter pass.
#[derive(Debug, Default)]
pub struct ScatterReport {
    pub files_moved: u64,
    pub log: Vec<String>,
}

/// One file under consideration during enumeration. Transient: discovered,
/// evaluated, and either skipped or consumed within a single pass.
struct FileCandidate {
    path: PathBuf,
    folder_name: String,
    file_name: String,
    len: u64,
    extension: Option<String>,
}

/// Move files matching `filter` from the immediate subfolders of `source`
/// into a flat `target` directory.
///
/// Only one level of nesting is traversed: immediate subdirectories of
/// `source`, immediate files of each subdirectory. A missing source
/// directory is reported, not an error; the target directory is created
/// through the guard when absent. An out-of-boundary path or an
/// encoded-name collision aborts the batch, leaving prior moves committed.
pub fn scatter(
    guard: &PathGuard,
    source: &Path,
    target: &Path,
    filter: &ScatterFilter,
) -> Result<ScatterReport, RelocateError> {
    let mut report = ScatterReport::default();

    let source = guard.authorize(source)?;
    if !source.is_dir() {
        warn!(source = %source.display(), "source directory does not exist");
        report
            .log
            .push(format!("Source directory does not exist: {}", source.display()));
        return Ok(report);
    }

    let target = guard.authorize(target)?;
    if !target.is_dir() {
        guarded_create_dir(guard, &target)?;
        info!(target = %target.display(), "created target directory");
        report
            .log
            .push(format!("Created target directory: {}", target.display()));
    }

    for folder in immediate_entries(&source, true) {
        let Some(folder_name) = folder.file_name().and_then(|n| n.to_str()) else {
            warn!(folder = %folder.display(), "skipping folder with non-UTF-8 name");
            continue;
        };
        for candidate in candidates_in(&folder, folder_name) {
            if !filter.matches(candidate.extension.as_deref(), candidate.len) {
                debug!(file = %candidate.path.display(), len = candidate.len, "filtered out");
                continue;
            }
            let new_name = encoded::encode(&candidate.folder_name, &candidate.file_name);
            let dest = guarded_move(guard, &candidate.path, &target.join(&new_name))?;
            report.files_moved += 1;
            info!(src = %candidate.path.display(), dest = %dest.display(), "moved");
            report
                .log
                .push(format!("Moved: {} -> {}", candidate.file_name, dest.display()));
        }
    }

    Ok(report)
}

/// Files directly inside `folder`, with the attributes the filter needs.
/// Collected up front so enumeration is finished before any move mutates
/// the directory.
fn candidates_in(folder: &Path, folder_name: &str) -> Vec<FileCandidate> {
    immediate_entries(folder, false)
        .into_iter()
        .filter_map(|path| {
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                warn!(file = %path.display(), "skipping file with non-UTF-8 name");
                return None;
            };
            let file_name = file_name.to_owned();
            let len = match fs::metadata(&path) {
                Ok(meta) => meta.len(),
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "cannot stat file, skipping");
                    return None;
                }
            };
            let extension = path
                .extension()
                .and_then(|x| x.to_str())
                .map(str::to_owned);
            Some(FileCandidate {
                path,
                folder_name: folder_name.to_owned(),
                file_name,
                len,
                extension,
            })
        })
        .collect()
}
