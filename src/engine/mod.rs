//! The relocation engine: scatter and gather.
//!
//! Both passes are single-threaded, synchronous, and stateless between
//! invocations. Each individual move is atomic at best (rename when the
//! destination is on the same filesystem); the batch as a whole is not, and
//! there is no rollback — a failure partway leaves prior moves committed.

mod gather;
mod scatter;

pub use gather::{GatherReport, gather};
pub use scatter::{ScatterFilter, ScatterReport, scatter};

use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use crate::errors::RelocateError;
use crate::guard::PathGuard;

/// Move one file through the guard: rename first, copy+remove when rename
/// fails (typically a cross-filesystem destination). A file already present
/// at the destination fails the whole batch rather than being overwritten.
fn guarded_move(guard: &PathGuard, src: &Path, dest: &Path) -> Result<PathBuf, RelocateError> {
    guard.guarded(dest, |dest| {
        if dest.exists() {
            return Err(RelocateError::DestinationExists(dest.to_path_buf()));
        }
        match fs::rename(src, dest) {
            Ok(()) => Ok(dest.to_path_buf()),
            Err(e) => {
                warn!(error = %e, src = %src.display(), "rename failed, using copy+remove");
                fs::copy(src, dest).map_err(|e| RelocateError::io("copy file to", dest, e))?;
                fs::remove_file(src)
                    .map_err(|e| RelocateError::io("remove original file", src, e))?;
                Ok(dest.to_path_buf())
            }
        }
    })
}

/// Create a directory (and any missing parents) through the guard.
fn guarded_create_dir(guard: &PathGuard, dir: &Path) -> Result<(), RelocateError> {
    guard.guarded(dir, |dir| {
        fs::create_dir_all(dir).map_err(|e| RelocateError::io("create directory", dir, e))
    })
}

/// Snapshot of the entries directly inside `dir` (one level, no recursion),
/// taken before any move mutates the directory.
fn immediate_entries(dir: &Path, want_dirs: bool) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| {
            if want_dirs {
                e.file_type().is_dir()
            } else {
                e.file_type().is_file()
            }
        })
        .map(|e| e.into_path())
        .collect()
}
