//! Gather: the inverse of scatter. Parses the `<folder>_` prefix off every
//! file in the flat directory and moves each one back under its original
//! folder, recreating missing folders along the way.

use std::path::Path;
use tracing::{debug, info, warn};

use crate::encoded;
use crate::errors::RelocateError;
use crate::guard::PathGuard;

use super::{guarded_create_dir, guarded_move, immediate_entries};

/// Aggregate outcome of one gather pass.
#[derive(Debug, Default)]
pub struct GatherReport {
    pub folders_created: u64,
    pub files_moved: u64,
    pub log: Vec<String>,
}

/// Move scattered files from the flat directory back under
/// `original_root/<folder>/<file>`, parsing the encoded name.
///
/// Files whose names lack the underscore delimiter are not scattered files
/// and are left untouched. A missing original folder is created through the
/// guard and counted, so gather self-heals when destination folders have
/// been removed since the scatter. A missing flat directory is reported,
/// not an error.
pub fn gather(
    guard: &PathGuard,
    flat: &Path,
    original_root: &Path,
) -> Result<GatherReport, RelocateError> {
    let mut report = GatherReport::default();

    let flat = guard.authorize(flat)?;
    if !flat.is_dir() {
        warn!(flat = %flat.display(), "flat directory does not exist");
        report
            .log
            .push(format!("Flat directory does not exist: {}", flat.display()));
        return Ok(report);
    }

    let original_root = guard.authorize(original_root)?;

    // Snapshot the listing before any move mutates the directory.
    for path in immediate_entries(&flat, false) {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            warn!(file = %path.display(), "skipping file with non-UTF-8 name");
            continue;
        };
        let Some((folder, file)) = encoded::split(name) else {
            debug!(file = %path.display(), "not a scattered file, leaving in place");
            continue;
        };

        let folder_path = original_root.join(folder);
        if !folder_path.is_dir() {
            guarded_create_dir(guard, &folder_path)?;
            report.folders_created += 1;
            info!(folder = %folder_path.display(), "created original folder");
            report
                .log
                .push(format!("Created folder: {}", folder_path.display()));
        }

        let dest = guarded_move(guard, &path, &folder_path.join(file))?;
        report.files_moved += 1;
        info!(src = %path.display(), dest = %dest.display(), "moved back");
        report.log.push(format!("Moved: {} -> {}", name, dest.display()));
    }

    Ok(report)
}
