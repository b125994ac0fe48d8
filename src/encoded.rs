//! The `<folder>_<file>` naming convention.
//!
//! This is the on-disk interchange format between scatter and gather: the
//! FIRST underscore in the name is the delimiter, with no escaping of
//! underscores inside either component. A folder name that itself contains
//! an underscore therefore does not round-trip; that ambiguity is inherent
//! to the format and deliberately preserved.

/// Build the flat-directory name that remembers `folder` as the origin.
pub fn encode(folder: &str, file: &str) -> String {
    format!("{folder}_{file}")
}

/// Split an encoded name into `(folder, file)` on the first underscore.
///
/// Returns `None` for names scatter could not have produced: no underscore
/// at all, a leading underscore (empty folder component), or a trailing one
/// (empty file component). Gather skips such files untouched.
pub fn split(name: &str) -> Option<(&str, &str)> {
    let idx = name.find('_')?;
    if idx == 0 {
        return None;
    }
    let file = &name[idx + 1..];
    if file.is_empty() {
        return None;
    }
    Some((&name[..idx], file))
}
