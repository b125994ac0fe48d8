//! Root-boundary confinement for filesystem operations.
//!
//! Path traversal (`..`, absolute overrides, symlink tricks) is the primary
//! threat here; the mitigation is canonicalize-then-prefix-check. The guard
//! holds nothing but the fixed root: pure path math until a mutation is
//! actually run through [`PathGuard::guarded`].

use std::io;
use std::path::{Component, Path, PathBuf};

use crate::errors::RelocateError;

/// Validates that any path touched by a file operation stays inside a fixed
/// root directory.
///
/// The root is supplied explicitly at construction (never read from ambient
/// process state) and canonicalized once, so later checks compare like with
/// like. Prefix comparison is component-wise; case sensitivity defaults to
/// the platform convention and can be overridden for tests or unusual mounts.
#[derive(Debug, Clone)]
pub struct PathGuard {
    root: PathBuf,
    case_insensitive: bool,
}

impl PathGuard {
    /// Build a guard around an explicit root. The root must already exist
    /// and be a directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, RelocateError> {
        let root = root.as_ref();
        let canonical = dunce::canonicalize(root).map_err(|source| RelocateError::InvalidRoot {
            path: root.to_path_buf(),
            source,
        })?;
        if !canonical.is_dir() {
            return Err(RelocateError::InvalidRoot {
                path: root.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "root is not a directory"),
            });
        }
        Ok(Self {
            root: canonical,
            case_insensitive: cfg!(windows),
        })
    }

    /// Override the case rule used for the prefix check. Defaults to
    /// insensitive on Windows and sensitive elsewhere.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// The canonical root boundary.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True iff `candidate` resolves to a location inside the root.
    pub fn is_within_root(&self, candidate: &Path) -> bool {
        let resolved = self.resolve(candidate);
        self.is_prefix(&resolved)
    }

    /// Resolve `candidate` and confirm it stays inside the root.
    ///
    /// Returns the resolved path so callers operate on exactly what was
    /// checked. Must run before any create/move/delete derived from caller
    /// input touches the filesystem.
    pub fn authorize(&self, candidate: &Path) -> Result<PathBuf, RelocateError> {
        let resolved = self.resolve(candidate);
        if self.is_prefix(&resolved) {
            Ok(resolved)
        } else {
            Err(RelocateError::AccessDenied {
                path: candidate.to_path_buf(),
                root: self.root.clone(),
            })
        }
    }

    /// Authorize `path`, then run `op` against the resolved form.
    ///
    /// The single choke point for every mutation in the engine: `op` never
    /// executes against an out-of-boundary path.
    pub fn guarded<T, F>(&self, path: &Path, op: F) -> Result<T, RelocateError>
    where
        F: FnOnce(&Path) -> Result<T, RelocateError>,
    {
        let resolved = self.authorize(path)?;
        op(&resolved)
    }

    /// Canonical form for a path that may not exist yet: canonicalize the
    /// deepest existing ancestor, then fold the remaining components
    /// lexically (`.` dropped, `..` popped).
    fn resolve(&self, candidate: &Path) -> PathBuf {
        let absolute = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.root.join(candidate)
        };

        let mut base = absolute.as_path();
        while !base.exists() {
            match base.parent() {
                Some(parent) => base = parent,
                None => break,
            }
        }

        let mut resolved = dunce::canonicalize(base).unwrap_or_else(|_| base.to_path_buf());
        if let Ok(rest) = absolute.strip_prefix(base) {
            for comp in rest.components() {
                match comp {
                    Component::Normal(c) => resolved.push(c),
                    Component::ParentDir => {
                        resolved.pop();
                    }
                    _ => {}
                }
            }
        }
        resolved
    }

    /// Component-wise prefix check of `candidate` against the root. Raw
    /// string prefixing would accept `/root/foobar` under `/root/foo`.
    fn is_prefix(&self, candidate: &Path) -> bool {
        if !self.case_insensitive {
            return candidate.starts_with(&self.root);
        }
        let mut cand = candidate.components();
        for root_comp in self.root.components() {
            match cand.next() {
                Some(c) if c.as_os_str().eq_ignore_ascii_case(root_comp.as_os_str()) => {}
                _ => return false,
            }
        }
        true
    }
}
