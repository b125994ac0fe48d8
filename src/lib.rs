//! Core library for `refile`.
//!
//! Scatter moves files matching size/extension criteria out of per-folder
//! subdirectories into one flat target directory, renaming each one to
//! `<folder>_<file>` so the move can be undone later. Gather parses those
//! names and puts the files back, recreating missing folders.
//!
//! Every filesystem mutation in the engine passes through a [`PathGuard`]
//! that confines it to a fixed root boundary; a path escaping the boundary
//! aborts the whole operation.

pub mod encoded;
pub mod engine;
pub mod errors;
pub mod guard;
pub mod output;

pub use engine::{GatherReport, ScatterFilter, ScatterReport, gather, scatter};
pub use errors::RelocateError;
pub use guard::PathGuard;
