//! CLI definition and parsing.
//! Defines the subcommands and provides parse() for command-line handling.
//!
//! Notes:
//! - --root defaults to the current working directory when omitted; the
//!   library never reads ambient process state itself.
//! - Sizes are plain byte counts; both bounds are inclusive.

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// CLI wrapper for the refile library.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Scatter files into a flat folder by size/extension and gather them back"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Root boundary: no file operation may touch a path outside this
    /// directory. Defaults to the current working directory.
    #[arg(long, global = true, value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Append logs to this file in addition to stdout.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Move matching files out of the subfolders of SOURCE into a flat
    /// TARGET directory, renaming each to <folder>_<file>.
    Scatter {
        /// Directory whose immediate subfolders are scanned.
        #[arg(long, value_hint = ValueHint::DirPath)]
        source: PathBuf,

        /// Flat directory receiving the renamed files (created if absent).
        #[arg(long, value_hint = ValueHint::DirPath)]
        target: PathBuf,

        /// Extension to match, repeatable (e.g. --ext .jpg --ext png).
        /// No occurrences means every file matches.
        #[arg(long = "ext", value_name = "EXT")]
        extensions: Vec<String>,

        /// Inclusive lower size bound in bytes.
        #[arg(long, value_name = "BYTES")]
        min_size: Option<u64>,

        /// Inclusive upper size bound in bytes.
        #[arg(long, value_name = "BYTES")]
        max_size: Option<u64>,
    },
    /// Move scattered files from the FLAT directory back under their
    /// original folders beneath ORIGINAL, parsing the <folder>_ prefix.
    Gather {
        /// Flat directory currently holding the scattered files.
        #[arg(long, value_hint = ValueHint::DirPath)]
        flat: PathBuf,

        /// Root under which the original subfolders are recreated.
        #[arg(long, value_hint = ValueHint::DirPath)]
        original: PathBuf,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
