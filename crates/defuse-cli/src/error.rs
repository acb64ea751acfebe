use std::io;
use std::path::PathBuf;

use defuse_core::error::SolveError;

/// Errors that can occur before or around a defusal session.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Failed to read a mission file.
    #[error("failed to read mission file {path}: {source}")]
    MissionRead { path: PathBuf, source: io::Error },

    /// A mission file did not parse as RON.
    #[error("failed to parse mission file {path}: {detail}")]
    MissionParse { path: PathBuf, detail: String },

    /// A mission references a module the toolkit cannot solve.
    #[error("mission references unknown module \"{name}\"")]
    UnknownModule { name: String },

    /// The session itself failed.
    #[error(transparent)]
    Solve(#[from] SolveError),
}
