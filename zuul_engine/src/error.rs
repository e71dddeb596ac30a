//! Errors raised while resolving `test` scripts.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a script could not be replayed.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("script '{}' does not exist", path.display())]
    NotFound { path: PathBuf },
    #[error("script '{}' could not be read", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("script nesting exceeded the limit of {depth}")]
    TooDeep { depth: usize },
}

impl ScriptError {
    /// The single line shown to the player for this failure.
    pub fn player_message(&self) -> &'static str {
        match self {
            ScriptError::NotFound { .. } | ScriptError::Unreadable { .. } => "The file name is incorrect.",
            ScriptError::TooDeep { .. } => "Too many nested test scripts.",
        }
    }
}
