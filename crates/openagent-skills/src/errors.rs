//! Error types for skill loading.

use std::path::PathBuf;

/// Errors that can occur while loading a skill document.
#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    /// The file exists but could not be read.
    #[error("Failed to read skill file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
