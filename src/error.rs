//! Errors surfaced by a walk. Warnings (unclassifiable nodes, basename collisions) are log lines, not errors.

use std::path::PathBuf;

/// Boxed error carried by a failed callback.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    /// Exclusions are compiled as `**/<pattern>`; they cannot work without glob stars.
    #[error("{}", WalkError::NOGLOBSTAR_MSG)]
    NoGlobstar,

    #[error("invalid exclude pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Enumerating or stat-ing a node failed; the walk is aborted.
    #[error("failed to walk {}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// First failing callback; later files were not processed.
    #[error("callback failed for {}", path.display())]
    Callback {
        path: PathBuf,
        #[source]
        source: CallbackError,
    },

    #[error("{role} must be a directory: {}", path.display())]
    InvalidDirectory { role: &'static str, path: PathBuf },

    #[error("cannot access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WalkError {
    pub const NOGLOBSTAR_MSG: &'static str =
        "exclusions depend on glob stars; please remove the noglobstar option";
}
