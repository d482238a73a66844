//! flatdir: walk a directory tree with depth and glob exclusion filters, run an async
//! callback on every file found, and flatten the tree into one directory.

pub mod engine;
pub mod error;
pub mod flatten;
pub mod options;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

pub use error::WalkError;
pub use flatten::{Copier, WrittenFiles, flatten_dir, preview_dir};
pub use options::{FlattenOpts, ValidatedFlattenOpts};
pub use pipeline::{FileCallback, walk_dir, walk_files};
pub use utils::{LogFacade, LogLevel, Logger, MemoryLogger};

/// Result alias used by public flatdir API
pub type Result<T> = std::result::Result<T, WalkError>;
