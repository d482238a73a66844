//! Pipeline components: context, walk, callback runner, orchestration.

pub mod callback;
pub mod context;
pub mod error_handler;
pub mod orchestrator;
pub mod walk;

pub use callback::{FileCallback, run_callbacks};
pub use context::WalkContext;
pub use error_handler::report_failure;
pub use orchestrator::walk_dir;
pub use walk::{
    NodeKind, WalkOutcome, discover_files, run_walk_loop, to_outcome_walkdir, walk_files,
};
