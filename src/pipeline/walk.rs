//! Directory walk: depth-first traversal that yields the file set for one root.

use std::fs::FileType;
use std::path::PathBuf;
use std::sync::Arc;

use walkdir::WalkDir;

use crate::error::WalkError;
use crate::types::{FileSet, WalkConfig};
use crate::utils::Logger;

use super::context::WalkContext;

/// What a node is, decided from `lstat` (links are not followed).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
    /// Symlink, socket, FIFO, device...
    Other,
}

impl From<FileType> for NodeKind {
    fn from(ft: FileType) -> Self {
        if ft.is_dir() {
            NodeKind::Directory
        } else if ft.is_file() {
            NodeKind::File
        } else {
            NodeKind::Other
        }
    }
}

/// One result from a directory walk: an accepted node or a fatal error.
pub enum WalkOutcome {
    Node {
        path: PathBuf,
        depth: usize,
        kind: NodeKind,
    },
    Err(WalkError),
}

/// Convert a walkdir result into [`WalkOutcome`]. Errors without a path are attributed to `root`.
pub fn to_outcome_walkdir(
    r: Result<walkdir::DirEntry, walkdir::Error>,
    root: &std::path::Path,
) -> WalkOutcome {
    match r {
        Ok(entry) => WalkOutcome::Node {
            depth: entry.depth(),
            kind: NodeKind::from(entry.file_type()),
            path: entry.into_path(),
        },
        Err(err) => WalkOutcome::Err(WalkError::Traversal {
            path: err
                .path()
                .map(PathBuf::from)
                .unwrap_or_else(|| root.to_path_buf()),
            source: err,
        }),
    }
}

/// Walk `ctx.root`. Every node, the root included, must pass the depth gate and the
/// exclusion filter; a rejected directory is pruned with everything below it.
pub fn discover_files(ctx: &WalkContext) -> Result<FileSet, WalkError> {
    let iter = WalkDir::new(&ctx.root)
        .follow_links(false)
        .follow_root_links(false)
        .into_iter()
        .filter_entry(|e| ctx.include_at_depth(e.path(), e.depth()))
        .map(|r| to_outcome_walkdir(r, &ctx.root));
    run_walk_loop(ctx, iter)
}

/// Consume `iter`: files are collected in order, directories are only logged (walkdir
/// descends into them), anything else is warned about and skipped. The first error aborts
/// the loop and no partial file set is returned.
pub fn run_walk_loop<I>(ctx: &WalkContext, iter: I) -> Result<FileSet, WalkError>
where
    I: Iterator<Item = WalkOutcome>,
{
    let mut files = FileSet::new();
    for outcome in iter {
        match outcome {
            WalkOutcome::Node { path, depth, kind } => match kind {
                NodeKind::File => {
                    ctx.logger
                        .silly(&format!("Found file {} (depth {depth})", path.display()));
                    files.push(path);
                }
                NodeKind::Directory => {
                    ctx.logger
                        .silly(&format!("Entering {} (depth {depth})", path.display()));
                }
                NodeKind::Other => {
                    ctx.logger.warn(&format!(
                        "{} is neither a directory nor a file",
                        path.display()
                    ));
                }
            },
            WalkOutcome::Err(err) => return Err(err),
        }
    }
    ctx.logger.verbose(&format!(
        "Discovered {} files under {}",
        files.len(),
        ctx.root.display()
    ));
    Ok(files)
}

/// Build the context for `config` and collect its file set.
pub fn walk_files(config: &WalkConfig, logger: Arc<dyn Logger>) -> Result<FileSet, WalkError> {
    let ctx = WalkContext::new(config, logger)?;
    discover_files(&ctx)
}
