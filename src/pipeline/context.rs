//! Walk context: the compiled filters shared by every node of one walk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::engine::tools::{DepthGate, PathFilter};
use crate::error::WalkError;
use crate::types::WalkConfig;
use crate::utils::Logger;

/// Root, depth gate, exclusion filter and logger for a single walk. Built once from a
/// [`WalkConfig`]; never mutated afterwards.
pub struct WalkContext {
    pub root: PathBuf,
    pub gate: DepthGate,
    pub filter: PathFilter,
    pub logger: Arc<dyn Logger>,
}

impl WalkContext {
    /// Normalize the root and compile exclusions. Fails before any traversal on bad patterns.
    pub fn new(config: &WalkConfig, logger: Arc<dyn Logger>) -> Result<Self, WalkError> {
        logger.info("Preparing walker");
        let root: PathBuf = config.root.components().collect();
        let filter =
            PathFilter::compile(&config.exclude, config.match_opts, Arc::clone(&logger))?;
        Ok(Self {
            root,
            gate: DepthGate::new(config.max_depth),
            filter,
            logger,
        })
    }

    /// Depth gate and exclusion filter combined; both must pass.
    pub fn include_at_depth(&self, path: &Path, depth: usize) -> bool {
        self.gate.check(depth) && self.filter.is_included(path)
    }
}
