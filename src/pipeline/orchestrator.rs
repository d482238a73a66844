use std::sync::Arc;

use crate::error::WalkError;
use crate::types::{WalkConfig, WalkSummary};
use crate::utils::Logger;

use super::callback::{FileCallback, run_callbacks};
use super::context::WalkContext;
use super::error_handler::report_failure;
use super::walk::discover_files;

/// Main orchestrator: walk `config.root`, then run `callback` on every discovered file.
///
/// Discovery is blocking and completes before the first callback is awaited, so a callback
/// never sees a half-enumerated directory. Exactly one `Ok` or `Err` per call; failures are
/// logged at error level before they are returned.
pub async fn walk_dir<C>(
    config: &WalkConfig,
    mut callback: C,
    logger: Arc<dyn Logger>,
) -> Result<WalkSummary, WalkError>
where
    C: FileCallback,
{
    logger.info(&format!("Walking {}", config.root.display()));
    match discover_and_run(config, &mut callback, Arc::clone(&logger)).await {
        Ok(summary) => {
            logger.info(&format!("Finished walking {}", config.root.display()));
            Ok(summary)
        }
        Err(err) => Err(report_failure(&*logger, err)),
    }
}

async fn discover_and_run<C>(
    config: &WalkConfig,
    callback: &mut C,
    logger: Arc<dyn Logger>,
) -> Result<WalkSummary, WalkError>
where
    C: FileCallback,
{
    let ctx = WalkContext::new(config, logger)?;
    let files = discover_files(&ctx)?;
    let processed = run_callbacks(files, callback, &*ctx.logger).await?;
    Ok(WalkSummary { files: processed })
}
