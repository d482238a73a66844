//! Per-file callbacks: the trait and the sequential, fail-fast runner.

use std::future::Future;
use std::path::{Path, PathBuf};

use crate::error::WalkError;
use crate::types::FileSet;
use crate::utils::Logger;

/// Asynchronous action applied to each discovered file.
///
/// Any `FnMut(PathBuf) -> impl Future<Output = anyhow::Result<()>>` qualifies:
///
/// ```ignore
/// let seen = |path: PathBuf| async move {
///     println!("{}", path.display());
///     Ok(())
/// };
/// ```
pub trait FileCallback {
    fn call(&mut self, path: &Path) -> impl Future<Output = anyhow::Result<()>>;
}

impl<F, Fut> FileCallback for F
where
    F: FnMut(PathBuf) -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    fn call(&mut self, path: &Path) -> impl Future<Output = anyhow::Result<()>> {
        (self)(path.to_path_buf())
    }
}

/// Await `callback` on each file in order, one at a time. The first failure is returned and
/// the remaining files are left untouched. Returns the number of files processed.
pub async fn run_callbacks<C>(
    files: FileSet,
    callback: &mut C,
    logger: &dyn Logger,
) -> Result<usize, WalkError>
where
    C: FileCallback,
{
    logger.verbose(&format!("Running callback on {} files", files.len()));
    let mut done = 0_usize;
    for path in files {
        logger.silly(&format!("Processing {}", path.display()));
        let outcome = callback.call(&path).await;
        if let Err(err) = outcome {
            return Err(WalkError::Callback {
                path,
                source: err.into(),
            });
        }
        done += 1;
    }
    Ok(done)
}
