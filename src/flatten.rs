//! Flatten: copy every file the walk discovers into one target directory.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::ffi::OsString;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::engine::tools::path_relative_to;
use crate::error::WalkError;
use crate::options::ValidatedFlattenOpts;
use crate::pipeline::{FileCallback, walk_dir};
use crate::types::WalkSummary;
use crate::utils::Logger;

/// Target basename -> source path of the file last written under that name.
#[derive(Debug, Default)]
pub struct WrittenFiles {
    by_name: HashMap<OsString, PathBuf>,
}

impl WrittenFiles {
    /// Record `source` under `name`; returns the source previously written under that name.
    pub fn record(&mut self, name: OsString, source: PathBuf) -> Option<PathBuf> {
        self.by_name.insert(name, source)
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.by_name.get(std::ffi::OsStr::new(name)).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Copies each file, as text, to `target/<basename>`. The last write to a basename wins and
/// every overwrite is warned about.
pub struct Copier {
    target: PathBuf,
    written: WrittenFiles,
    logger: Arc<dyn Logger>,
}

impl Copier {
    pub fn new(target: impl Into<PathBuf>, logger: Arc<dyn Logger>) -> Self {
        Self {
            target: target.into(),
            written: WrittenFiles::default(),
            logger,
        }
    }

    pub fn written(&self) -> &WrittenFiles {
        &self.written
    }

    pub async fn copy(&mut self, source: &Path) -> Result<()> {
        let name = source
            .file_name()
            .with_context(|| format!("{} has no file name", source.display()))?;
        let destination = self.target.join(name);
        if self
            .written
            .record(name.to_os_string(), source.to_path_buf())
            .is_some()
        {
            self.logger.warn(&format!(
                "{} already written; overwriting with {}",
                destination.display(),
                source.display()
            ));
        }
        let data = tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("read {}", source.display()))?;
        tokio::fs::write(&destination, data)
            .await
            .with_context(|| format!("write {}", destination.display()))?;
        self.logger.debug(&format!(
            "Copied {} to {}",
            source.display(),
            destination.display()
        ));
        Ok(())
    }
}

impl FileCallback for Copier {
    fn call(&mut self, path: &Path) -> impl Future<Output = Result<()>> {
        self.copy(path)
    }
}

/// Copy every file under `opts.source` into `opts.target`.
pub async fn flatten_dir(
    opts: &ValidatedFlattenOpts,
    logger: Arc<dyn Logger>,
) -> Result<WalkSummary, WalkError> {
    let copier = Copier::new(&opts.target, Arc::clone(&logger));
    walk_dir(&opts.walk_config(), copier, logger).await
}

/// Dry run: print `source -> destination` for every file a flatten would copy.
pub async fn preview_dir(
    opts: &ValidatedFlattenOpts,
    logger: Arc<dyn Logger>,
) -> Result<WalkSummary, WalkError> {
    let source = opts.source.clone();
    let target = opts.target.clone();
    let show = move |path: PathBuf| {
        let shown = path_relative_to(&path, &source).unwrap_or_else(|| path.clone());
        let destination = path.file_name().map(|n| target.join(n));
        async move {
            match destination {
                Some(d) => println!("{} -> {}", shown.display(), d.display()),
                None => println!("{}", shown.display()),
            }
            Ok::<(), anyhow::Error>(())
        }
    };
    walk_dir(&opts.walk_config(), show, logger).await
}
