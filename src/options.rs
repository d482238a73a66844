//! Flatten options and their validation. The walk core trusts whatever passes through here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::WalkError;
use crate::types::{MatchOpts, WalkConfig};
use crate::utils::Logger;
use crate::utils::config::DEFAULT_MAX_DEPTH;

/// Options for [`flatten_dir`](crate::flatten::flatten_dir), before validation.
#[derive(Clone, Debug)]
pub struct FlattenOpts {
    /// Directory to walk. Default: current directory.
    pub source: PathBuf,
    /// Directory every file is copied into. Default: current directory.
    pub target: PathBuf,
    pub max_depth: i64,
    pub exclude: Vec<String>,
    pub match_opts: MatchOpts,
}

impl Default for FlattenOpts {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            target: PathBuf::from("."),
            max_depth: DEFAULT_MAX_DEPTH,
            exclude: Vec::new(),
            match_opts: MatchOpts::default(),
        }
    }
}

/// Options that passed [`FlattenOpts::validate`]: absolute, existing directories.
#[derive(Clone, Debug)]
pub struct ValidatedFlattenOpts {
    pub source: PathBuf,
    pub target: PathBuf,
    pub max_depth: i64,
    pub exclude: Vec<String>,
    pub match_opts: MatchOpts,
}

impl ValidatedFlattenOpts {
    pub fn walk_config(&self) -> WalkConfig {
        WalkConfig::new(&self.source)
            .with_max_depth(self.max_depth)
            .with_exclude(self.exclude.iter().cloned())
            .with_match_opts(self.match_opts)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DirRole {
    Source,
    Target,
}

impl DirRole {
    fn as_str(self) -> &'static str {
        match self {
            DirRole::Source => "source",
            DirRole::Target => "target",
        }
    }
}

fn io_error(path: &Path, source: io::Error) -> WalkError {
    WalkError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl FlattenOpts {
    /// Shorthand for `source`, `target` and an optional depth; everything else is default.
    pub fn positional(
        source: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
        max_depth: Option<i64>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            max_depth: max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            ..Self::default()
        }
    }

    /// Resolve and check both directories. Source must be listable, target must be writable.
    /// A negative depth is only warned about: it is legal and finds nothing.
    pub fn validate(&self, logger: &dyn Logger) -> Result<ValidatedFlattenOpts, WalkError> {
        logger.info("Parsing options");
        logger.verbose("Validating options");
        if self.max_depth < 0 {
            logger.warn(&format!(
                "Negative maxdepth ({}) will find zero files",
                self.max_depth
            ));
        }
        let source = validate_dir(DirRole::Source, &self.source, logger)?;
        let target = validate_dir(DirRole::Target, &self.target, logger)?;
        logger.info("Options successfully parsed");
        Ok(ValidatedFlattenOpts {
            source,
            target,
            max_depth: self.max_depth,
            exclude: self.exclude.clone(),
            match_opts: self.match_opts,
        })
    }
}

fn validate_dir(role: DirRole, dir: &Path, logger: &dyn Logger) -> Result<PathBuf, WalkError> {
    let absolute = std::path::absolute(dir).map_err(|e| io_error(dir, e))?;
    logger.silly(&format!(
        "Absolute {} path is {}",
        role.as_str(),
        absolute.display()
    ));
    let meta = fs::symlink_metadata(&absolute).map_err(|e| io_error(&absolute, e))?;
    if !meta.is_dir() {
        let err = WalkError::InvalidDirectory {
            role: role.as_str(),
            path: absolute,
        };
        logger.error(&err.to_string());
        return Err(err);
    }
    match role {
        DirRole::Source => {
            logger.verbose("Checking read permission on source");
            fs::read_dir(&absolute).map_err(|e| io_error(&absolute, e))?;
        }
        DirRole::Target => {
            logger.verbose("Checking write permission on target");
            // Real write access (ownership, ACLs), not just mode bits.
            tempfile::tempfile_in(&absolute).map_err(|e| io_error(&absolute, e))?;
        }
    }
    Ok(absolute)
}
