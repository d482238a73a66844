//! Load `.flatdir.toml` from the source directory (CLI only). Lib callers build `FlattenOpts` themselves.

use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};

use crate::options::FlattenOpts;
use crate::utils::LogLevel;
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
pub struct FlatdirToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    target: Option<String>,
    max_depth: Option<i64>,
    exclude: Option<Vec<String>>,
    dot: Option<bool>,
    globstar: Option<bool>,
    log_level: Option<LogLevel>,
}

impl FlatdirToml {
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn log_level(&self) -> Option<LogLevel> {
        self.settings.log_level
    }
}

/// A config file that exists but was ignored.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("{}: {source}; ignoring it", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}; ignoring it", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Path of the config file read from `dir`.
pub fn flatdir_toml_path(dir: &Path) -> PathBuf {
    dir.join(PackagePaths::get().config_filename())
}

/// Load the config file from `dir`. `Ok(None)` when there is none.
///
/// Nothing is logged here: the CLI reads the file before logging is set up, so the caller
/// reports the error once it is.
pub fn load_flatdir_toml(dir: &Path) -> Result<Option<FlatdirToml>, ConfigFileError> {
    let path = flatdir_toml_path(dir);
    let s = match std::fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(ConfigFileError::Read { path, source }),
    };
    FlatdirToml::parse(&s)
        .map(Some)
        .map_err(|source| ConfigFileError::Parse { path, source })
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($idx:expr, $opts:expr, $idx_field:ident => $opts_field:ident) => {
        if let Some(v) = $idx.$idx_field {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI.
/// A relative `target` is resolved against `dir`, the directory the file was read from.
pub fn apply_file_to_opts(file: &FlatdirToml, dir: &Path, opts: &mut FlattenOpts) {
    let s = &file.settings;
    if let Some(ref t) = s.target {
        opts.target = dir.join(PathBuf::from(t));
    }
    apply_file_opt!(s, opts, max_depth => max_depth);
    if let Some(ref v) = s.exclude {
        opts.exclude = v.clone();
    }
    if s.dot.is_some() {
        opts.match_opts.dot = s.dot;
    }
    apply_file_opt!(s, opts.match_opts, globstar => globstar);
}
