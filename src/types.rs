//! Public types for the walk API and the flatten pipeline.

use std::path::PathBuf;

use crate::utils::config::DEFAULT_MAX_DEPTH;

/// Ordered regular files discovered by one walk. Order follows the filesystem's directory listing, depth first.
pub type FileSet = Vec<PathBuf>;

/// Pattern options for exclusions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchOpts {
    /// Explicit dotfile flag. Dotfiles are matched like any other name either way; leaving this
    /// unset (or `false`) while exclusions are active only produces a warning saying so.
    pub dot: Option<bool>,
    /// Must stay `true`: exclusions are compiled with a leading `**/`.
    pub globstar: bool,
}

impl Default for MatchOpts {
    fn default() -> Self {
        Self {
            dot: None,
            globstar: true,
        }
    }
}

/// Immutable configuration of a single walk.
#[derive(Clone, Debug)]
pub struct WalkConfig {
    /// Directory the walk starts from (depth 0).
    pub root: PathBuf,
    /// Deepest depth still visited. Negative values yield an empty file set.
    pub max_depth: i64,
    /// Exclude patterns (glob syntax, e.g. `node_modules`, `*.log`), matched at any depth.
    pub exclude: Vec<String>,
    pub match_opts: MatchOpts,
}

impl WalkConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            exclude: Vec::new(),
            match_opts: MatchOpts::default(),
        }
    }

    pub fn with_max_depth(mut self, max_depth: i64) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_match_opts(mut self, match_opts: MatchOpts) -> Self {
        self.match_opts = match_opts;
        self
    }
}

/// Outcome of a successful walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Number of files the callback processed.
    pub files: usize,
}
