//! Path and filter utilities

use globset::{GlobBuilder, GlobMatcher};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::WalkError;
use crate::types::MatchOpts;
use crate::utils::Logger;
use crate::utils::config::GLOBSTAR_PREFIX;

/// Convert absolute path to relative path from base
pub fn path_relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    path.strip_prefix(base).ok().map(|p| p.to_path_buf())
}

/// Matching surface for exclusion globs.
///
/// With `windows` set, strips everything up to and including the first drive designator
/// (`C:\`, `\\?\C:\`) and turns every run of backslashes into a single `/`. Otherwise the
/// path is returned unchanged.
pub fn posix_surface(path: &str, windows: bool) -> Cow<'_, str> {
    if !windows {
        return Cow::Borrowed(path);
    }
    let rest = match path.find(':') {
        Some(i) if path[i + 1..].starts_with('\\') => path[i + 1..].trim_start_matches('\\'),
        _ => path,
    };
    let mut out = String::with_capacity(rest.len());
    let mut in_run = false;
    for c in rest.chars() {
        if c == '\\' {
            if !in_run {
                out.push('/');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    Cow::Owned(out)
}

/// Compile one exclude pattern as `**/<pattern>`. `*` does not cross `/`.
pub fn compile_exclusion(pattern: &str) -> Result<GlobMatcher, WalkError> {
    GlobBuilder::new(&format!("{GLOBSTAR_PREFIX}{pattern}"))
        .literal_separator(true)
        .build()
        .map(|g| g.compile_matcher())
        .map_err(|source| WalkError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Glob exclusions, matched on a platform-independent path surface.
pub struct PathFilter {
    excluded: Vec<(String, GlobMatcher)>,
    windows: bool,
    logger: Arc<dyn Logger>,
}

impl PathFilter {
    /// Compile `patterns`. An empty list yields a filter that includes everything without matching.
    pub fn compile(
        patterns: &[String],
        match_opts: MatchOpts,
        logger: Arc<dyn Logger>,
    ) -> Result<Self, WalkError> {
        if patterns.is_empty() {
            logger.verbose("No excludes found; all files included");
            return Ok(Self {
                excluded: Vec::new(),
                windows: cfg!(windows),
                logger,
            });
        }
        logger.verbose("Generating glob matchers from excludes");
        if !match_opts.globstar {
            logger.error(WalkError::NOGLOBSTAR_MSG);
            return Err(WalkError::NoGlobstar);
        }
        if match_opts.dot != Some(true) {
            logger.warn(
                "Dotfiles are matched by excludes like any other name (dot is false/unset)",
            );
        }
        logger.verbose(&format!("Prepending {GLOBSTAR_PREFIX} to all excluded paths"));
        let excluded = patterns
            .iter()
            .map(|p| compile_exclusion(p).map(|m| (format!("{GLOBSTAR_PREFIX}{p}"), m)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            excluded,
            windows: cfg!(windows),
            logger,
        })
    }

    /// Match as if running on Windows (or not), regardless of the host platform.
    pub fn with_windows_surface(mut self, windows: bool) -> Self {
        self.windows = windows;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }

    /// False if any exclusion matches `path`.
    pub fn is_included(&self, path: &Path) -> bool {
        if self.excluded.is_empty() {
            return true;
        }
        let raw = path.to_string_lossy();
        let surface = posix_surface(&raw, self.windows);
        if self.windows {
            self.logger.silly(&format!("Dummy posix path: {surface}"));
        }
        !self.excluded.iter().any(|(pattern, matcher)| {
            self.logger.debug(&format!("Testing {pattern} against {surface}"));
            matcher.is_match(&*surface)
        })
    }
}

/// `depth <= max_depth`, with the root at depth 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthGate {
    max_depth: i64,
}

impl DepthGate {
    pub fn new(max_depth: i64) -> Self {
        Self { max_depth }
    }

    pub fn check(&self, depth: usize) -> bool {
        i64::try_from(depth).is_ok_and(|d| d <= self.max_depth)
    }
}
