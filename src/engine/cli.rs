//! CLI command handler: flatten by default; --dry-run prints the plan instead of copying.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::sync::Arc;

use crate::engine::arg_parser::Cli;
use crate::flatten::{flatten_dir, preview_dir};
use crate::options::FlattenOpts;
use crate::utils::config::PackagePaths;
use crate::utils::flatdir_toml::{apply_file_to_opts, flatdir_toml_path, load_flatdir_toml};
use crate::utils::{LogFacade, LogLevel, Logger, setup_logging};

/// Merged options plus the warnings collected while reading them.
#[derive(Debug)]
pub struct RunSetup {
    pub opts: FlattenOpts,
    pub level: LogLevel,
    /// Logged by [`handle_run`] once logging is up.
    pub warnings: Vec<String>,
}

/// Merge defaults, `.flatdir.toml` from SOURCE, then CLI flags (CLI wins).
///
/// SOURCE's own config file is excluded from the walk so it is never copied into TARGET.
pub fn setup_opts(cli: &Cli) -> RunSetup {
    let mut opts = FlattenOpts {
        source: cli.source.clone(),
        ..FlattenOpts::default()
    };
    let mut warnings = Vec::new();
    let file = load_flatdir_toml(&cli.source).unwrap_or_else(|e| {
        warnings.push(e.to_string());
        None
    });
    if let Some(ref file) = file {
        apply_file_to_opts(file, &cli.source, &mut opts);
    }
    if let Some(ref target) = cli.target {
        opts.target = target.clone();
    }
    if let Some(depth) = cli.max_depth {
        opts.max_depth = depth;
    }
    if !cli.exclude.is_empty() {
        opts.exclude = cli.exclude.clone();
    }
    if cli.dot.is_some() {
        opts.match_opts.dot = cli.dot;
    }
    let config_name = PackagePaths::get().config_filename();
    if opts.match_opts.globstar
        && flatdir_toml_path(&cli.source).is_file()
        && !opts.exclude.iter().any(|p| p == config_name)
    {
        opts.exclude.push(config_name.to_string());
    }
    let level = match (cli.log_level, cli.verbose) {
        (Some(level), _) => level,
        (None, Some(true)) => LogLevel::Debug,
        _ => file
            .as_ref()
            .and_then(|f| f.log_level())
            .unwrap_or(LogLevel::Info),
    };
    RunSetup {
        opts,
        level,
        warnings,
    }
}

/// Run flatten (default) or preview when --dry-run.
pub async fn handle_run(cli: &Cli) -> Result<()> {
    let RunSetup {
        opts,
        level,
        warnings,
    } = setup_opts(cli);
    setup_logging(level);
    let logger: Arc<dyn Logger> = Arc::new(LogFacade);
    for w in &warnings {
        logger.warn(w);
    }
    let opts = opts.validate(&*logger).context("invalid options")?;
    let summary = if cli.dry_run {
        warn!("RUNNING IN DRY-RUN MODE. NO FILES WILL BE COPIED.");
        preview_dir(&opts, logger).await?
    } else {
        debug!("Flattening directory...");
        flatten_dir(&opts, logger).await?
    };
    log::info!(
        "{} files from {} into {}",
        summary.files,
        opts.source.display(),
        opts.target.display()
    );
    Ok(())
}
