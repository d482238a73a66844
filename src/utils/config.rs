//! Application configuration constants.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    config_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                config_filename: format!(".{pkg}.toml"),
            }
        })
    }

    /// Per-directory config file read by the CLI from SOURCE.
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }
}

// ---- Walk ----

/// Default deepest depth visited; the root is depth 0.
pub const DEFAULT_MAX_DEPTH: i64 = 47;

/// Prefix applied to every exclude pattern so it matches at any depth.
pub const GLOBSTAR_PREFIX: &str = "**/";
