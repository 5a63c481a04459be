//! Library API for the build tool.
//!
//! The process-wide snapshot is resolved on first use and never refreshed.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::domain::{CheckoutStatus, EnvOverrides, ProjectPaths, inspect_checkout};
use crate::services::FilesystemProbe;

static CURRENT: OnceLock<ProjectPaths> = OnceLock::new();

/// Location of this crate's library root, fixed at compile time.
///
/// Stands in for the running tool's own source file: the module path is
/// `<crate>/src` and the tool root is the crate directory.
pub fn module_file() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("lib.rs")
}

/// Paths for this process, resolved once from the environment at first access.
pub fn current() -> &'static ProjectPaths {
    CURRENT.get_or_init(|| {
        let paths = resolve_from(&module_file());
        log::info!(
            "Resolved project root {} (source root: {}, repo name: {})",
            paths.project_root().display(),
            paths.source_root().map(|p| p.display().to_string()).unwrap_or_else(|| "-".into()),
            paths.repo_name().unwrap_or("-"),
        );
        paths
    })
}

/// Resolve paths as if the tool's source file lived at `module_file`.
///
/// Takes a fresh environment snapshot and probes the real filesystem.
pub fn resolve_from(module_file: &Path) -> ProjectPaths {
    ProjectPaths::resolve(module_file, &EnvOverrides::from_process_env(), &FilesystemProbe::new())
}

/// Match a directory on disk against the checkout signature.
pub fn check_checkout(dir: &Path) -> CheckoutStatus {
    inspect_checkout(&FilesystemProbe::new(), dir)
}
