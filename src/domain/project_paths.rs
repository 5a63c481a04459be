//! Source root and repo name derivation.

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::checkout::is_checkout;
use crate::domain::location::{ModuleLocation, parent_or_self};
use crate::domain::overrides::{EnvOverrides, REPO_NAME_ENV, SOURCE_ROOT_ENV};
use crate::ports::PathProbe;

/// Returns the source root for `project_path`, or `None` if it cannot be determined.
///
/// `DORI_SOURCE_ROOT` wins unconditionally and is returned verbatim. Otherwise
/// the project is expected to be checked out next to its siblings, so the
/// enclosing directory is the source root:
///
/// ```text
/// source-root/
/// |- DoriKit/
/// |- Greatdori/
/// | ...
/// ```
pub fn derive_source_root(
    project_path: &Path,
    overrides: &EnvOverrides,
    probe: &(impl PathProbe + ?Sized),
) -> Option<PathBuf> {
    if let Some(source_root) = overrides.source_root() {
        let source_root = PathBuf::from(source_root);
        log::debug!("Using {SOURCE_ROOT_ENV} override: {}", source_root.display());
        return Some(source_root);
    }

    if !is_checkout(probe, project_path) {
        return None;
    }

    Some(parent_or_self(project_path))
}

/// Returns the repo name for `project_path`, or `None` if it cannot be determined.
///
/// `DORI_REPO_NAME` wins unconditionally. Otherwise the final component of a
/// valid checkout path is used; the filesystem root yields an empty name.
pub fn derive_repo_name(
    project_path: &Path,
    overrides: &EnvOverrides,
    probe: &(impl PathProbe + ?Sized),
) -> Option<String> {
    if let Some(repo_name) = overrides.repo_name() {
        let repo_name = repo_name.to_string_lossy().into_owned();
        log::debug!("Using {REPO_NAME_ENV} override: {repo_name}");
        return Some(repo_name);
    }

    if !is_checkout(probe, project_path) {
        return None;
    }

    let name = project_path.file_name().map(|n| n.to_string_lossy().into_owned());
    Some(name.unwrap_or_default())
}

/// Every path the build tool needs, resolved in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    location: ModuleLocation,
    source_root: Option<PathBuf>,
    repo_name: Option<String>,
}

impl ProjectPaths {
    /// Resolve against an explicit module file, override snapshot and probe.
    pub fn resolve(
        module_file: &Path,
        overrides: &EnvOverrides,
        probe: &(impl PathProbe + ?Sized),
    ) -> Self {
        let location = ModuleLocation::from_file(module_file);
        let source_root = derive_source_root(&location.project_root, overrides, probe);
        let repo_name = derive_repo_name(&location.project_root, overrides, probe);

        Self { location, source_root, repo_name }
    }

    pub fn location(&self) -> &ModuleLocation {
        &self.location
    }

    pub fn module_path(&self) -> &Path {
        &self.location.module_path
    }

    pub fn tool_root(&self) -> &Path {
        &self.location.tool_root
    }

    pub fn utils_root(&self) -> &Path {
        &self.location.utils_root
    }

    pub fn project_root(&self) -> &Path {
        &self.location.project_root
    }

    pub fn source_root(&self) -> Option<&Path> {
        self.source_root.as_deref()
    }

    pub fn repo_name(&self) -> Option<&str> {
        self.repo_name.as_deref()
    }

    /// Source root, or an error naming the override to set.
    pub fn require_source_root(&self) -> Result<&Path, AppError> {
        self.source_root().ok_or_else(|| AppError::SourceRootUnresolved {
            project_root: self.location.project_root.clone(),
        })
    }

    /// Repo name, or an error naming the override to set.
    pub fn require_repo_name(&self) -> Result<&str, AppError> {
        self.repo_name().ok_or_else(|| AppError::RepoNameUnresolved {
            project_root: self.location.project_root.clone(),
        })
    }
}
