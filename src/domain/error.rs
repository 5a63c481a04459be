use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for build-dori operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// No source root override and the project root is not a checkout.
    #[error(
        "Could not determine the source root: {} is not a Greatdori checkout (set DORI_SOURCE_ROOT to override)",
        .project_root.display()
    )]
    SourceRootUnresolved { project_root: PathBuf },

    /// No repo name override and the project root is not a checkout.
    #[error(
        "Could not determine the repo name: {} is not a Greatdori checkout (set DORI_REPO_NAME to override)",
        .project_root.display()
    )]
    RepoNameUnresolved { project_root: PathBuf },

    #[error("Internal error: {0}")]
    InternalError(String),
}
