//! build-dori: resolve the Greatdori checkout the build tool runs from.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{check_checkout, current, module_file, resolve_from};
pub use domain::{
    AppError, CheckoutStatus, EnvOverrides, ModuleLocation, ProjectPaths, REPO_NAME_ENV,
    SOURCE_ROOT_ENV, derive_repo_name, derive_source_root, inspect_checkout, is_checkout,
};
pub use ports::PathProbe;
pub use services::FilesystemProbe;
