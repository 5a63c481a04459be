pub mod checkout;
pub mod error;
pub mod location;
pub mod overrides;
pub mod project_paths;

pub use checkout::{CheckoutStatus, PROJECT_MARKER, UTILS_DIR, inspect_checkout, is_checkout};
pub use error::AppError;
pub use location::ModuleLocation;
pub use overrides::{EnvOverrides, REPO_NAME_ENV, SOURCE_ROOT_ENV};
pub use project_paths::{ProjectPaths, derive_repo_name, derive_source_root};
