//! Checkout check command.

use std::path::PathBuf;

use crate::domain::{CheckoutStatus, ProjectPaths};

pub fn run_check(paths: &ProjectPaths, dir: Option<PathBuf>) -> i32 {
    let dir = dir.unwrap_or_else(|| paths.project_root().to_path_buf());

    match crate::app::api::check_checkout(&dir) {
        CheckoutStatus::Valid => {
            println!("✅ {} is a Greatdori checkout", dir.display());
            0
        }
        status => {
            let missing = status.missing_entry().unwrap_or_default();
            println!("❌ {} is not a Greatdori checkout (missing {})", dir.display(), missing);
            1
        }
    }
}
