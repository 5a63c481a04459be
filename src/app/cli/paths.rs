//! Path printing commands.

use std::path::Path;

use serde::Serialize;

use crate::domain::{AppError, ProjectPaths};

const UNRESOLVED: &str = "(unresolved)";

/// JSON view of the resolved paths.
///
/// Paths are rendered lossily so a non-UTF-8 override still prints.
#[derive(Debug, Serialize)]
struct PathsReport {
    module_path: String,
    tool_root: String,
    utils_root: String,
    project_root: String,
    source_root: Option<String>,
    repo_name: Option<String>,
}

impl PathsReport {
    fn from_paths(paths: &ProjectPaths) -> Self {
        Self {
            module_path: lossy(paths.module_path()),
            tool_root: lossy(paths.tool_root()),
            utils_root: lossy(paths.utils_root()),
            project_root: lossy(paths.project_root()),
            source_root: paths.source_root().map(lossy),
            repo_name: paths.repo_name().map(str::to_string),
        }
    }
}

pub fn run_paths(paths: &ProjectPaths, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", render_json(paths)?);
        return Ok(());
    }

    println!("module_path: {}", paths.module_path().display());
    println!("tool_root: {}", paths.tool_root().display());
    println!("utils_root: {}", paths.utils_root().display());
    println!("project_root: {}", paths.project_root().display());
    println!("source_root: {}", display_or_unresolved(paths.source_root()));
    println!("repo_name: {}", paths.repo_name().unwrap_or(UNRESOLVED));
    Ok(())
}

pub fn run_source_root(paths: &ProjectPaths) -> Result<(), AppError> {
    println!("{}", paths.require_source_root()?.display());
    Ok(())
}

pub fn run_repo_name(paths: &ProjectPaths) -> Result<(), AppError> {
    println!("{}", paths.require_repo_name()?);
    Ok(())
}

/// Single-line JSON; absent values become `null`.
fn render_json(paths: &ProjectPaths) -> Result<String, AppError> {
    serde_json::to_string(&PathsReport::from_paths(paths))
        .map_err(|e| AppError::InternalError(format!("Failed to serialize paths: {}", e)))
}

fn lossy(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn display_or_unresolved(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_else(|| UNRESOLVED.to_string())
}
