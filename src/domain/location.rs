//! Tool location and the directory chain above it.

use std::path::{Component, Path, PathBuf};

/// Directories derived from the tool's own source file.
///
/// Each field is the direct parent of the one before it. When the tool is
/// not nested as deep as expected the chain bottoms out at the filesystem
/// root and the remaining values repeat it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLocation {
    pub module_path: PathBuf,
    pub tool_root: PathBuf,
    pub utils_root: PathBuf,
    pub project_root: PathBuf,
}

impl ModuleLocation {
    /// Derive the chain from the path of the tool's source file.
    pub fn from_file(module_file: &Path) -> Self {
        let module_path = module_dir(module_file);
        let tool_root = parent_or_self(&module_path);
        let utils_root = parent_or_self(&tool_root);
        let project_root = parent_or_self(&utils_root);

        Self { module_path, tool_root, utils_root, project_root }
    }
}

/// Parent of `path`, or `path` itself when it has none (the filesystem root).
pub fn parent_or_self(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_else(|| path.to_path_buf())
}

/// Absolute, lexically normalized directory holding `file`.
fn module_dir(file: &Path) -> PathBuf {
    let dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        Some(_) => Path::new("."),
        None => file,
    };
    let absolute = std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf());
    normalize_lexically(&absolute)
}

/// Fold `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
