//! Shared testing utilities for build-dori CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated source tree laid out the way a Greatdori checkout nests the tool:
/// `<root>/src-root/Greatdori/utils/build-dori/src/lib.rs`.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create the directory chain without the checkout's project marker.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let ctx = Self { root };
        fs::create_dir_all(ctx.module_path()).expect("Failed to create module directory");
        fs::write(ctx.module_file(), "").expect("Failed to write module file");
        ctx
    }

    /// Create the directory chain and mark the project as a checkout.
    pub fn with_checkout() -> Self {
        let ctx = Self::new();
        ctx.mark_checkout();
        ctx
    }

    pub fn source_root(&self) -> PathBuf {
        self.root.path().join("src-root")
    }

    pub fn project_root(&self) -> PathBuf {
        self.source_root().join("Greatdori")
    }

    pub fn utils_root(&self) -> PathBuf {
        self.project_root().join("utils")
    }

    pub fn tool_root(&self) -> PathBuf {
        self.utils_root().join("build-dori")
    }

    pub fn module_path(&self) -> PathBuf {
        self.tool_root().join("src")
    }

    pub fn module_file(&self) -> PathBuf {
        self.module_path().join("lib.rs")
    }

    /// Add `Greatdori.xcodeproj` under the project root.
    pub fn mark_checkout(&self) {
        fs::create_dir_all(self.project_root().join("Greatdori.xcodeproj"))
            .expect("Failed to create project marker");
    }

    /// Build a command for the compiled binary resolving from this tree,
    /// with no overrides inherited from the outer environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("build-dori").expect("Failed to locate build-dori binary");
        cmd.current_dir(self.root.path())
            .env_remove("DORI_SOURCE_ROOT")
            .env_remove("DORI_REPO_NAME")
            .env_remove("RUST_LOG")
            .arg("--from")
            .arg(self.module_file());
        cmd
    }

    /// Scratch directory outside the checkout tree.
    pub fn scratch(&self, name: &str) -> PathBuf {
        let dir = self.root.path().join("scratch").join(name);
        fs::create_dir_all(&dir).expect("Failed to create scratch directory");
        dir
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }
}
