//! Environment override snapshot.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// Overrides the derived source root when present.
pub const SOURCE_ROOT_ENV: &str = "DORI_SOURCE_ROOT";

/// Overrides the derived repo name when present.
pub const REPO_NAME_ENV: &str = "DORI_REPO_NAME";

/// Owned key/value snapshot of environment variables.
///
/// Taken once and never refreshed: later changes to the process environment
/// are not visible through an existing snapshot. Values are kept as raw OS
/// strings, so a path override that is not valid UTF-8 survives intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    vars: BTreeMap<String, OsString>,
}

impl EnvOverrides {
    /// A snapshot with no variables set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Capture the live process environment.
    ///
    /// Entries whose name is not valid UTF-8 are skipped; values are kept as-is.
    pub fn from_process_env() -> Self {
        let mut vars = BTreeMap::new();
        for (key, value) in std::env::vars_os() {
            match key.into_string() {
                Ok(key) => {
                    vars.insert(key, value);
                }
                Err(key) => {
                    log::debug!(
                        "Skipping environment variable {}: name is not UTF-8",
                        key.to_string_lossy()
                    );
                }
            }
        }
        Self { vars }
    }

    pub fn get(&self, key: &str) -> Option<&OsStr> {
        self.vars.get(key).map(OsString::as_os_str)
    }

    /// Value of `DORI_SOURCE_ROOT`, verbatim.
    pub fn source_root(&self) -> Option<&OsStr> {
        self.get(SOURCE_ROOT_ENV)
    }

    /// Value of `DORI_REPO_NAME`, verbatim.
    pub fn repo_name(&self) -> Option<&OsStr> {
        self.get(REPO_NAME_ENV)
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<OsString>> FromIterator<(K, V)> for EnvOverrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}
