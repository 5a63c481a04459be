//! In-memory `PathProbe` for unit tests.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ports::PathProbe;

/// Answers existence queries from a fixed set of entries and records every probe.
#[derive(Clone, Debug, Default)]
pub struct MockPathProbe {
    entries: BTreeSet<PathBuf>,
    probed: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockPathProbe {
    pub fn with_entries<I, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self { entries: entries.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Paths probed so far, in order.
    pub fn probed(&self) -> Vec<PathBuf> {
        self.probed.lock().unwrap().clone()
    }
}

impl PathProbe for MockPathProbe {
    fn exists(&self, path: &Path) -> bool {
        self.probed.lock().unwrap().push(path.to_path_buf());
        self.entries.contains(path)
    }
}
