use std::path::Path;

use crate::ports::PathProbe;

/// Probes the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemProbe;

impl FilesystemProbe {
    pub fn new() -> Self {
        Self
    }
}

impl PathProbe for FilesystemProbe {
    fn exists(&self, path: &Path) -> bool {
        match path.try_exists() {
            Ok(exists) => exists,
            Err(err) => {
                log::debug!("Treating {} as absent: {}", path.display(), err);
                false
            }
        }
    }
}
