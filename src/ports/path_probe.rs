//! Filesystem existence probing.
//!
//! The checkout signature is a plain existence test, so this port exposes
//! nothing beyond "is there an entry at this path". Files and directories are
//! not distinguished.

use std::path::Path;

/// Port for answering existence queries against a filesystem.
pub trait PathProbe {
    /// Check whether a file or directory exists at `path`.
    ///
    /// Implementations must report an inconclusive probe (permission denied,
    /// I/O failure) as `false` rather than failing.
    fn exists(&self, path: &Path) -> bool;
}

impl<P: PathProbe + ?Sized> PathProbe for &P {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
