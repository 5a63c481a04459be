//! Checkout signature.
//!
//! A directory is treated as a Greatdori checkout when both marker entries
//! sit directly under it. This is a naive existence check; nothing is read.

use std::path::Path;

use crate::ports::PathProbe;

/// Subdirectory every checkout carries.
pub const UTILS_DIR: &str = "utils";

/// Xcode project entry every checkout carries.
pub const PROJECT_MARKER: &str = "Greatdori.xcodeproj";

/// Verdict of matching a directory against the checkout signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStatus {
    Valid,
    MissingUtils,
    MissingProjectMarker,
}

impl CheckoutStatus {
    pub fn is_valid(self) -> bool {
        matches!(self, CheckoutStatus::Valid)
    }

    /// Name of the first marker that was not found.
    pub fn missing_entry(self) -> Option<&'static str> {
        match self {
            CheckoutStatus::Valid => None,
            CheckoutStatus::MissingUtils => Some(UTILS_DIR),
            CheckoutStatus::MissingProjectMarker => Some(PROJECT_MARKER),
        }
    }
}

/// Match `candidate` against the checkout signature.
///
/// `utils` is probed first; the project marker is only probed when it exists.
pub fn inspect_checkout(probe: &(impl PathProbe + ?Sized), candidate: &Path) -> CheckoutStatus {
    if !probe.exists(&candidate.join(UTILS_DIR)) {
        log::debug!("{} has no {UTILS_DIR} entry", candidate.display());
        return CheckoutStatus::MissingUtils;
    }

    if !probe.exists(&candidate.join(PROJECT_MARKER)) {
        log::debug!("{} has no {PROJECT_MARKER} entry", candidate.display());
        return CheckoutStatus::MissingProjectMarker;
    }

    CheckoutStatus::Valid
}

/// Returns true if `candidate` looks like a Greatdori checkout.
pub fn is_checkout(probe: &(impl PathProbe + ?Sized), candidate: &Path) -> bool {
    inspect_checkout(probe, candidate).is_valid()
}
