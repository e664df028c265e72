// Error types for the calibration bridge
//
// The default load path swallows these by policy; they only reach
// callers through StateStore::try_load and the calib-dump binary.

use std::fmt;

/// Errors surfaced by the diagnostic load path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Calibration file could not be opened or read; state untouched
    Io { path: String, reason: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, reason } => {
                write!(f, "Failed to read calibration file {}: {}", path, reason)
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Log a load error with the operation it interrupted
pub fn log_load_error(err: &LoadError, context: &str) {
    log::warn!("[StateStore] {}: {}", context, err);
}
