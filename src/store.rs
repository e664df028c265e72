// StateStore - owns the live CalibrationState and loads it from disk
//
// Load failures are deliberately silent in the default entry point: the
// host treats the calibration file as optional and keeps running on
// whatever values it already has. try_load exposes the same operation
// with a diagnostic result for callers that want one; the two paths are
// otherwise identical.

use std::fs;
use std::path::Path;

use crate::calibration::{scan_into, CalibrationState, ScanReport};
use crate::error::{log_load_error, LoadError};

/// Holds the single calibration record and populates it from the file
#[derive(Debug, Default)]
pub struct StateStore {
    state: CalibrationState,
}

impl StateStore {
    /// Store with the all-zero initial record
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the calibration file, ignoring every failure
    ///
    /// Missing or unreadable files leave the state untouched; malformed
    /// content updates the fields matched before the mismatch and keeps
    /// the rest. Nothing is surfaced to the caller either way, so a
    /// missing file and a fully parsed one are indistinguishable here.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) {
        match self.try_load(&path) {
            Ok(report) if report.is_complete() => {
                log::debug!(
                    "[StateStore] Loaded calibration from {:?}",
                    path.as_ref()
                );
            }
            Ok(report) => {
                log::warn!(
                    "[StateStore] Partial calibration load from {:?}: {} of 4 fields applied",
                    path.as_ref(),
                    report.fields_applied
                );
            }
            Err(err) => {
                log_load_error(&err, "load");
            }
        }
    }

    /// Load the calibration file with a diagnostic result
    ///
    /// # Returns
    /// * `Ok(ScanReport)` - File was read; the report says how many fields matched
    /// * `Err(LoadError::Io)` - File could not be read; state untouched
    ///
    /// Partial scans are `Ok` with `fields_applied < 4`, matching the
    /// partial-update contract of the silent path.
    pub fn try_load<P: AsRef<Path>>(&mut self, path: P) -> Result<ScanReport, LoadError> {
        let path = path.as_ref();
        // Raw bytes, not a String: trailing content after the template
        // is ignored and does not have to be valid UTF-8.
        let contents = fs::read(path).map_err(|err| LoadError::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;

        Ok(scan_into(&contents, &mut self.state))
    }

    /// Borrow the live record
    ///
    /// No copy is made; values observed here change across `load` calls.
    /// The store is single-threaded by design - callers that introduce
    /// threads must wrap it in their own lock.
    pub fn get(&self) -> &CalibrationState {
        &self.state
    }
}
