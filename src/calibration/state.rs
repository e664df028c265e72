// CalibrationState - the tunable parameter record shared with the host
//
// The host update loop reads these values every frame; the bridge
// overwrites them whenever the calibration file is (re)loaded. Fields
// start at zero and keep their last value when a load stops partway.
//
// No ranges are enforced here: whatever numbers the file carries are
// taken as-is, including physically meaningless ones.

use serde::{Deserialize, Serialize};

/// The four calibration parameters driven by the calibration file
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalibrationState {
    /// Instability coefficient fed into the tension solver
    pub instability: f64,
    /// Saturation ceiling for accumulated tension
    pub saturation: f64,
    /// Resistance (damping) term; negative values are accepted as-is
    pub resistance: f64,
    /// Counter stamped by whatever produced the file (version or tick)
    pub epoch: u64,
}

impl CalibrationState {
    /// All-zero record, the state before any successful load
    pub fn new() -> Self {
        Self::default()
    }
}
