// Calibration module - state record and fixed-format file scanning
//
// This module provides two main components:
// 1. CalibrationState: the four tunable parameters read by the host loop
// 2. scan: the fixed-format scanner that fills the record from file text
//
// The scanner is deliberately not a JSON parser: it matches one exact
// template, field by field, and updates a prefix of the record when the
// input stops matching partway through.

pub mod scan;
pub mod state;

pub use scan::{scan_into, ScanReport};
pub use state::CalibrationState;
