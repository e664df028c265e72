// Instability Bridge - calibration loader for the tension simulation host
// Fixed-format calibration file -> in-memory CalibrationState record

// Module declarations
pub mod calibration;
pub mod config;
pub mod error;
pub mod host;
pub mod store;

// Re-exports for convenience
pub use calibration::{CalibrationState, ScanReport};
pub use config::BridgeConfig;
pub use error::LoadError;
pub use host::CalibrationHost;
pub use store::StateStore;

/// Initialize logging for binaries and ad-hoc harnesses
pub fn init_logging() {
    env_logger::init();
}
