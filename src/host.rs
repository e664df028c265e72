// CalibrationHost - update-loop integration for the bridge
//
// The embedding game calls tick() once per update. The host loads the
// calibration file at construction and again every reload_every_n_ticks
// ticks, so edits to the file show up in a running game without a
// restart. With a cadence of 0 the startup load is the only one.

use crate::calibration::CalibrationState;
use crate::config::BridgeConfig;
use crate::store::StateStore;

/// Owns the store and drives reloads on the configured cadence
#[derive(Debug)]
pub struct CalibrationHost {
    store: StateStore,
    config: BridgeConfig,
    tick_count: u64,
}

impl CalibrationHost {
    /// Build a host from config and perform the startup load
    pub fn new(config: BridgeConfig) -> Self {
        let mut store = StateStore::new();
        store.load(&config.calibration_path);
        Self {
            store,
            config,
            tick_count: 0,
        }
    }

    /// Advance one update tick and return the current record
    ///
    /// Reloads the calibration file whenever the tick counter reaches a
    /// multiple of the configured cadence. Reload failures follow the
    /// store's silent policy, so the returned reference is always valid.
    pub fn tick(&mut self) -> &CalibrationState {
        self.tick_count += 1;
        let cadence = self.config.reload_every_n_ticks;
        if cadence > 0 && self.tick_count % cadence == 0 {
            self.store.load(&self.config.calibration_path);
        }
        self.store.get()
    }

    /// Number of ticks processed so far
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Mutable store access for hosts that drive loads themselves
    pub fn store_mut(&mut self) -> &mut StateStore {
        &mut self.store
    }
}
