//! Host status backed by the firmware's shared readings

use core::sync::atomic::Ordering;

use bigtime_core::battery::BatteryReading;
use bigtime_core::HostStatus;

use crate::channels::{BATTERY_STATE, LINK_UP};

/// Peeks the latest readings published by the battery and link tasks
#[derive(Clone, Copy)]
pub struct FirmwareHost {
    /// The board has no phone-side preference, so it is fixed at build time
    pub prefers_24h: bool,
}

impl HostStatus for FirmwareHost {
    fn battery_state(&self) -> BatteryReading {
        BATTERY_STATE.lock(|state| state.get())
    }

    fn is_connected(&self) -> bool {
        LINK_UP.load(Ordering::Relaxed)
    }

    fn prefers_24h(&self) -> bool {
        self.prefers_24h
    }
}
