//! Host status queries

use crate::battery::BatteryReading;

/// Current readings the host can be asked for at any time
///
/// The tick handler peeks the battery every second and the startup
/// sequence peeks the link state, so these must be cheap and non-blocking.
pub trait HostStatus {
    /// Latest battery reading
    fn battery_state(&self) -> BatteryReading;

    /// Whether the phone link is up
    fn is_connected(&self) -> bool;

    /// Whether the user prefers a 24-hour clock
    fn prefers_24h(&self) -> bool;
}

/// Fixed readings, for tests and simulators
#[derive(Debug, Clone, Copy)]
pub struct StaticHost {
    pub battery: BatteryReading,
    pub connected: bool,
    pub prefers_24h: bool,
}

impl Default for StaticHost {
    fn default() -> Self {
        Self {
            battery: BatteryReading::unplugged(100),
            connected: true,
            prefers_24h: true,
        }
    }
}

impl HostStatus for StaticHost {
    fn battery_state(&self) -> BatteryReading {
        self.battery
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn prefers_24h(&self) -> bool {
        self.prefers_24h
    }
}
