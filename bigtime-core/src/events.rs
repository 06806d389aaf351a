//! Events delivered by the host

use crate::battery::BatteryReading;
use crate::clock::TimeReading;

/// Events that drive the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchEvent {
    /// One-second tick with the current time
    Tick(TimeReading),
    /// Battery percentage or power state changed
    Battery(BatteryReading),
    /// Phone link state changed
    Connectivity(bool),
}

impl WatchEvent {
    /// Check if this event comes from the clock
    pub fn is_tick(&self) -> bool {
        matches!(self, WatchEvent::Tick(_))
    }

    /// Check if this event only affects a status icon
    pub fn is_status_event(&self) -> bool {
        matches!(self, WatchEvent::Battery(_) | WatchEvent::Connectivity(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_classes() {
        assert!(WatchEvent::Tick(TimeReading::hms(1, 2, 3)).is_tick());
        assert!(!WatchEvent::Connectivity(true).is_tick());
        assert!(WatchEvent::Battery(BatteryReading::unplugged(50)).is_status_event());
        assert!(WatchEvent::Connectivity(false).is_status_event());
        assert!(!WatchEvent::Tick(TimeReading::hms(1, 2, 3)).is_status_event());
    }
}
