//! Event handler trait

use crate::battery::BatteryReading;
use crate::clock::TimeReading;
use crate::events::WatchEvent;

use super::{GlyphSink, HostStatus};

/// Callbacks the host adapter invokes
///
/// The host delivers one event at a time and each handler runs to
/// completion before the next one, so implementations need no locking.
pub trait WatchHandler {
    /// Second tick with the current wall-clock time
    fn on_tick<H: HostStatus, S: GlyphSink>(&mut self, time: &TimeReading, host: &H, sink: &mut S);

    /// Battery percentage or power state changed
    fn on_battery<S: GlyphSink>(&mut self, reading: BatteryReading, sink: &mut S);

    /// Phone link came up or went down
    fn on_connectivity<S: GlyphSink>(&mut self, connected: bool, sink: &mut S);

    /// Dispatch a queued event to the matching handler
    fn handle<H: HostStatus, S: GlyphSink>(&mut self, event: WatchEvent, host: &H, sink: &mut S) {
        match event {
            WatchEvent::Tick(time) => self.on_tick(&time, host, sink),
            WatchEvent::Battery(reading) => self.on_battery(reading, sink),
            WatchEvent::Connectivity(connected) => self.on_connectivity(connected, sink),
        }
    }
}
