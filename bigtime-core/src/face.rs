//! Watch face state
//!
//! [`WatchFace`] owns everything the face remembers between events: slot
//! contents, the battery blink toggle, the cached date text and the last
//! icons shown. The host creates one at startup and feeds it events until
//! shutdown.

use crate::battery::{BatteryIndicator, BatteryReading};
use crate::clock::{display_hour, TimeReading};
use crate::config::WatchConfig;
use crate::connection::connection_icon;
use crate::date::{DateCache, Locale};
use crate::glyph::{BatteryIcon, ConnectionIcon, Digit};
use crate::slots::{Row, SlotAssignment, SlotValue, SLOT_COUNT};
use crate::traits::{GlyphSink, HostStatus, WatchHandler};

/// Display state model
#[derive(Debug, Clone)]
pub struct WatchFace {
    config: WatchConfig,
    slots: SlotAssignment,
    battery: BatteryIndicator,
    date: DateCache,
    battery_icon: Option<BatteryIcon>,
    connection_icon: Option<ConnectionIcon>,
}

impl WatchFace {
    /// Create a face with every slot EMPTY and no icons chosen
    pub fn new(config: WatchConfig) -> Self {
        Self {
            config,
            slots: SlotAssignment::new(),
            battery: BatteryIndicator::new(),
            date: DateCache::new(),
            battery_icon: None,
            connection_icon: None,
        }
    }

    /// Startup sequence
    ///
    /// Fills every slot with zero and shows placeholder icons, then renders
    /// the current time and link state so the first frame is complete.
    pub fn start<H: HostStatus, S: GlyphSink>(&mut self, host: &H, now: &TimeReading, sink: &mut S) {
        for slot in 0..SLOT_COUNT {
            self.slots.load_digit(slot, Digit::ZERO, sink);
        }
        self.set_battery_icon(BatteryIcon::EMPTY, sink);
        self.set_connection_icon(ConnectionIcon::Connected, sink);

        self.on_tick(now, host, sink);
        self.on_connectivity(host.is_connected(), sink);
    }

    /// Re-send the complete current state
    ///
    /// Used when the renderer lost its screen contents.
    pub fn replay<S: GlyphSink>(&self, sink: &mut S) {
        self.slots.replay(sink);
        if let Some(icon) = self.battery_icon {
            sink.show_battery(icon);
        }
        if let Some(icon) = self.connection_icon {
            sink.show_connection(icon);
        }
        if self.date.cached_day().is_some() {
            sink.show_status_text(self.date.text());
        }
    }

    /// Switch the date language; the text is rebuilt on the next tick
    pub fn set_locale(&mut self, locale: Locale) {
        if self.config.locale != locale {
            self.config.locale = locale;
            self.date.invalidate();
        }
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// Content of one slot
    pub fn slot(&self, slot: usize) -> SlotValue {
        self.slots.get(slot)
    }

    pub fn slots(&self) -> &SlotAssignment {
        &self.slots
    }

    /// Battery glyph currently shown
    pub fn battery_icon(&self) -> Option<BatteryIcon> {
        self.battery_icon
    }

    /// Connection glyph currently shown
    pub fn connection_icon(&self) -> Option<ConnectionIcon> {
        self.connection_icon
    }

    /// Current status text (empty before the first tick)
    pub fn date_text(&self) -> &str {
        self.date.text()
    }

    fn set_battery_icon<S: GlyphSink>(&mut self, icon: BatteryIcon, sink: &mut S) {
        self.battery_icon = Some(icon);
        sink.show_battery(icon);
    }

    fn set_connection_icon<S: GlyphSink>(&mut self, icon: ConnectionIcon, sink: &mut S) {
        self.connection_icon = Some(icon);
        sink.show_connection(icon);
    }
}

impl WatchHandler for WatchFace {
    fn on_tick<H: HostStatus, S: GlyphSink>(&mut self, time: &TimeReading, host: &H, sink: &mut S) {
        if let Some(text) = self.date.update(time, self.config.locale) {
            #[cfg(feature = "defmt")]
            defmt::debug!("Date changed to day {}", time.day);
            sink.show_status_text(text);
        }

        let format = self.config.hour_format.resolve(host.prefers_24h());
        let zeros = self.config.leading_zeros;
        let hour = display_hour(time.hour, format);

        self.slots
            .display_value(u16::from(hour), Row::Hours, zeros.hours, sink);
        self.slots
            .display_value(u16::from(time.minute), Row::Minutes, zeros.minutes, sink);
        self.slots
            .display_value(u16::from(time.second), Row::Seconds, zeros.seconds, sink);

        // Peeked every tick so the topped-off blink keeps running
        self.on_battery(host.battery_state(), sink);
    }

    fn on_battery<S: GlyphSink>(&mut self, reading: BatteryReading, sink: &mut S) {
        let icon = self.battery.select(&reading);
        self.set_battery_icon(icon, sink);
    }

    fn on_connectivity<S: GlyphSink>(&mut self, connected: bool, sink: &mut S) {
        self.set_connection_icon(connection_icon(connected), sink);
    }
}
