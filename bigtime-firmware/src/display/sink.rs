//! Glyph sink that queues renderer commands
//!
//! The face task runs its handlers synchronously, so requests are pushed
//! with `try_send` and the display TX task frames them for the UART.

use defmt::*;

use bigtime_core::glyph::{BatteryIcon, ConnectionIcon, Digit, GlyphSize};
use bigtime_core::GlyphSink;
use bigtime_protocol::WatchMessage;

use crate::channels::COMMAND_CHANNEL;

/// Sink feeding [`COMMAND_CHANNEL`]
pub struct ChannelSink;

impl ChannelSink {
    /// Queue a command, dropping it if the TX task has fallen behind
    pub fn send(&mut self, msg: WatchMessage) {
        if COMMAND_CHANNEL.try_send(msg).is_err() {
            warn!("Command channel full, dropping command");
        }
    }
}

impl GlyphSink for ChannelSink {
    fn show_digit(&mut self, slot: usize, size: GlyphSize, digit: Digit) {
        self.send(WatchMessage::Digit {
            slot: slot as u8,
            size: size.to_byte(),
            digit: digit.value(),
        });
    }

    fn clear_slot(&mut self, slot: usize) {
        self.send(WatchMessage::ClearSlot { slot: slot as u8 });
    }

    fn show_battery(&mut self, icon: BatteryIcon) {
        self.send(WatchMessage::Battery { icon: icon.index() });
    }

    fn show_connection(&mut self, icon: ConnectionIcon) {
        self.send(WatchMessage::Connection { icon: icon.index() });
    }

    fn show_status_text(&mut self, text: &str) {
        trace!("Status text: {}", text);
        self.send(WatchMessage::status(text));
    }
}
