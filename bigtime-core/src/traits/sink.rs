//! Glyph output trait

use crate::glyph::{BatteryIcon, ConnectionIcon, Digit, GlyphSize};

/// Receiver of visual selections
///
/// Each call is a request for the host to swap what one screen region
/// shows. Requests are fire-and-forget; the model has no recovery path for
/// a failed redraw, so implementations handle their own failures.
pub trait GlyphSink {
    /// Show a digit glyph in a slot (0-5)
    fn show_digit(&mut self, slot: usize, size: GlyphSize, digit: Digit);

    /// Remove whatever glyph a slot is showing
    fn clear_slot(&mut self, slot: usize);

    /// Swap the battery glyph
    fn show_battery(&mut self, icon: BatteryIcon);

    /// Swap the connection glyph
    fn show_connection(&mut self, icon: ConnectionIcon);

    /// Replace the status (date) text
    fn show_status_text(&mut self, text: &str);
}

/// Discards every request
///
/// Useful for driving the model without a screen, e.g. to warm up state.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl GlyphSink for NullSink {
    fn show_digit(&mut self, _slot: usize, _size: GlyphSize, _digit: Digit) {}
    fn clear_slot(&mut self, _slot: usize) {}
    fn show_battery(&mut self, _icon: BatteryIcon) {}
    fn show_connection(&mut self, _icon: ConnectionIcon) {}
    fn show_status_text(&mut self, _text: &str) {}
}

impl<T: GlyphSink + ?Sized> GlyphSink for &mut T {
    fn show_digit(&mut self, slot: usize, size: GlyphSize, digit: Digit) {
        (**self).show_digit(slot, size, digit)
    }

    fn clear_slot(&mut self, slot: usize) {
        (**self).clear_slot(slot)
    }

    fn show_battery(&mut self, icon: BatteryIcon) {
        (**self).show_battery(icon)
    }

    fn show_connection(&mut self, icon: ConnectionIcon) {
        (**self).show_connection(icon)
    }

    fn show_status_text(&mut self, text: &str) {
        (**self).show_status_text(text)
    }
}

/// Recording sink for tests
#[cfg(test)]
pub mod recording {
    use super::*;
    use heapless::{String, Vec};

    /// One recorded request
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Request {
        Digit(usize, GlyphSize, u8),
        Clear(usize),
        Battery(u8),
        Connection(u8),
        Status(String<32>),
    }

    /// Sink that remembers every request in order
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub requests: Vec<Request, 64>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn status_texts(&self) -> impl Iterator<Item = &str> {
            self.requests.iter().filter_map(|r| match r {
                Request::Status(text) => Some(text.as_str()),
                _ => None,
            })
        }

        pub fn battery_icons(&self) -> impl Iterator<Item = u8> + '_ {
            self.requests.iter().filter_map(|r| match r {
                Request::Battery(icon) => Some(*icon),
                _ => None,
            })
        }

        pub fn clear(&mut self) {
            self.requests.clear();
        }
    }

    impl GlyphSink for RecordingSink {
        fn show_digit(&mut self, slot: usize, size: GlyphSize, digit: Digit) {
            let _ = self.requests.push(Request::Digit(slot, size, digit.value()));
        }

        fn clear_slot(&mut self, slot: usize) {
            let _ = self.requests.push(Request::Clear(slot));
        }

        fn show_battery(&mut self, icon: BatteryIcon) {
            let _ = self.requests.push(Request::Battery(icon.index()));
        }

        fn show_connection(&mut self, icon: ConnectionIcon) {
            let _ = self.requests.push(Request::Connection(icon.index()));
        }

        fn show_status_text(&mut self, text: &str) {
            let mut owned = String::new();
            let _ = owned.push_str(text);
            let _ = self.requests.push(Request::Status(owned));
        }
    }
}
