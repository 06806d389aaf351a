//! Digit slots and decimal decomposition
//!
//! The face has six fixed slots. Rows of two slots hold the hours, minutes
//! and seconds; the tens digit of a row sits in the left slot
//! (`row * 2`) and the ones digit in the right slot (`row * 2 + 1`).

use crate::glyph::{Digit, GlyphSize};
use crate::traits::GlyphSink;

/// Total number of digit slots
pub const SLOT_COUNT: usize = 6;

/// Slots from this index on use small glyphs
pub const FIRST_SMALL_SLOT: usize = 4;

/// Content of one slot; `None` is the EMPTY sentinel (nothing shown)
pub type SlotValue = Option<Digit>;

/// A row of two slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Row {
    Hours = 0,
    Minutes = 1,
    Seconds = 2,
}

impl Row {
    pub const ALL: [Row; 3] = [Row::Hours, Row::Minutes, Row::Seconds];

    /// Slot holding the tens digit
    pub const fn tens_slot(self) -> usize {
        self as usize * 2
    }

    /// Slot holding the ones digit
    pub const fn ones_slot(self) -> usize {
        self as usize * 2 + 1
    }
}

/// Glyph size drawn in a slot
pub const fn slot_glyph_size(slot: usize) -> GlyphSize {
    if slot >= FIRST_SMALL_SLOT {
        GlyphSize::Small
    } else {
        GlyphSize::Large
    }
}

/// Current content of every slot
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotAssignment {
    slots: [SlotValue; SLOT_COUNT],
}

impl Default for SlotAssignment {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotAssignment {
    /// All slots EMPTY
    pub const fn new() -> Self {
        Self {
            slots: [None; SLOT_COUNT],
        }
    }

    /// Content of a slot, `None` for EMPTY or out-of-range slots
    pub fn get(&self, slot: usize) -> SlotValue {
        self.slots.get(slot).copied().flatten()
    }

    /// Digit values of all slots
    pub fn values(&self) -> [SlotValue; SLOT_COUNT] {
        self.slots
    }

    /// Put a digit in a slot and ask the host to show it
    pub fn load_digit<S: GlyphSink>(&mut self, slot: usize, digit: Digit, sink: &mut S) {
        if slot >= SLOT_COUNT {
            return;
        }
        self.slots[slot] = Some(digit);
        sink.show_digit(slot, slot_glyph_size(slot), digit);
    }

    /// Mark a slot EMPTY, clearing the screen only if a digit was shown
    pub fn clear<S: GlyphSink>(&mut self, slot: usize, sink: &mut S) {
        if let Some(value) = self.slots.get_mut(slot) {
            if value.take().is_some() {
                sink.clear_slot(slot);
            }
        }
    }

    /// Write a two-digit value into a row
    ///
    /// The value is reduced mod 100 first. A zero tens digit is only drawn
    /// when `show_leading_zero` is set; otherwise the tens slot becomes
    /// EMPTY.
    pub fn display_value<S: GlyphSink>(
        &mut self,
        value: u16,
        row: Row,
        show_leading_zero: bool,
        sink: &mut S,
    ) {
        let value = value % 100;
        let tens = Digit::ones_of(value / 10);
        let ones = Digit::ones_of(value);

        self.load_digit(row.ones_slot(), ones, sink);

        if tens == Digit::ZERO && !show_leading_zero {
            self.clear(row.tens_slot(), sink);
        } else {
            self.load_digit(row.tens_slot(), tens, sink);
        }
    }

    /// Re-send every non-empty slot
    pub fn replay<S: GlyphSink>(&self, sink: &mut S) {
        for (slot, value) in self.slots.iter().enumerate() {
            if let Some(digit) = value {
                sink.show_digit(slot, slot_glyph_size(slot), *digit);
            }
        }
    }
}
