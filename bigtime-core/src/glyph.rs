//! Glyph identifiers
//!
//! Every visual selection the watch face makes is one of a fixed palette of
//! pre-rendered images owned by the host. These types make the palette
//! bounds part of the type, so an out-of-range index cannot be produced.

/// Number of digit glyphs per size
pub const DIGIT_GLYPHS: usize = 10;

/// Number of battery glyphs (0%..100% in tens, plus charging)
pub const BATTERY_GLYPHS: usize = 12;

/// Number of connection glyphs
pub const CONNECTION_GLYPHS: usize = 2;

/// A single decimal digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    /// Create a digit, rejecting values above 9
    pub const fn new(value: u8) -> Option<Self> {
        if value < 10 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Ones digit of an arbitrary value
    pub const fn ones_of(value: u16) -> Self {
        Self((value % 10) as u8)
    }

    /// Glyph index / numeric value
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Glyph size used by a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphSize {
    /// 38x62 digit, a quarter of the display
    Large,
    /// 12x20 digit
    Small,
}

impl GlyphSize {
    /// Wire value
    pub fn to_byte(self) -> u8 {
        match self {
            GlyphSize::Large => 0,
            GlyphSize::Small => 1,
        }
    }
}

/// Battery glyph index (0-11)
///
/// Indices 0..=10 are charge levels in steps of ten percent, 11 is the
/// charging glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryIcon(u8);

impl BatteryIcon {
    pub const EMPTY: BatteryIcon = BatteryIcon(0);
    pub const FULL: BatteryIcon = BatteryIcon(10);
    pub const CHARGING: BatteryIcon = BatteryIcon(11);

    /// Charge level glyph for a percentage, saturating at 100%
    pub fn from_percent(percent: u8) -> Self {
        Self(percent.min(100) / 10)
    }

    /// Create from a raw glyph index
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < BATTERY_GLYPHS {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Connection glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionIcon {
    Connected,
    Disconnected,
}

impl ConnectionIcon {
    pub const fn index(self) -> u8 {
        match self {
            ConnectionIcon::Connected => 0,
            ConnectionIcon::Disconnected => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_bounds() {
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::ones_of(1234).value(), 4);
    }

    #[test]
    fn test_battery_icon_bounds() {
        assert_eq!(BatteryIcon::from_percent(0), BatteryIcon::EMPTY);
        assert_eq!(BatteryIcon::from_percent(100), BatteryIcon::FULL);
        assert_eq!(BatteryIcon::from_percent(250), BatteryIcon::FULL);
        assert_eq!(BatteryIcon::from_index(11), Some(BatteryIcon::CHARGING));
        assert_eq!(BatteryIcon::from_index(12), None);
    }

    #[test]
    fn test_connection_icon_index() {
        assert_eq!(ConnectionIcon::Connected.index(), 0);
        assert_eq!(ConnectionIcon::Disconnected.index(), 1);
    }
}
