//! Battery readings and icon selection
//!
//! The battery service only reports a percentage and two flags. A watch
//! sitting on its charger at 100% reports "plugged, not charging", which on
//! its own looks identical to "charging", so that state blinks between the
//! charging and empty glyphs instead.

use crate::glyph::BatteryIcon;

/// Battery state as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryReading {
    /// State of charge (0-100)
    pub charge_percent: u8,
    /// External power connected
    pub is_plugged: bool,
    /// Charger actively charging
    pub is_charging: bool,
}

impl BatteryReading {
    pub const fn unplugged(charge_percent: u8) -> Self {
        Self {
            charge_percent,
            is_plugged: false,
            is_charging: false,
        }
    }

    pub const fn charging(charge_percent: u8) -> Self {
        Self {
            charge_percent,
            is_plugged: true,
            is_charging: true,
        }
    }

    /// On the charger but not charging (topped off)
    pub const fn topped_off(charge_percent: u8) -> Self {
        Self {
            charge_percent,
            is_plugged: true,
            is_charging: false,
        }
    }

    pub fn power_state(&self) -> PowerState {
        match (self.is_plugged, self.is_charging) {
            (false, _) => PowerState::Unplugged,
            (true, true) => PowerState::PluggedCharging,
            (true, false) => PowerState::PluggedNotCharging,
        }
    }
}

/// Power source state derived from a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    Unplugged,
    PluggedCharging,
    PluggedNotCharging,
}

/// Estimate the state of charge of a single Li-ion cell from its voltage
pub fn percent_from_millivolts(millivolts: u16) -> u8 {
    (match millivolts {
        0..=3449 => 0,
        3450..=3699 => (millivolts - 3450) / 5,
        3700..=4199 => 50 + (millivolts - 3700) / 10,
        _ => 100,
    }) as u8
}

/// Battery icon selector
///
/// Holds the blink toggle, which persists across readings.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryIndicator {
    blink_on: bool,
}

impl BatteryIndicator {
    pub const fn new() -> Self {
        Self { blink_on: false }
    }

    /// Pick the glyph for a reading
    ///
    /// Every call while plugged and not charging flips the blink toggle;
    /// the first such call shows the charging glyph.
    pub fn select(&mut self, reading: &BatteryReading) -> BatteryIcon {
        match reading.power_state() {
            PowerState::Unplugged => BatteryIcon::from_percent(reading.charge_percent),
            PowerState::PluggedCharging => BatteryIcon::CHARGING,
            PowerState::PluggedNotCharging => {
                self.blink_on = !self.blink_on;
                if self.blink_on {
                    BatteryIcon::CHARGING
                } else {
                    BatteryIcon::EMPTY
                }
            }
        }
    }

    /// Current blink phase
    pub fn blink_on(&self) -> bool {
        self.blink_on
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unplugged_levels() {
        let mut indicator = BatteryIndicator::new();
        assert_eq!(indicator.select(&BatteryReading::unplugged(55)).index(), 5);
        assert_eq!(indicator.select(&BatteryReading::unplugged(100)).index(), 10);
        assert_eq!(indicator.select(&BatteryReading::unplugged(9)).index(), 0);
    }

    #[test]
    fn test_charging_ignores_percent() {
        let mut indicator = BatteryIndicator::new();
        for percent in [0, 37, 100] {
            assert_eq!(
                indicator.select(&BatteryReading::charging(percent)),
                BatteryIcon::CHARGING
            );
        }
    }

    #[test]
    fn test_topped_off_blinks() {
        let mut indicator = BatteryIndicator::new();
        let reading = BatteryReading::topped_off(100);
        let icons: [u8; 4] = core::array::from_fn(|_| indicator.select(&reading).index());
        assert_eq!(icons, [11, 0, 11, 0]);
    }

    #[test]
    fn test_blink_phase_survives_other_states() {
        let mut indicator = BatteryIndicator::new();
        indicator.select(&BatteryReading::topped_off(100));
        indicator.select(&BatteryReading::unplugged(80));
        indicator.select(&BatteryReading::charging(80));
        assert_eq!(
            indicator.select(&BatteryReading::topped_off(100)),
            BatteryIcon::EMPTY
        );
    }

    #[test]
    fn test_power_state() {
        assert_eq!(BatteryReading::unplugged(10).power_state(), PowerState::Unplugged);
        assert_eq!(BatteryReading::charging(10).power_state(), PowerState::PluggedCharging);
        assert_eq!(
            BatteryReading::topped_off(10).power_state(),
            PowerState::PluggedNotCharging
        );
        // Charging flag without power is treated as unplugged
        let odd = BatteryReading {
            charge_percent: 40,
            is_plugged: false,
            is_charging: true,
        };
        assert_eq!(odd.power_state(), PowerState::Unplugged);
    }

    #[test]
    fn test_percent_from_millivolts() {
        assert_eq!(percent_from_millivolts(3000), 0);
        assert_eq!(percent_from_millivolts(3449), 0);
        assert_eq!(percent_from_millivolts(3450), 0);
        assert_eq!(percent_from_millivolts(3695), 49);
        assert_eq!(percent_from_millivolts(3700), 50);
        assert_eq!(percent_from_millivolts(4199), 99);
        assert_eq!(percent_from_millivolts(4200), 100);
        assert_eq!(percent_from_millivolts(5000), 100);
    }

    proptest! {
        #[test]
        fn prop_unplugged_icon_in_range(percent in 0u8..=255) {
            let mut indicator = BatteryIndicator::new();
            let icon = indicator.select(&BatteryReading::unplugged(percent));
            prop_assert!(icon.index() <= 10);
            if percent <= 100 {
                prop_assert_eq!(icon.index(), percent / 10);
            }
        }

        #[test]
        fn prop_percent_monotonic(a in 0u16..6000, b in 0u16..6000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(percent_from_millivolts(lo) <= percent_from_millivolts(hi));
            prop_assert!(percent_from_millivolts(hi) <= 100);
        }
    }
}
