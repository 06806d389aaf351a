//! Configuration type definitions

use crate::clock::HourFormat;
use crate::date::Locale;
use crate::slots::Row;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the 12/24-hour choice comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HourFormatSetting {
    /// Ask the host on every tick
    #[default]
    FollowHost,
    /// Always use this format
    Fixed(HourFormat),
}

impl HourFormatSetting {
    /// Effective format given the host's current preference
    pub fn resolve(self, host_prefers_24h: bool) -> HourFormat {
        match self {
            HourFormatSetting::FollowHost => HourFormat::from_24h_preference(host_prefers_24h),
            HourFormatSetting::Fixed(format) => format,
        }
    }

    /// Parse a config value ("host", "12h", "24h")
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "host" => Some(HourFormatSetting::FollowHost),
            "12h" => Some(HourFormatSetting::Fixed(HourFormat::TwelveHour)),
            "24h" => Some(HourFormatSetting::Fixed(HourFormat::TwentyFourHour)),
            _ => None,
        }
    }
}

/// Per-row leading zero policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LeadingZeros {
    pub hours: bool,
    pub minutes: bool,
    pub seconds: bool,
}

impl Default for LeadingZeros {
    fn default() -> Self {
        Self {
            hours: true,
            minutes: true,
            seconds: true,
        }
    }
}

impl LeadingZeros {
    pub fn for_row(&self, row: Row) -> bool {
        match row {
            Row::Hours => self.hours,
            Row::Minutes => self.minutes,
            Row::Seconds => self.seconds,
        }
    }
}

/// Watch face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WatchConfig {
    /// 12/24-hour selection
    pub hour_format: HourFormatSetting,
    /// Leading zero policy per row
    pub leading_zeros: LeadingZeros,
    /// Weekday/month name language
    pub locale: Locale,
}
