//! Wall-clock readings and hour normalization

/// Broken-down wall-clock time as delivered by the host clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeReading {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
    /// Day of month (1-31)
    pub day: u8,
    /// Day of week (0-6, 0 = Sunday)
    pub weekday: u8,
    /// Month (0-11, 0 = January)
    pub month: u8,
    /// Full year, e.g. 2024
    pub year: u16,
}

impl TimeReading {
    /// Time of day on an arbitrary date (1 January 2000, a Saturday)
    pub const fn hms(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            day: 1,
            weekday: 6,
            month: 0,
            year: 2000,
        }
    }

    /// Same time of day with a different date
    pub const fn with_date(self, year: u16, month: u8, day: u8, weekday: u8) -> Self {
        Self {
            year,
            month,
            day,
            weekday,
            ..self
        }
    }
}

/// How the hours row is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HourFormat {
    /// 1-12
    TwelveHour,
    /// 0-23
    #[default]
    TwentyFourHour,
}

impl HourFormat {
    pub fn from_24h_preference(prefers_24h: bool) -> Self {
        if prefers_24h {
            HourFormat::TwentyFourHour
        } else {
            HourFormat::TwelveHour
        }
    }
}

/// Hour value to show for a 24-hour clock reading
///
/// In 12-hour mode midnight and noon both show as 12.
pub fn display_hour(hour: u8, format: HourFormat) -> u8 {
    match format {
        HourFormat::TwentyFourHour => hour,
        HourFormat::TwelveHour => match hour % 12 {
            0 => 12,
            h => h,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_twelve_hour_table() {
        assert_eq!(display_hour(0, HourFormat::TwelveHour), 12);
        assert_eq!(display_hour(12, HourFormat::TwelveHour), 12);
        assert_eq!(display_hour(13, HourFormat::TwelveHour), 1);
        assert_eq!(display_hour(23, HourFormat::TwelveHour), 11);
        assert_eq!(display_hour(9, HourFormat::TwelveHour), 9);
    }

    #[test]
    fn test_preference_mapping() {
        assert_eq!(HourFormat::from_24h_preference(true), HourFormat::TwentyFourHour);
        assert_eq!(HourFormat::from_24h_preference(false), HourFormat::TwelveHour);
    }

    proptest! {
        #[test]
        fn prop_24h_is_identity(hour in 0u8..24) {
            prop_assert_eq!(display_hour(hour, HourFormat::TwentyFourHour), hour);
        }

        #[test]
        fn prop_12h_in_range(hour in 0u8..24) {
            let shown = display_hour(hour, HourFormat::TwelveHour);
            prop_assert!((1..=12).contains(&shown));
            prop_assert_eq!(shown % 12, hour % 12);
        }
    }
}
