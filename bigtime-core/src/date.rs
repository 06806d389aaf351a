//! Date text and its per-day cache
//!
//! The status column shows the date as four stacked lines:
//!
//! ```text
//! MER
//! 05
//! GEN
//! 2024
//! ```
//!
//! Formatting and redrawing that text every second would be wasted work,
//! so it is only rebuilt when the day of month changes.

use core::fmt::Write;

use heapless::String;

use crate::clock::TimeReading;

/// Capacity of the formatted date text
pub const DATE_TEXT_LEN: usize = 24;

/// Formatted date text
pub type DateText = String<DATE_TEXT_LEN>;

/// Cached day before the first update; never a valid day of month
pub const NO_DAY: u8 = 40;

/// Language of the weekday and month names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locale {
    #[default]
    Italian,
    English,
}

const IT_WEEKDAYS_SHORT: [&str; 7] = ["DOM", "LUN", "MAR", "MER", "GIO", "VEN", "SAB"];
const IT_WEEKDAYS: [&str; 7] = [
    "DOMENICA",
    "LUNEDÌ",
    "MARTEDÌ",
    "MERCOLEDÌ",
    "GIOVEDÌ",
    "VENERDÌ",
    "SABATO",
];
const IT_MONTHS_SHORT: [&str; 12] = [
    "GEN", "FEB", "MAR", "APR", "MAG", "GIU", "LUG", "AGO", "SET", "OTT", "NOV", "DIC",
];

const EN_WEEKDAYS_SHORT: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
const EN_WEEKDAYS: [&str; 7] = [
    "SUNDAY",
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
];
const EN_MONTHS_SHORT: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

impl Locale {
    /// Three-letter weekday name (0 = Sunday)
    pub fn weekday_short(self, weekday: u8) -> &'static str {
        let table = match self {
            Locale::Italian => &IT_WEEKDAYS_SHORT,
            Locale::English => &EN_WEEKDAYS_SHORT,
        };
        table[weekday as usize % table.len()]
    }

    /// Full weekday name (0 = Sunday)
    pub fn weekday_long(self, weekday: u8) -> &'static str {
        let table = match self {
            Locale::Italian => &IT_WEEKDAYS,
            Locale::English => &EN_WEEKDAYS,
        };
        table[weekday as usize % table.len()]
    }

    /// Three-letter month name (0 = January)
    pub fn month_short(self, month: u8) -> &'static str {
        let table = match self {
            Locale::Italian => &IT_MONTHS_SHORT,
            Locale::English => &EN_MONTHS_SHORT,
        };
        table[month as usize % table.len()]
    }

    /// Parse a config code ("it", "en")
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "it" => Some(Locale::Italian),
            "en" => Some(Locale::English),
            _ => None,
        }
    }
}

/// Format the status text for a date
pub fn format_date(time: &TimeReading, locale: Locale) -> DateText {
    let mut text = DateText::new();
    // Longest possible output ("SAB\n31\nDIC\n65535") is 17 bytes
    let _ = write!(
        text,
        "{}\n{:02}\n{}\n{:04}",
        locale.weekday_short(time.weekday),
        time.day,
        locale.month_short(time.month),
        time.year
    );
    text
}

/// Date text, rebuilt once per day
#[derive(Debug, Clone)]
pub struct DateCache {
    day: u8,
    text: DateText,
}

impl Default for DateCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DateCache {
    pub const fn new() -> Self {
        Self {
            day: NO_DAY,
            text: String::new(),
        }
    }

    /// Rebuild the text if the day changed
    ///
    /// Returns the new text when it needs redrawing, `None` otherwise.
    pub fn update(&mut self, time: &TimeReading, locale: Locale) -> Option<&str> {
        if self.day == time.day {
            return None;
        }
        self.day = time.day;
        self.text = format_date(time, locale);
        Some(self.text.as_str())
    }

    /// Force the next update to rebuild
    pub fn invalidate(&mut self) {
        self.day = NO_DAY;
    }

    /// Last formatted text (empty before the first update)
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Day of month the text was built for
    pub fn cached_day(&self) -> Option<u8> {
        (self.day != NO_DAY).then_some(self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TimeReading {
        TimeReading::hms(9, 5, 3).with_date(2024, 0, 5, 3)
    }

    #[test]
    fn test_format_italian() {
        assert_eq!(format_date(&sample(), Locale::Italian).as_str(), "MER\n05\nGEN\n2024");
    }

    #[test]
    fn test_format_english() {
        let time = TimeReading::hms(0, 0, 0).with_date(1999, 11, 31, 5);
        assert_eq!(format_date(&time, Locale::English).as_str(), "FRI\n31\nDEC\n1999");
    }

    #[test]
    fn test_cache_skips_same_day() {
        let mut cache = DateCache::new();
        assert_eq!(cache.cached_day(), None);
        assert_eq!(cache.update(&sample(), Locale::Italian), Some("MER\n05\nGEN\n2024"));
        assert_eq!(cache.update(&sample(), Locale::Italian), None);
        assert_eq!(cache.cached_day(), Some(5));
        assert_eq!(cache.text(), "MER\n05\nGEN\n2024");
    }

    #[test]
    fn test_cache_rebuilds_on_day_change() {
        let mut cache = DateCache::new();
        cache.update(&sample(), Locale::Italian);
        let next = sample().with_date(2024, 0, 6, 4);
        assert_eq!(cache.update(&next, Locale::Italian), Some("GIO\n06\nGEN\n2024"));
    }

    #[test]
    fn test_invalidate() {
        let mut cache = DateCache::new();
        cache.update(&sample(), Locale::Italian);
        cache.invalidate();
        assert_eq!(cache.update(&sample(), Locale::English), Some("WED\n05\nJAN\n2024"));
    }

    #[test]
    fn test_table_indexing_wraps() {
        assert_eq!(Locale::Italian.weekday_short(7), "DOM");
        assert_eq!(Locale::Italian.month_short(12), "GEN");
        assert_eq!(Locale::Italian.weekday_long(3), "MERCOLEDÌ");
        assert_eq!(Locale::from_code("en"), Some(Locale::English));
        assert_eq!(Locale::from_code("fr"), None);
    }
}
