//! Configuration types and parsing
//!
//! The watch face is configured from a small TOML file (`watch.toml`).
//! Screen geometry is fixed and lives in [`layout`].

pub mod layout;
pub mod parse;
pub mod types;

pub use layout::{Rect, BATTERY_RECT, CONNECTION_RECT, SLOT_RECTS, STATUS_RECT};
pub use parse::{parse_config, ParseError};
pub use types::{HourFormatSetting, LeadingZeros, WatchConfig};

pub use crate::clock::HourFormat;
pub use crate::date::Locale;
