//! Parser for `watch.toml`
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! the watch face configuration. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, boolean)
//! - [section] headers
//! - Comments (# ...), including trailing comments
//!
//! Missing keys keep their defaults. Unknown sections and keys are
//! rejected so typos do not silently fall back to defaults.

use super::types::{HourFormatSetting, WatchConfig};
use crate::date::Locale;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header (line number)
    InvalidSection(usize),
    /// Key not valid in the current section (line number)
    UnknownKey(usize),
    /// Value has the wrong type or an unknown code (line number)
    InvalidValue(usize),
    /// Line is neither a header nor a key/value pair (line number)
    InvalidLine(usize),
}

impl ParseError {
    /// 1-based line the error was found on
    pub fn line(&self) -> usize {
        match *self {
            ParseError::InvalidSection(line)
            | ParseError::UnknownKey(line)
            | ParseError::InvalidValue(line)
            | ParseError::InvalidLine(line) => line,
        }
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Clock,
    Date,
}

/// Parse TOML configuration into a WatchConfig
pub fn parse_config(input: &str) -> Result<WatchConfig, ParseError> {
    let mut config = WatchConfig::default();
    let mut section = Section::Root;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(raw).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(line).ok_or(ParseError::InvalidSection(line_no))?;
            continue;
        }

        let (key, value) = line.split_once('=').ok_or(ParseError::InvalidLine(line_no))?;
        let key = key.trim();
        let value = value.trim();

        match (section, key) {
            (Section::Clock, "hour_format") => {
                config.hour_format = parse_string(value)
                    .and_then(HourFormatSetting::from_code)
                    .ok_or(ParseError::InvalidValue(line_no))?;
            }
            (Section::Clock, "leading_zero_hours") => {
                config.leading_zeros.hours = parse_bool(value, line_no)?;
            }
            (Section::Clock, "leading_zero_minutes") => {
                config.leading_zeros.minutes = parse_bool(value, line_no)?;
            }
            (Section::Clock, "leading_zero_seconds") => {
                config.leading_zeros.seconds = parse_bool(value, line_no)?;
            }
            (Section::Date, "locale") => {
                config.locale = parse_string(value)
                    .and_then(Locale::from_code)
                    .ok_or(ParseError::InvalidValue(line_no))?;
            }
            _ => return Err(ParseError::UnknownKey(line_no)),
        }
    }

    Ok(config)
}

/// Drop a trailing `# comment`, ignoring `#` inside quoted strings
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_section_header(line: &str) -> Option<Section> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    match name {
        "clock" => Some(Section::Clock),
        "date" => Some(Section::Date),
        _ => None,
    }
}

fn parse_string(value: &str) -> Option<&str> {
    value.strip_prefix('"')?.strip_suffix('"')
}

fn parse_bool(value: &str, line_no: usize) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue(line_no)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::HourFormat;

    const SHIPPED: &str = r#"
# BigTime watch face configuration

[clock]
hour_format = "host"        # "host" | "12h" | "24h"
leading_zero_hours = true
leading_zero_minutes = true
leading_zero_seconds = true

[date]
locale = "it"               # "it" | "en"
"#;

    #[test]
    fn test_shipped_config_is_default() {
        assert_eq!(parse_config(SHIPPED), Ok(WatchConfig::default()));
    }

    #[test]
    fn test_empty_input_is_default() {
        assert_eq!(parse_config(""), Ok(WatchConfig::default()));
    }

    #[test]
    fn test_overrides() {
        let input = "[clock]\nhour_format = \"12h\"\nleading_zero_hours = false\n[date]\nlocale = \"en\"\n";
        let config = parse_config(input).unwrap();
        assert_eq!(config.hour_format, HourFormatSetting::Fixed(HourFormat::TwelveHour));
        assert!(!config.leading_zeros.hours);
        assert!(config.leading_zeros.minutes);
        assert_eq!(config.locale, Locale::English);
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(parse_config("[alarm]\n"), Err(ParseError::InvalidSection(1)));
        assert_eq!(parse_config("[clock\n"), Err(ParseError::InvalidSection(1)));
    }

    #[test]
    fn test_unknown_key() {
        let input = "[clock]\nhour_fromat = \"12h\"\n";
        assert_eq!(parse_config(input), Err(ParseError::UnknownKey(2)));
        // Keys outside any section are not accepted either
        assert_eq!(parse_config("locale = \"it\"\n"), Err(ParseError::UnknownKey(1)));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            parse_config("[clock]\nleading_zero_hours = yes\n"),
            Err(ParseError::InvalidValue(2))
        );
        assert_eq!(
            parse_config("[date]\nlocale = it\n"),
            Err(ParseError::InvalidValue(2))
        );
        assert_eq!(
            parse_config("[date]\nlocale = \"de\"\n"),
            Err(ParseError::InvalidValue(2))
        );
    }

    #[test]
    fn test_invalid_line() {
        let err = parse_config("[clock]\n\nhour_format\n").unwrap_err();
        assert_eq!(err, ParseError::InvalidLine(3));
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_hash_inside_string_kept() {
        assert_eq!(strip_comment("a = \"#1\" # note"), "a = \"#1\" ");
    }
}
