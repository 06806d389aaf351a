//! Build script for bigtime-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates watch.toml at compile time
//! - Records the build time used to seed the RTC

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Local, Timelike};

const HOUR_FORMATS: &[&str] = &["host", "12h", "24h"];
const LOCALES: &[&str] = &["it", "en"];
const CLOCK_BOOLS: &[&str] = &[
    "leading_zero_hours",
    "leading_zero_minutes",
    "leading_zero_seconds",
];

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    setup_linker(&out_dir);
    validate_config();
    write_build_time(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate watch.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=watch.toml");

    let config_path = Path::new("watch.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: watch.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds a watch.toml configuration file.            ║\n\
            ║  Please create one in the bigtime-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read watch.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in watch.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_clock(&config, &mut errors);
    validate_date(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid settings in watch.toml                           ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=watch.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only [clock] and [date] tables are allowed at the top level
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        errors.push("top level must be a table".to_string());
        return;
    };

    for (name, value) in root {
        match (name.as_str(), value) {
            ("clock" | "date", toml::Value::Table(_)) => {}
            ("clock" | "date", _) => errors.push(format!("[{}] must be a table", name)),
            _ => errors.push(format!("unknown section or key '{}'", name)),
        }
    }
}

fn validate_clock(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(clock) = config.get("clock").and_then(toml::Value::as_table) else {
        return;
    };

    for (key, value) in clock {
        match key.as_str() {
            "hour_format" => match value.as_str() {
                Some(code) if HOUR_FORMATS.contains(&code) => {}
                _ => errors.push("[clock] hour_format must be 'host', '12h' or '24h'".to_string()),
            },
            k if CLOCK_BOOLS.contains(&k) => {
                if !value.is_bool() {
                    errors.push(format!("[clock] {} must be true or false", k));
                }
            }
            other => errors.push(format!("[clock] unknown key '{}'", other)),
        }
    }
}

fn validate_date(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(date) = config.get("date").and_then(toml::Value::as_table) else {
        return;
    };

    for (key, value) in date {
        match key.as_str() {
            "locale" => match value.as_str() {
                Some(code) if LOCALES.contains(&code) => {}
                _ => errors.push("[date] locale must be 'it' or 'en'".to_string()),
            },
            other => errors.push(format!("[date] unknown key '{}'", other)),
        }
    }
}

/// Write the local build time as constants for the RTC seed
fn write_build_time(out_dir: &Path) {
    let now = Local::now();
    let mut f = File::create(out_dir.join("build_time.rs")).unwrap();
    write!(
        f,
        "pub const BUILD_YEAR: u16 = {};\n\
         pub const BUILD_MONTH: u8 = {};\n\
         pub const BUILD_DAY: u8 = {};\n\
         pub const BUILD_WEEKDAY: u8 = {};\n\
         pub const BUILD_HOUR: u8 = {};\n\
         pub const BUILD_MINUTE: u8 = {};\n\
         pub const BUILD_SECOND: u8 = {};\n",
        now.year(),
        now.month(),
        now.day(),
        now.weekday().num_days_from_sunday(),
        now.hour(),
        now.minute(),
        now.second(),
    )
    .unwrap();
}
