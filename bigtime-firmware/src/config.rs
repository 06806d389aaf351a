//! Embedded configuration loading

use defmt::*;

use bigtime_core::config::{parse_config, WatchConfig};

/// Embedded configuration (compiled into firmware)
/// Edit watch.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../watch.toml");

/// Parse the embedded watch.toml, falling back to defaults on error
///
/// build.rs already validated the file, so a failure here means the two
/// parsers disagree.
pub fn load_config() -> WatchConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: hour_format={:?} locale={:?}",
                config.hour_format, config.locale
            );
            config
        }
        Err(e) => {
            error!("watch.toml parse error at line {}: {:?}", e.line(), e);
            WatchConfig::default()
        }
    }
}
