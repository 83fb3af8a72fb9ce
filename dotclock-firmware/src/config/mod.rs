//! Configuration loading
//!
//! The configuration is compiled in from `clock.toml` and already checked
//! by the build script. Parsing again at boot keeps the board running on
//! defaults if the two ever disagree.

use defmt::*;
use dotclock_core::config::{parse_config, ClockConfig};

/// Parse the embedded configuration, falling back to defaults
pub fn load_config(source: &str) -> ClockConfig {
    match parse_config(source) {
        Ok(config) => {
            info!(
                "Config loaded: {} ticks/s, brightness {}",
                config.tick.sub_ticks_per_second, config.display.brightness
            );
            config
        }
        Err(e) => {
            error!("Config parse failed: {:?}, using defaults", e);
            ClockConfig::default()
        }
    }
}
