//! §4.6 configuration surface: the minimal, fallible setup a real
//! integrator needs before constructing a [`crate::scheduler::Scheduler`].
//! The 9600-8-E-1 serial parameters and the 2 s minimum send gap are
//! fixed protocol constants (§6) and are deliberately not configurable
//! here.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const MINIMUM_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Poll cadence and device path for one heat pump link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerialConfig {
    pub device: String,
    pub poll_interval_secs: i64,
    pub optional_poll_interval_secs: i64,
}

impl SerialConfig {
    pub fn new(device: impl Into<String>, poll_interval_secs: i64, optional_poll_interval_secs: i64) -> Result<Self, ConfigError> {
        let device = device.into();
        if device.trim().is_empty() {
            return Err(ConfigError::InvalidDevice);
        }
        Ok(SerialConfig { device, poll_interval_secs, optional_poll_interval_secs })
    }

    /// Loads and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: SerialConfig = serde_json::from_str(&text)?;
        if config.device.trim().is_empty() {
            return Err(ConfigError::InvalidDevice);
        }
        Ok(config)
    }

    /// §4.4 interval clamping: `<=0` disables polling, `0 < x < 2`
    /// clamps up to the minimum, otherwise the value passes through.
    pub fn poll_interval(&self) -> Option<Duration> {
        clamp_interval(self.poll_interval_secs)
    }

    pub fn optional_poll_interval(&self) -> Option<Duration> {
        clamp_interval(self.optional_poll_interval_secs)
    }
}

fn clamp_interval(secs: i64) -> Option<Duration> {
    if secs <= 0 {
        None
    } else if secs < 2 {
        Some(Duration::from_secs(2))
    } else {
        Some(Duration::from_secs(secs as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p8_interval_clamping() {
        assert_eq!(clamp_interval(0), None);
        assert_eq!(clamp_interval(-5), None);
        assert_eq!(clamp_interval(1), Some(Duration::from_secs(2)));
        assert_eq!(clamp_interval(10), Some(Duration::from_secs(10)));
    }

    #[test]
    fn rejects_empty_device_path() {
        assert!(matches!(SerialConfig::new("", 10, 2), Err(ConfigError::InvalidDevice)));
        assert!(matches!(SerialConfig::new("   ", 10, 2), Err(ConfigError::InvalidDevice)));
    }

    #[test]
    fn accepts_valid_device_path() {
        let cfg = SerialConfig::new("/dev/ttyUSB0", 10, 2).unwrap();
        assert_eq!(cfg.poll_interval(), Some(Duration::from_secs(10)));
        assert_eq!(cfg.optional_poll_interval(), Some(Duration::from_secs(2)));
    }
}
