use crate::DEFAULT_LOG_LEVEL;

use std::convert::Infallible;
use std::ops::Deref;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// Log level that never fails to parse; anything unrecognized falls back to
/// the default so a typo in config.toml cannot stop the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(DEFAULT_LOG_LEVEL)
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let level = if name.eq_ignore_ascii_case("warning") {
            LevelFilter::Warn
        } else {
            LevelFilter::from_str(name).unwrap_or(DEFAULT_LOG_LEVEL)
        };
        Ok(LogLevel(level))
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Non-string values (`level = 3`) read as the default too
        let level = match String::deserialize(deserializer) {
            Ok(name) => name.parse::<LogLevel>().unwrap_or_default(),
            Err(_) => LogLevel::default(),
        };
        Ok(level)
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
