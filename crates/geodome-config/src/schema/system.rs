//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The `tracing` filter directive for this level.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_directives() {
        assert_eq!(LogLevel::Trace.as_directive(), "trace");
        assert_eq!(LogLevel::Warn.as_directive(), "warn");
        assert_eq!(LogLevel::default().as_directive(), "info");
    }

    #[test]
    fn log_level_parses_lowercase() {
        let logging: LoggingConfig = toml::from_str("level = \"debug\"").unwrap();
        assert_eq!(logging.level, LogLevel::Debug);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let result: Result<LoggingConfig, _> = toml::from_str("level = \"verbose\"");
        assert!(result.is_err());
    }
}
