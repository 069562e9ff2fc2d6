//! Logging setup for the CLI.
//!
//! Everything goes to stderr so stdout stays clean for reports and JSON.
//! `RUST_LOG` takes precedence over the `-v` count when set.

use clap::ValueEnum;
use std::io;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: Level,
    pub format: LogFormat,
}

impl LogConfig {
    /// 0 = warn, 1 = info, 2 = debug, 3+ = trace.
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            format: LogFormat::default(),
        }
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "essence_core={level},essence_lock={level}",
            level = level.as_str().to_ascii_lowercase()
        ))
    })
}

pub fn init_logging(config: &LogConfig) {
    let filter = build_env_filter(config.level);
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Compact => registry
            .with(fmt::layer().compact().without_time().with_writer(io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().without_time().with_writer(io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(LogConfig::from_verbosity(0).level, Level::WARN);
        assert_eq!(LogConfig::from_verbosity(1).level, Level::INFO);
        assert_eq!(LogConfig::from_verbosity(2).level, Level::DEBUG);
        assert_eq!(LogConfig::from_verbosity(9).level, Level::TRACE);
    }

    #[test]
    fn format_defaults_to_compact() {
        let config = LogConfig::from_verbosity(0).with_format(LogFormat::Json);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }
}
