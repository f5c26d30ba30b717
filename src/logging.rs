//! File logger setup
//!
//! The terminal belongs to the TUI while a game runs, so log records go to a
//! file instead of stderr.

use anyhow::{Context, Result};
use clap::ValueEnum;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::Path;

/// Verbosity accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Install a global logger writing to `path`, truncating any previous log
///
/// Creates parent directories if they don't exist. Fails if a logger is
/// already installed.
pub fn init(path: &Path, level: LogLevel) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {:?}", parent))?;
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create log file: {:?}", path))?;
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();

    WriteLogger::init(level.into(), config, file).context("Failed to install logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_level_mapping() {
        assert_eq!(LevelFilter::from(LogLevel::Off), LevelFilter::Off);
        assert_eq!(LevelFilter::from(LogLevel::Info), LevelFilter::Info);
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::Trace);
    }

    #[test]
    fn test_init_writes_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("snake.log");

        init(&path, LogLevel::Info).unwrap();
        log::info!("logger smoke test");
        log::debug!("below the threshold");
        log::logger().flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("logger smoke test"));
        assert!(!contents.contains("below the threshold"));

        // A second logger cannot be installed
        assert!(init(&temp_dir.path().join("other.log"), LogLevel::Info).is_err());
    }
}
