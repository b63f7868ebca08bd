//! Logging initialization for hirepipe.
//!
//! TUI mode: logs to `{state}/logs/hirepipe-{datetime}.log`
//! CLI mode: logs to stderr

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Result of logging initialization
pub struct LoggingHandle {
    /// Flushes buffered file output when dropped; keep alive until exit
    pub _guard: Option<WorkerGuard>,

    /// Set only when logging to a file
    pub log_file_path: Option<PathBuf>,
}

/// Whether log output goes to a file rather than stderr
pub fn logs_to_file(config: &Config, is_tui_mode: bool) -> bool {
    is_tui_mode && config.logging.to_file
}

/// Effective filter directive: `RUST_LOG` wins, then `--debug`, then config
pub fn filter_directive(config: &Config, debug_override: bool) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if debug_override {
            "debug".to_string()
        } else {
            config.logging.level.clone()
        }
    })
}

fn log_filename(now: DateTime<Utc>) -> String {
    format!("hirepipe-{}.log", now.format("%Y%m%dT%H%M%SZ"))
}

/// Install the global subscriber. Call once per process.
pub fn init_logging(
    config: &Config,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let filter = tracing_subscriber::EnvFilter::new(filter_directive(config, debug_override));

    if logs_to_file(config, is_tui_mode) {
        let logs_dir = config.logs_path();
        std::fs::create_dir_all(&logs_dir)?;

        let log_filename = log_filename(Utc::now());
        let log_file_path = logs_dir.join(&log_filename);

        let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();

        Ok(LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(log_file_path),
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.paths.state = temp_dir.path().to_string_lossy().to_string();
        config
    }

    #[test]
    fn test_logs_path_under_state_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        let logs_dir = config.logs_path();
        assert!(logs_dir.ends_with("logs"));
        assert!(logs_dir.starts_with(temp_dir.path()));
    }

    #[test]
    fn test_log_filename_format() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 5).unwrap();
        assert_eq!(log_filename(now), "hirepipe-20261016T093005Z.log");
    }

    #[test]
    fn test_cli_mode_logs_to_stderr() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        assert!(!logs_to_file(&config, false));
        assert!(logs_to_file(&config, true));
    }

    #[test]
    fn test_tui_mode_with_file_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = test_config(&temp_dir);
        config.logging.to_file = false;
        assert!(!logs_to_file(&config, true));
    }

    #[test]
    fn test_debug_override_when_rust_log_unset() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let mut config = Config::default();
        config.logging.level = "warn".to_string();
        assert_eq!(filter_directive(&config, false), "warn");
        assert_eq!(filter_directive(&config, true), "debug");
    }
}
