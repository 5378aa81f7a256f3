//! Logging system initialization
//!
//! Sets up the tracing subscriber from the `[logging]` section of the
//! configuration. The console stays the default sink for CLI commands; the
//! TUI owns the terminal, so it always logs to a file.

use std::io::Write;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::{Result, TemplateError};

/// Log file used by the TUI when none is configured
pub const DEFAULT_TUI_LOG_FILE: &str = "template-desk.log";

/// Initialize logging based on configuration
///
/// The returned guard must be kept alive for the duration of the program so
/// buffered log lines are flushed on exit. Calling this twice keeps the
/// first subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let log_file = config.file.as_deref().filter(|f| !f.is_empty());
    let writer = make_writer(config, log_file)?;

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level).map_err(|e| {
        TemplateError::config(format!("Invalid log level '{}': {}", config.level, e))
    })?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none());

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    if let Err(e) = installed {
        eprintln!("Logging already initialized: {}", e);
    }

    Ok(guard)
}

/// Same as [`init_logging`], but never writes to the console
pub fn init_tui_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let mut config = config.clone();
    if config.file.as_deref().is_none_or(str::is_empty) {
        config.file = Some(DEFAULT_TUI_LOG_FILE.to_string());
    }
    init_logging(&config)
}

fn make_writer(
    config: &LoggingConfig,
    log_file: Option<&str>,
) -> Result<Box<dyn Write + Send + Sync>> {
    let Some(log_file) = log_file else {
        return Ok(Box::new(std::io::stdout()));
    };

    if config.enable_rotation {
        let path = Path::new(log_file);
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let prefix = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(DEFAULT_TUI_LOG_FILE)
            .trim_end_matches(".log")
            .to_string();
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(prefix)
            .filename_suffix("log")
            .max_log_files(config.max_backups as usize)
            .build(dir)
            .map_err(|e| {
                TemplateError::file_operation(format!(
                    "Failed to create rolling log appender in {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        Ok(Box::new(appender))
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .map_err(|e| {
                TemplateError::file_operation(format!(
                    "Failed to open log file {}: {}",
                    log_file, e
                ))
            })?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_writer_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("desk.log");
        let config = LoggingConfig {
            file: Some(path.to_string_lossy().into_owned()),
            ..LoggingConfig::default()
        };

        let mut writer = make_writer(&config, config.file.as_deref()).unwrap();
        writer.write_all(b"hello\n").unwrap();
        writer.flush().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_file_writer_reports_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("desk.log");
        let config = LoggingConfig::default();

        let err = make_writer(&config, path.to_str()).err().unwrap();
        assert_eq!(err.code(), "E007");
    }
}
