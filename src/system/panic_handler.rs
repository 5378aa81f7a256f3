//! Panic handler
//!
//! In TUI mode the terminal is in raw mode on the alternate screen when a
//! panic happens, so it has to be restored before anything is printed.
//! Both modes append a report to `crash.log`.

use std::fs::OpenOptions;
use std::io::Write;
use std::panic;

use chrono::{DateTime, Utc};

/// Running mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Cli,
    Tui,
}

/// Install custom panic hook
pub fn install_panic_hook(mode: RunMode) {
    panic::set_hook(Box::new(move |panic_info| {
        let payload = panic_info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        #[cfg(feature = "tui")]
        if mode == RunMode::Tui {
            crate::interfaces::tui::restore_terminal();
        }
        #[cfg(not(feature = "tui"))]
        let _ = mode;

        let backtrace = std::backtrace::Backtrace::force_capture();
        if let Err(e) = write_crash_log(&message, &location, &backtrace) {
            eprintln!("Failed to write crash log: {}", e);
        }

        tracing::error!("Panic at {}: {}", location, message);
        eprintln!();
        eprintln!("Program panicked: {}", message);
        eprintln!("Details saved to crash.log, please check the log file");
        eprintln!();
    }));
}

fn write_crash_log(
    message: &str,
    location: &str,
    backtrace: &std::backtrace::Backtrace,
) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("crash.log")?;

    writeln!(file, "==========================================")?;
    writeln!(file, "{}", report_title(Utc::now()))?;
    writeln!(file, "==========================================")?;
    writeln!(file, "Message: {}", message)?;
    writeln!(file, "Location: {}", location)?;
    writeln!(file, "\nBacktrace:")?;
    writeln!(file, "{:?}", backtrace)?;
    writeln!(file, "==========================================\n")?;

    Ok(())
}

fn report_title(now: DateTime<Utc>) -> String {
    format!("Crash Report - {}", now.format("%Y-%m-%d %H:%M:%S UTC"))
}
