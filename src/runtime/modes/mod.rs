//! Mode routing
//!
//! - CLI mode: one-shot commands
//! - TUI mode: interactive admin panel (feature `tui`)

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

/// Pick the execution mode for a parsed command
///
/// 1. `tui` with the TUI feature enabled -> TUI mode
/// 2. Any other command with the CLI feature enabled -> CLI mode
/// 3. Otherwise -> Unknown (print help)
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    #[cfg(feature = "tui")]
    if matches!(command, Some(Commands::Tui)) {
        return Mode::Tui;
    }

    #[cfg(feature = "cli")]
    if command.is_some() {
        return Mode::Cli;
    }

    Mode::Unknown
}
