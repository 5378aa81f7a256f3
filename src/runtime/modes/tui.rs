//! TUI mode
//!
//! Logs go to a file while the panel owns the terminal.

use crate::config::get_config;
use crate::errors::Result;
use crate::runtime::lifetime::prepare_panel;
use crate::system::logging::init_tui_logging;
use crate::system::panic_handler::{RunMode, install_panic_hook};

/// Run the interactive admin panel
pub async fn run_tui() -> Result<()> {
    install_panic_hook(RunMode::Tui);
    let config = get_config();
    let _guard = init_tui_logging(&config.logging)?;
    let panel = prepare_panel(&config)?;
    crate::interfaces::tui::run_tui(panel).await
}
