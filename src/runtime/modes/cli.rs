//! CLI mode
//!
//! Sets up console logging, then delegates to the command implementations.

use crate::cli::Commands;
use crate::config::get_config;
use crate::interfaces::cli::{CliError, run_cli_command};
use crate::system::logging::init_logging;
use crate::system::panic_handler::{RunMode, install_panic_hook};

/// Run one CLI command
pub async fn run_cli(command: Commands) -> Result<(), CliError> {
    install_panic_hook(RunMode::Cli);
    let config = get_config();
    let _guard = init_logging(&config.logging)?;
    run_cli_command(command).await
}
