//! CLI interface module
//!
//! Every template command runs through the same store and workflow as the
//! TUI; the notification the workflow raises is what gets printed.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::get_config;
use crate::errors::TemplateError;
use crate::runtime::lifetime::{PanelContext, prepare_panel};
use commands::{
    config_generate, create_template, delete_template, import_template, list_templates,
    update_template,
};

#[derive(Debug)]
pub enum CliError {
    GatewayError(String),
    InputError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::GatewayError(msg) => format!("Gateway error: {}", msg),
            CliError::InputError(msg) => format!("Invalid input: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::GatewayError(msg) => {
                format!("{} {}", "Gateway error:".red().bold(), msg.white())
            }
            CliError::InputError(msg) => {
                format!("{} {}", "Invalid input:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<TemplateError> for CliError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::Validation(msg) => CliError::InputError(msg),
            TemplateError::Config(_) | TemplateError::FileOperation(_) => {
                CliError::CommandError(err.format_simple())
            }
            _ => CliError::GatewayError(err.format_simple()),
        }
    }
}

fn open_panel() -> Result<PanelContext, CliError> {
    Ok(prepare_panel(&get_config())?)
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        // Generate doesn't need a gateway
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force).await,

        Commands::List { json } => list_templates(&open_panel()?, json).await,

        Commands::Create { fields } => create_template(&open_panel()?, fields).await,

        Commands::Update { id, fields } => update_template(&open_panel()?, id, fields).await,

        Commands::Delete { id, yes } => delete_template(&open_panel()?, id, yes).await,

        Commands::Import { id } => import_template(&open_panel()?, id).await,

        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "The admin panel is started with `template-desk tui`".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_error_mapping() {
        let err: CliError = TemplateError::validation("Template name is required").into();
        assert!(matches!(err, CliError::InputError(ref m) if m == "Template name is required"));

        let err: CliError = TemplateError::http(404, "").into();
        assert_eq!(err.format_simple(), "Gateway error: HTTP Error: status 404");

        let err: CliError = TemplateError::config("api.base_url").into();
        assert!(matches!(err, CliError::CommandError(_)));
    }
}
