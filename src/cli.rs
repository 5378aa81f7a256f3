//! Command-line interface definitions using clap

use clap::{Args, Parser, Subcommand};

/// template-desk - admin console for course templates
#[derive(Parser)]
#[command(name = "template-desk")]
#[command(version)]
#[command(about = "Manage course templates served by a remote template API", long_about = None)]
pub struct Cli {
    /// Configuration file (default: template-desk.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive admin panel
    #[cfg(feature = "tui")]
    Tui,

    /// List all templates
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a template
    Create {
        #[command(flatten)]
        fields: TemplateArgs,
    },

    /// Update a template
    ///
    /// Fields start from the current template; omitted flags keep their value.
    Update {
        /// Template id
        id: String,

        #[command(flatten)]
        fields: TemplateArgs,
    },

    /// Delete a template
    Delete {
        /// Template id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Import a template into a new course (or download its archive)
    Import {
        /// Template id
        id: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Editable template fields
#[derive(Args, Debug, Default, Clone)]
pub struct TemplateArgs {
    /// Template name
    #[arg(long)]
    pub name: Option<String>,

    /// Description
    #[arg(long)]
    pub description: Option<String>,

    /// Course template archive URL (.gz)
    #[arg(long)]
    pub url: Option<String>,

    /// Thumbnail image file
    #[arg(long)]
    pub thumbnail: Option<String>,
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: template-desk.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
