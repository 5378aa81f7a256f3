//! Helpers shared by the template commands

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::cli::TemplateArgs;
use crate::interfaces::cli::CliError;
use crate::notification::{NotificationChannel, NotificationVariant};
use crate::runtime::lifetime::PanelContext;
use crate::workflow::{TemplateForm, messages};

/// Load the collection, mapping a list failure to the page error message
pub async fn load_templates(panel: &PanelContext) -> Result<(), CliError> {
    panel
        .store
        .refresh()
        .await
        .map(|_| ())
        .map_err(|e| CliError::GatewayError(messages::loading_error(&e.message())))
}

/// Print whatever the workflow last reported
pub fn print_notification(channel: &NotificationChannel) {
    let Some(notification) = channel.current() else {
        return;
    };
    match notification.variant {
        NotificationVariant::Success => {
            println!("{} {}", "✓".bold().green(), notification.message.green())
        }
        NotificationVariant::Danger => {
            eprintln!("{} {}", "✗".bold().red(), notification.message.red())
        }
        NotificationVariant::Plain => println!("{} {}", "ℹ".bold().blue(), notification.message),
    }
}

/// Copy the flags that were given into the form, leaving the rest alone
pub fn apply_args(form: &mut TemplateForm, args: TemplateArgs) {
    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(description) = args.description {
        form.description = description;
    }
    if let Some(url) = args.url {
        form.package_url = url;
    }
    if let Some(thumbnail) = args.thumbnail {
        form.thumbnail_path = thumbnail;
    }
}

/// Blocking y/N prompt, anything but `y` declines
pub fn confirm(prompt: &str) -> Result<bool, CliError> {
    print!("{} {} ", prompt.yellow(), "[y/N]".yellow());
    io::stdout()
        .flush()
        .map_err(|e| CliError::CommandError(e.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| CliError::CommandError(e.to_string()))?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}
