//! Import template command

use colored::Colorize;

use super::helpers::{load_templates, print_notification};
use crate::interfaces::cli::CliError;
use crate::models::ImportOutcome;
use crate::runtime::lifetime::PanelContext;

pub async fn import_template(panel: &PanelContext, id: String) -> Result<(), CliError> {
    load_templates(panel).await?;

    let result = panel.workflow.import(&id).await;
    print_notification(&panel.notifications);
    if let ImportOutcome::Navigate(location) = result? {
        println!("  {} {}", "Open:".dimmed(), location.blue().underline());
    }
    Ok(())
}
