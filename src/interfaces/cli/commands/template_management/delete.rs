//! Delete template command

use colored::Colorize;

use super::helpers::{confirm, load_templates, print_notification};
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::PanelContext;
use crate::workflow::messages;

pub async fn delete_template(panel: &PanelContext, id: String, yes: bool) -> Result<(), CliError> {
    load_templates(panel).await?;
    panel.workflow.request_delete(&id)?;

    if !yes {
        if let Some(ctx) = panel.workflow.pending_delete() {
            println!(
                "{} {}",
                messages::DELETE_TEMPLATE_HEADER.bold().red(),
                format!("{} ({})", ctx.template_name, ctx.template_id).cyan()
            );
        }
        if !confirm(messages::CONFIRM_DELETE)? {
            panel.workflow.cancel_delete();
            println!("{}", "Aborted.".red());
            return Ok(());
        }
    }

    let result = panel.workflow.confirm_delete().await;
    print_notification(&panel.notifications);
    Ok(result?)
}
