//! Update template command

use colored::Colorize;

use super::helpers::{apply_args, load_templates, print_notification};
use crate::cli::TemplateArgs;
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::PanelContext;

pub async fn update_template(
    panel: &PanelContext,
    id: String,
    args: TemplateArgs,
) -> Result<(), CliError> {
    load_templates(panel).await?;
    panel.workflow.open_edit(&id)?;
    panel.workflow.with_form(|form| apply_args(form, args));

    let result = panel.workflow.submit_form().await;
    print_notification(&panel.notifications);
    let template = result?;

    println!(
        "  {} {} {}",
        template.id.dimmed(),
        template.display_name.cyan(),
        template.package_url.blue().underline()
    );
    Ok(())
}
