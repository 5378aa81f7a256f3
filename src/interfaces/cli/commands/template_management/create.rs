//! Create template command

use colored::Colorize;

use super::helpers::{apply_args, print_notification};
use crate::cli::TemplateArgs;
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::PanelContext;

pub async fn create_template(panel: &PanelContext, args: TemplateArgs) -> Result<(), CliError> {
    panel.workflow.open_create();
    panel.workflow.with_form(|form| apply_args(form, args));

    let result = panel.workflow.submit_form().await;
    print_notification(&panel.notifications);
    let template = result?;

    println!(
        "  {} {} {}",
        template.display_name.cyan(),
        "->".dimmed(),
        template.package_url.blue().underline()
    );
    Ok(())
}
