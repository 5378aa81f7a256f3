//! List templates command

use colored::Colorize;

use super::helpers::load_templates;
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::PanelContext;
use crate::workflow::messages;

pub async fn list_templates(panel: &PanelContext, json: bool) -> Result<(), CliError> {
    load_templates(panel).await?;
    let templates = panel.store.templates();

    if json {
        let out = serde_json::to_string_pretty(&templates)
            .map_err(|e| CliError::CommandError(format!("Failed to serialize: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    if templates.is_empty() {
        println!(
            "{} {}",
            "ℹ".bold().blue(),
            messages::empty_list(&panel.organization)
        );
        return Ok(());
    }

    println!("{}", messages::page_title(&panel.organization).bold().green());
    println!();
    for template in &templates {
        println!(
            "  {} {}",
            format!("[{}]", template.id).dimmed(),
            template.display_name.cyan().bold()
        );
        if let Some(title) = template.title() {
            println!("      {}", title.white());
        }
        if let Some(description) = template.description() {
            println!("      {}", description.dimmed());
        }
        println!("      {}", template.package_url.blue().underline());
        if let Some(thumbnail) = template.thumbnail_url() {
            println!("      {} {}", "thumbnail:".dimmed(), thumbnail.dimmed());
        }
    }
    println!();
    println!(
        "{} Total {} templates",
        "ℹ".bold().blue(),
        templates.len().to_string().green()
    );
    Ok(())
}
