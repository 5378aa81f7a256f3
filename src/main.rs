use clap::{CommandFactory, Parser};

use template_desk::cli::Cli;
use template_desk::runtime::lifetime::load_environment;
use template_desk::runtime::modes::{Mode, detect_mode};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    load_environment(cli.config.as_deref());

    match detect_mode(cli.command.as_ref()) {
        #[cfg(feature = "tui")]
        Mode::Tui => {
            if let Err(e) = template_desk::runtime::modes::run_tui().await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
        #[cfg(feature = "cli")]
        Mode::Cli => {
            let Some(command) = cli.command else {
                return;
            };
            if let Err(e) = template_desk::runtime::modes::run_cli(command).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
        Mode::Unknown => {
            let _ = Cli::command().print_help();
            println!();
        }
    }
}
