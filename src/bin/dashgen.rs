use std::path::PathBuf;
use std::process;

use clap::Parser;
use dashgen::cli::ui::{print_banner, print_error};
use dashgen::cli::{Cli, Commands};
use dashgen::config::DashgenConfig;
use dashgen::error::Result;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up global configuration
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Run the application
    if let Err(error) = run_app(cli) {
        print_error(&error);
        process::exit(1);
    }
}

fn run_app(cli: Cli) -> Result<()> {
    // Load configuration
    let config = load_config()?;

    // Resolve the target root for filesystem commands
    let root = resolve_root(&cli, &config);

    // Print banner for most commands (except some that should be quiet)
    if should_print_banner(&cli.command) {
        print_banner();
    }

    // Dispatch commands; a bare invocation generates the scaffold
    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            dashgen::cli::handlers::handle_generate(&config, &root, cli.verbose)
        }
        Commands::Plan => dashgen::cli::handlers::handle_plan(&root),
        Commands::Banner => dashgen::cli::handlers::handle_banner(&config),
        Commands::Config { cmd } => dashgen::cli::handlers::handle_config(&config, cmd),
    }
}

fn load_config() -> Result<DashgenConfig> {
    DashgenConfig::load_global().or_else(|_| Ok(DashgenConfig::default()))
}

fn resolve_root(cli: &Cli, config: &DashgenConfig) -> PathBuf {
    cli.root
        .clone()
        .or_else(|| config.output.root.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn should_print_banner(command: &Option<Commands>) -> bool {
    match command {
        Some(Commands::Banner) => false, // Banner command handles its own output
        Some(Commands::Config { .. }) => false, // Config should be minimal
        _ => true,
    }
}
