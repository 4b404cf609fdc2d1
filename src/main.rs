//! irclog binary entry point.

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use irclog::cli::{Cli, Commands, ConfigCommands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Convert(args) => commands::convert::handle(&args, config_path),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(config_path),
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(config_path),
        Commands::Config(ConfigCommands::Edit) => commands::config::handle_edit(config_path),
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v` flags.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
