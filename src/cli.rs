//! Command-line interface definitions.
//!
//! Kept in the library so the definitions can be reused for shell
//! completion generation and tested without spawning the binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

/// Convert IRC logs with mIRC color codes into markup
#[derive(Debug, Parser)]
#[command(name = "irclog", version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a log file into markup
    Convert(ConvertArgs),

    /// Inspect the configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, clap::Args)]
pub struct ConvertArgs {
    /// Input log file ("-" for stdin)
    #[arg(long, value_name = "PATH", default_value = "input.log")]
    pub log: PathBuf,

    /// Output file ("-" for stdout)
    #[arg(long, value_name = "PATH", default_value = "output.log")]
    pub output: PathBuf,

    /// Write an alignment separator line before the converted log
    #[arg(long)]
    pub align: bool,

    /// Include private messages and actions
    #[arg(long = "priv")]
    pub include_private: bool,

    /// Convert lines on all CPU cores
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Open the configuration file in $EDITOR
    Edit,
}
