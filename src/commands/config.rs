//! Config subcommands handler

use std::path::{Path, PathBuf};

use anyhow::Result;

use irclog::Config;

/// Show the effective configuration as TOML.
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = Config::resolve(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the path the configuration is read from.
pub fn handle_path(config_path: Option<&Path>) -> Result<()> {
    println!("{}", resolve_path(config_path)?.display());
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit(config_path: Option<&Path>) -> Result<()> {
    let path = resolve_path(config_path)?;

    // Ensure config exists
    if !path.exists() {
        Config::default().save_to(&path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    tracing::debug!(path = %path.display(), editor = %editor, "Opening config");

    std::process::Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}

fn resolve_path(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}
