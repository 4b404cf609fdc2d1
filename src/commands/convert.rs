//! Convert subcommand handler

use std::path::Path;

use anyhow::{Context, Result};

use irclog::cli::ConvertArgs;
use irclog::{convert_file, Config, ConvertOptions};

/// Convert `--log` into `--output`. Flags can only switch behaviors on;
/// everything else comes from the config file.
pub fn handle(args: &ConvertArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::resolve(config_path)?;

    let mut options = ConvertOptions::from_config(&config);
    options.align |= args.align;
    options.include_private |= args.include_private;
    options.parallel |= args.parallel;

    convert_file(&args.log, &args.output, &options).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            args.log.display(),
            args.output.display()
        )
    })?;

    Ok(())
}
