//! Implementation of the `prcheck config` command.

use crate::cli::ConfigArgs;
use crate::config::Config;
use crate::error::Result;
use crate::runner::build_checks;

/// The YAML printed by `prcheck config`.
///
/// A given config file is loaded and its checks are built, so invalid
/// patterns are reported here rather than on the next run.
pub fn effective_config_yaml(args: &ConfigArgs) -> Result<String> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    build_checks(&config)?;
    config.to_yaml()
}

/// Execute the `prcheck config` command.
pub fn cmd_config(args: ConfigArgs) -> Result<()> {
    print!("{}", effective_config_yaml(&args)?);
    Ok(())
}
