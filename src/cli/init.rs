//! Init command implementation.
//!
//! Writes a `tint.yaml` with the default settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::dialect::Dialect;
use crate::error::{Result, TintError};
use crate::output::{display_path, Printer};

/// Write a default tint.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Default dialect to record
    #[arg(long, short)]
    pub dialect: Option<String>,

    /// Overwrite existing tint.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(TintError::Io {
            path: config_path,
            message: format!("{} already exists", CONFIG_FILENAME),
        });
    }

    let config = Config {
        dialect: Dialect::resolve(args.dialect.as_deref())?.unwrap_or_default(),
        ..Config::default()
    };

    fs::write(&config_path, config.to_yaml()?).map_err(|e| TintError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.status("Created", &display_path(&config_path));
    Ok(())
}
