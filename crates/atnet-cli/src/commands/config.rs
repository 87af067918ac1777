//! Config command implementation.

use anyhow::{Context, Result};

use crate::cli::ConfigAction;
use crate::config::Config;
use crate::util::write_output;

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    let path = Config::path();
    match action {
        ConfigAction::Show => {
            let config = Config::load();
            let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            write_output(None, &content)?;
        }
        ConfigAction::Path => {
            write_output(None, &format!("{}\n", path.display()))?;
        }
        ConfigAction::Init => {
            if path.exists() {
                eprintln!("Config already exists at {}", path.display());
            } else {
                Config::default().save()?;
                eprintln!("Created config at {}", path.display());
            }
        }
    }
    Ok(())
}
