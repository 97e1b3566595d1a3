use crate::cli::commands::ConfigCmd;
use crate::cli::ui;
use crate::config::DashgenConfig;
use crate::error::{DashgenError, Result};

/// Handle configuration inspection and maintenance
pub fn handle_config(config: &DashgenConfig, cmd: Option<ConfigCmd>) -> Result<()> {
    match cmd.unwrap_or(ConfigCmd::Show) {
        ConfigCmd::Show => {
            let rendered = toml::to_string_pretty(config).map_err(|e| DashgenError::Config {
                message: format!("Failed to serialize config: {}", e),
                path: None,
            })?;
            print!("{}", rendered);
            Ok(())
        }
        ConfigCmd::Reset => {
            DashgenConfig::default().save_global()?;
            ui::print_success("Configuration reset to defaults");
            Ok(())
        }
        ConfigCmd::Path => {
            println!("{}", DashgenConfig::global_config_path()?.display());
            Ok(())
        }
    }
}
