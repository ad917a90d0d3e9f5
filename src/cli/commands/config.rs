use crate::cli::parser::Commands;
use crate::config::{Config, Paths};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config, paths: &Paths) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        set_auto_backup,
        set_theme,
    } = cmd
    {
        let mut cfg = cfg.clone();
        let mut changed = false;

        if let Some(value) = set_auto_backup {
            cfg.auto_backup = match value.trim().to_lowercase().as_str() {
                "on" | "true" | "yes" => true,
                "off" | "false" | "no" => false,
                other => {
                    return Err(AppError::Validation(format!(
                        "expected on/off for --set-auto-backup, got '{}'",
                        other
                    )));
                }
            };
            changed = true;
        }

        if let Some(theme) = set_theme {
            cfg.theme = theme.trim().to_string();
            changed = true;
        }

        if changed {
            cfg.save(&paths.config_dir)?;
            success(format!("Configuration saved: {}", paths.config_file().display()));
        }

        if *print_config || !changed {
            let content =
                fs::read_to_string(paths.config_file()).map_err(|_| AppError::Config(
                    "failed to read the configuration file".to_string(),
                ))?;
            println!("{}", content);
        }
    }

    Ok(())
}
