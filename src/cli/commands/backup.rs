use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::{Config, Paths};
use crate::core::clock::{Clock, SystemClock};
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config, paths: &Paths) -> AppResult<()> {
    if let Commands::Backup { manual } = cmd {
        let store = open_store(cfg, paths);
        let manager = store.backup_manager();
        let now = SystemClock.now();

        let dest = if *manual {
            manager.manual_backup(store.data_file(), now)?
        } else {
            manager.auto_backup(store.data_file(), now)?
        };

        success(format!("Backup created: {}", dest.display()));
    }

    Ok(())
}
