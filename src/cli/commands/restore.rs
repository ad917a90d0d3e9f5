use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::{Config, Paths};
use crate::core::clock::{Clock, SystemClock};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::table::Table;
use std::io::{Write, stdin, stdout};

pub fn handle(cmd: &Commands, cfg: &Config, paths: &Paths) -> AppResult<()> {
    if let Commands::Restore { list, file, yes } = cmd {
        let store = open_store(cfg, paths);
        let manager = store.backup_manager();

        if *list {
            let backups = manager.list_backups()?;
            if backups.is_empty() {
                info("No backup files found");
                return Ok(());
            }

            let mut table = Table::new(vec!["FILE", "KIND"]);
            for b in backups {
                table.add_row(vec![b.file_name, b.kind.label().to_string()]);
            }
            println!("{}", table.render());
            return Ok(());
        }

        let Some(name) = file else {
            return Err(AppError::Validation(
                "pass --file <NAME> to restore, or --list to see backups".to_string(),
            ));
        };

        if !*yes && !confirm(name)? {
            info("Restore cancelled");
            return Ok(());
        }

        let backup_path = manager.dir().join(name);
        manager.restore(&backup_path, store.data_file(), SystemClock.now())?;
        success(format!("Data restored from {}", name));
    }

    Ok(())
}

fn confirm(name: &str) -> AppResult<bool> {
    println!(
        "Restore from '{}'? This replaces your current data. [y/N]: ",
        name
    );
    print!("> ");
    stdout().flush().ok();

    let mut answer = String::new();
    stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
