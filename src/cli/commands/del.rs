use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::{Config, Paths};
use crate::core::clock::{Clock, SystemClock};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::io::{Write, stdin, stdout};

pub fn handle(cmd: &Commands, cfg: &Config, paths: &Paths) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !*yes && !confirm(id)? {
            info("Delete cancelled");
            return Ok(());
        }

        let store = open_store(cfg, paths);
        let removed = store.remove(id, SystemClock.now())?;
        success(format!(
            "Deleted {} ('{}', {})",
            removed.id, removed.project, removed.duration
        ));
    }

    Ok(())
}

fn confirm(id: &str) -> AppResult<bool> {
    println!("Delete entry '{}'? [y/N]: ", id);
    print!("> ");
    stdout().flush().ok();

    let mut answer = String::new();
    stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
