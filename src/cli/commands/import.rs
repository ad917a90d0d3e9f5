use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::{Config, Paths};
use crate::core::clock::{Clock, SystemClock};
use crate::errors::AppResult;
use crate::export::import::read_entries;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config, paths: &Paths) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let outcome = read_entries(&expand_tilde(file))?;

        if outcome.skipped > 0 {
            warning(format!(
                "Skipped {} row(s) without a project or a valid start_time",
                outcome.skipped
            ));
        }

        if outcome.entries.is_empty() {
            warning("No valid rows found in the CSV file");
            return Ok(());
        }

        let store = open_store(cfg, paths);
        let count = store.append_all(outcome.entries, SystemClock.now())?;
        success(format!("Imported {} entries from {}", count, file));
    }

    Ok(())
}
