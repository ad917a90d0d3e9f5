use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::{Config, Paths};
use crate::core::report::project_totals;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config, paths: &Paths) -> AppResult<()> {
    if let Commands::Report = cmd {
        let store = open_store(cfg, paths);
        let outcome = store.load();
        if let Some(w) = outcome.warning {
            warning(w);
        }

        let totals = project_totals(&outcome.entries);
        if totals.is_empty() {
            info("No sessions recorded");
            return Ok(());
        }

        let mut table = Table::new(vec!["PROJECT", "HOURS", "SECONDS", "ENTRIES"]);
        for t in &totals {
            table.add_row(vec![
                t.project.clone(),
                t.total_hours(),
                t.total_seconds.to_string(),
                t.entry_count.to_string(),
            ]);
        }
        println!("{}", table.render());
    }

    Ok(())
}
