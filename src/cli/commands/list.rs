use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::{Config, Paths};
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::table::{Table, truncate};
use crate::utils::time::format_timestamp;

pub fn handle(cmd: &Commands, cfg: &Config, paths: &Paths) -> AppResult<()> {
    if let Commands::List { project } = cmd {
        let store = open_store(cfg, paths);
        let outcome = store.load();
        if let Some(w) = outcome.warning {
            warning(w);
        }

        let mut table = Table::new(vec![
            "ID", "PROJECT", "START", "STOP", "DURATION", "INVOICED", "MEMO",
        ]);
        for entry in &outcome.entries {
            if let Some(filter) = project
                && !entry.project.eq_ignore_ascii_case(filter)
            {
                continue;
            }
            table.add_row(vec![
                entry.id.clone(),
                truncate(&entry.project, 24),
                format_timestamp(&entry.start_time),
                format_timestamp(&entry.stop_time),
                entry.duration.clone(),
                entry.invoiced.to_string(),
                truncate(&entry.memo, 40),
            ]);
        }

        if table.is_empty() {
            info("No sessions recorded");
        } else {
            println!("{}", table.render());
        }
    }

    Ok(())
}
