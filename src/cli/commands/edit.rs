use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::{Config, Paths};
use crate::core::clock::{Clock, SystemClock};
use crate::errors::{AppError, AppResult};
use crate::models::Invoiced;
use crate::ui::messages::success;
use crate::utils::time::parse_duration_to_seconds;

pub fn handle(cmd: &Commands, cfg: &Config, paths: &Paths) -> AppResult<()> {
    if let Commands::Edit {
        id,
        project,
        memo,
        duration,
        invoiced,
    } = cmd
    {
        if project.is_none() && memo.is_none() && duration.is_none() && invoiced.is_none() {
            return Err(AppError::Validation(
                "nothing to change, pass at least one of --project/--memo/--duration/--invoiced"
                    .to_string(),
            ));
        }

        let store = open_store(cfg, paths);
        let updated = store.update(
            id,
            |entry| {
                if let Some(p) = project {
                    entry.project = p.trim().to_string();
                }
                if let Some(m) = memo {
                    entry.memo = m.trim().to_string();
                }
                if let Some(d) = duration {
                    // The edited display string is lossy by contract; the
                    // second count derived from it is what gets stored.
                    entry.duration_seconds = parse_duration_to_seconds(d);
                }
                if let Some(i) = invoiced {
                    entry.invoiced = Invoiced::from_str_lenient(i);
                }
            },
            SystemClock.now(),
        )?;

        success(format!(
            "Updated {}: '{}' {} invoiced={}",
            updated.id, updated.project, updated.duration, updated.invoiced
        ));
    }

    Ok(())
}
