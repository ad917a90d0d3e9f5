use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::{Config, Paths};
use crate::core::report::project_totals;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config, paths: &Paths) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        report,
    } = cmd
    {
        let out = expand_tilde(file);
        let store = open_store(cfg, paths);
        let outcome = store.load();
        if let Some(w) = outcome.warning {
            warning(w);
        }

        if *report {
            let totals = project_totals(&outcome.entries);
            match format {
                ExportFormat::Csv => csv::write_report(&out, &totals)?,
                ExportFormat::Json => {
                    return Err(AppError::Validation(
                        "report export supports --format csv only".to_string(),
                    ));
                }
            }
            notify_export_success("Report", &out);
        } else {
            match format {
                ExportFormat::Csv => csv::write_entries(&out, &outcome.entries)?,
                ExportFormat::Json => json::write_entries(&out, &outcome.entries)?,
            }
            notify_export_success("Sessions", &out);
        }
    }

    Ok(())
}
