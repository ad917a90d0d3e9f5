use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::{Config, Paths};
use crate::core::clock::{Clock, SystemClock};
use crate::core::projects::ProjectCatalog;
use crate::core::timer::SessionTimer;
use crate::errors::AppResult;
use crate::models::TimeEntry;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::format_seconds;
use std::io::{BufRead, Write, stdin, stdout};

pub fn handle(cmd: &Commands, cfg: &Config, paths: &Paths) -> AppResult<()> {
    if let Commands::Track {
        project,
        memo,
        project_id,
    } = cmd
    {
        // A bad catalog id should fail before the timer starts.
        if let Some(id) = project_id {
            ProjectCatalog::new(paths.projects_file()).get(id)?;
        }

        let clock = SystemClock;
        let store = open_store(cfg, paths);

        let mut timer = SessionTimer::new();
        timer.start(project, clock.now())?;

        info(format!("Tracking '{}'", project.trim()));
        println!("Commands: p = pause, r = resume, e = elapsed, s = stop & save");

        let input = stdin();
        let mut line = String::new();
        loop {
            print!("> ");
            stdout().flush().ok();

            line.clear();
            let bytes = input.lock().read_line(&mut line)?;
            // EOF stops and saves, so piped input never loses a session.
            let command = if bytes == 0 { "s" } else { line.trim() };

            match command {
                "p" | "pause" => match timer.pause(clock.now()) {
                    Ok(()) => info("Timer paused"),
                    Err(e) => warning(e),
                },
                "r" | "resume" => match timer.resume(clock.now()) {
                    Ok(()) => info("Timer resumed"),
                    Err(e) => warning(e),
                },
                "e" | "elapsed" | "" => {
                    println!(
                        "Elapsed: {}",
                        format_seconds(timer.current_elapsed_seconds(clock.now()))
                    );
                }
                "s" | "stop" | "q" => {
                    let summary = timer.stop(clock.now())?;
                    let duration = format_seconds(summary.duration_seconds);
                    let entry =
                        TimeEntry::from_session(&summary, project, memo, project_id.clone());
                    let id = store.append(entry, clock.now())?;
                    success(format!(
                        "Session saved: {} ({} on '{}')",
                        id,
                        duration,
                        project.trim()
                    ));
                    break;
                }
                other => warning(format!("Unknown command: {}", other)),
            }
        }
    }

    Ok(())
}
