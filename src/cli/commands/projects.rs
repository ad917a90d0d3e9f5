use crate::cli::parser::Commands;
use crate::config::Paths;
use crate::core::projects::ProjectCatalog;
use crate::errors::AppResult;
use crate::models::Project;
use crate::ui::messages::success;
use crate::utils::table::{Table, truncate};

pub fn handle(cmd: &Commands, paths: &Paths) -> AppResult<()> {
    if let Commands::Projects {
        add,
        id,
        description,
    } = cmd
    {
        let catalog = ProjectCatalog::new(paths.projects_file());

        if let Some(name) = add {
            let id = id
                .clone()
                .unwrap_or_else(|| name.trim().to_lowercase().replace(' ', "-"));
            let project = Project::new(&id, name.trim(), description.as_deref().unwrap_or(""));
            catalog.add(project)?;
            success(format!("Added project '{}' (id: {})", name.trim(), id));
            return Ok(());
        }

        let mut table = Table::new(vec!["ID", "NAME", "STATUS", "DESCRIPTION"]);
        for p in catalog.load() {
            table.add_row(vec![
                p.id,
                p.name,
                p.status,
                truncate(&p.description, 48),
            ]);
        }
        println!("{}", table.render());
    }

    Ok(())
}
