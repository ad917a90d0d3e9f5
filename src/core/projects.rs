//! The project catalog (`projects.json`): small CRUD used to label sessions
//! through `TimeEntry::project_id`.

use crate::errors::{AppError, AppResult};
use crate::models::Project;
use crate::ui::messages::warning;
use std::fs;
use std::path::PathBuf;

pub struct ProjectCatalog {
    file: PathBuf,
}

impl ProjectCatalog {
    pub fn new(file: PathBuf) -> Self {
        Self { file }
    }

    /// Load the catalog. A missing file seeds one default project and
    /// persists it; a corrupt file yields an empty catalog with a warning,
    /// mirroring the data-store recovery policy.
    pub fn load(&self) -> Vec<Project> {
        if !self.file.exists() {
            let seeded = vec![Project::default_project()];
            if let Err(e) = self.save(&seeded) {
                warning(format!("Failed to seed project catalog: {}", e));
            }
            return seeded;
        }

        let content = match fs::read_to_string(&self.file) {
            Ok(c) => c,
            Err(e) => {
                warning(format!("Failed to read project catalog: {}", e));
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Project>>(&content) {
            Ok(projects) => projects,
            Err(e) => {
                warning(format!("Project catalog is corrupt, ignoring it: {}", e));
                Vec::new()
            }
        }
    }

    pub fn save(&self, projects: &[Project]) -> AppResult<()> {
        if let Some(parent) = self.file.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(projects)?;
        fs::write(&self.file, json)?;
        Ok(())
    }

    pub fn get(&self, id: &str) -> AppResult<Project> {
        self.load()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::UnknownProject(id.to_string()))
    }

    pub fn add(&self, project: Project) -> AppResult<()> {
        if project.id.trim().is_empty() || project.name.trim().is_empty() {
            return Err(AppError::Validation(
                "project id and name are required".to_string(),
            ));
        }

        let mut projects = self.load();
        if projects.iter().any(|p| p.id == project.id) {
            return Err(AppError::Validation(format!(
                "project id '{}' already exists",
                project.id
            )));
        }

        projects.push(project);
        self.save(&projects)
    }
}
