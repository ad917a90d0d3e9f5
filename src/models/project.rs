use serde::{Deserialize, Serialize};

/// A catalog entry from `projects.json`. Sessions reference projects through
/// `TimeEntry::project_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_invoice")]
    pub invoice: String,
    #[serde(default)]
    pub description: String,
}

fn default_status() -> String {
    "Active".to_string()
}

fn default_invoice() -> String {
    "No".to_string()
}

impl Project {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            status: default_status(),
            invoice: default_invoice(),
            description: description.to_string(),
        }
    }

    /// The project seeded into an empty catalog on first run.
    pub fn default_project() -> Self {
        Self::new("default", "Default Project", "Default project for time tracking")
    }
}
