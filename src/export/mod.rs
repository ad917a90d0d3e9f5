pub mod csv;
pub mod import;
pub mod json;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{} exported to {}", label, path.display()));
}
