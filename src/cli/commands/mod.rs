pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod projects;
pub mod report;
pub mod restore;
pub mod track;

use crate::config::{Config, Paths};
use crate::core::store::RecordStore;

/// Build the record store every data-touching command uses.
pub(crate) fn open_store(cfg: &Config, paths: &Paths) -> RecordStore {
    RecordStore::new(paths.data_file(), paths.backup_dir(), cfg.auto_backup)
}
