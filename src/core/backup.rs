//! Rotating backups of the data file.
//!
//! Backup files live in one directory and embed their kind and a
//! second-resolution timestamp in the name: `backup_<YYYYMMDD_HHMMSS>.json`
//! for automatic snapshots, `manual_backup_<...>.json` for user-requested
//! ones and `pre_restore_backup_<...>.json` for the safety snapshot taken
//! before a restore. Only automatic backups are subject to the retention cap.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

/// Automatic backups kept after pruning.
pub const RETENTION_CAP: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupKind {
    Auto,
    Manual,
    PreRestore,
}

impl BackupKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            BackupKind::Auto => "backup_",
            BackupKind::Manual => "manual_backup_",
            BackupKind::PreRestore => "pre_restore_backup_",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BackupKind::Auto => "auto",
            BackupKind::Manual => "manual",
            BackupKind::PreRestore => "pre-restore",
        }
    }

    fn from_file_name(name: &str) -> Option<Self> {
        // Longest prefix first: every kind ends in "backup_".
        if name.starts_with(BackupKind::PreRestore.prefix()) {
            Some(BackupKind::PreRestore)
        } else if name.starts_with(BackupKind::Manual.prefix()) {
            Some(BackupKind::Manual)
        } else if name.starts_with(BackupKind::Auto.prefix()) {
            Some(BackupKind::Auto)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct BackupInfo {
    pub file_name: String,
    pub kind: BackupKind,
}

impl BackupInfo {
    /// The `YYYYMMDD_HHMMSS` stamp embedded in the file name.
    fn stamp(&self) -> &str {
        self.file_name[self.kind.prefix().len()..].trim_end_matches(".json")
    }
}

pub struct BackupManager {
    dir: PathBuf,
}

impl BackupManager {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Snapshot `source` as an automatic backup, then prune the oldest
    /// automatic backups down to [`RETENTION_CAP`]. Callers on the save path
    /// downgrade any error from here to a warning; a failed backup must never
    /// abort the save that triggered it.
    pub fn auto_backup(&self, source: &Path, now: NaiveDateTime) -> AppResult<PathBuf> {
        let dest = self.copy_into(source, BackupKind::Auto, now)?;
        self.prune_auto_backups()?;
        Ok(dest)
    }

    /// Snapshot `source` on user request. Manual backups are never pruned.
    pub fn manual_backup(&self, source: &Path, now: NaiveDateTime) -> AppResult<PathBuf> {
        self.copy_into(source, BackupKind::Manual, now)
    }

    /// Replace `target` with the content of `backup_file`.
    ///
    /// If `target` exists, a pre-restore safety snapshot of it is taken
    /// first; when that snapshot cannot be written the restore aborts before
    /// `target` is touched.
    pub fn restore(
        &self,
        backup_file: &Path,
        target: &Path,
        now: NaiveDateTime,
    ) -> AppResult<()> {
        if !backup_file.exists() {
            return Err(AppError::Backup(format!(
                "backup file not found: {}",
                backup_file.display()
            )));
        }

        if target.exists() {
            self.copy_into(target, BackupKind::PreRestore, now)
                .map_err(|e| {
                    AppError::Backup(format!("pre-restore snapshot failed, aborting: {}", e))
                })?;
        }

        fs::copy(backup_file, target)?;
        Ok(())
    }

    /// All recognized backup files, newest first by their embedded
    /// timestamp, ties broken by file name.
    pub fn list_backups(&self) -> AppResult<Vec<BackupInfo>> {
        let mut found = Vec::new();
        if !self.dir.exists() {
            return Ok(found);
        }

        for dir_entry in fs::read_dir(&self.dir)? {
            let name = dir_entry?.file_name().to_string_lossy().to_string();
            if !name.ends_with(".json") {
                continue;
            }
            if let Some(kind) = BackupKind::from_file_name(&name) {
                found.push(BackupInfo {
                    file_name: name,
                    kind,
                });
            }
        }

        found.sort_by(|a, b| {
            b.stamp()
                .cmp(a.stamp())
                .then_with(|| b.file_name.cmp(&a.file_name))
        });
        Ok(found)
    }

    fn copy_into(
        &self,
        source: &Path,
        kind: BackupKind,
        now: NaiveDateTime,
    ) -> AppResult<PathBuf> {
        if !source.exists() {
            return Err(AppError::Backup(format!(
                "nothing to back up, file not found: {}",
                source.display()
            )));
        }

        fs::create_dir_all(&self.dir)?;
        let dest = self.dir.join(format!(
            "{}{}.json",
            kind.prefix(),
            now.format("%Y%m%d_%H%M%S")
        ));
        fs::copy(source, &dest)?;
        Ok(dest)
    }

    /// Delete the oldest automatic backups until at most [`RETENTION_CAP`]
    /// remain. Age order is the name-embedded timestamp, ties broken by plain
    /// lexical filename order, so a sort of the names is both.
    fn prune_auto_backups(&self) -> AppResult<()> {
        let mut auto_names: Vec<String> = fs::read_dir(&self.dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .filter(|n| {
                BackupKind::from_file_name(n) == Some(BackupKind::Auto) && n.ends_with(".json")
            })
            .collect();

        auto_names.sort();
        let excess = auto_names.len().saturating_sub(RETENTION_CAP);
        for old in auto_names.into_iter().take(excess) {
            fs::remove_file(self.dir.join(old))?;
        }
        Ok(())
    }
}
