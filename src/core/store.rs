//! Durable storage for the list of time entries.
//!
//! The store has load/replace-all semantics: every mutation is a full
//! load-modify-save cycle over the JSON array in the data file. That makes it
//! single-writer by construction; there is no file locking and no protection
//! against a concurrent process writing the same file, an accepted constraint
//! for a single-user tool.

use crate::core::backup::BackupManager;
use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use crate::ui::messages::warning;
use chrono::NaiveDateTime;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Recoverable signal that the data file existed but did not parse. The
/// caller warns the user and continues with an empty list; a corrupt file
/// must never crash a session in progress.
#[derive(Debug, Clone)]
pub struct CorruptDataWarning(pub String);

impl fmt::Display for CorruptDataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data file could not be read, starting empty: {}", self.0)
    }
}

pub struct LoadOutcome {
    pub entries: Vec<TimeEntry>,
    pub warning: Option<CorruptDataWarning>,
}

pub struct RecordStore {
    data_file: PathBuf,
    backup: BackupManager,
    auto_backup: bool,
}

impl RecordStore {
    pub fn new(data_file: PathBuf, backup_dir: PathBuf, auto_backup: bool) -> Self {
        Self {
            data_file,
            backup: BackupManager::new(backup_dir),
            auto_backup,
        }
    }

    pub fn backup_manager(&self) -> &BackupManager {
        &self.backup
    }

    pub fn data_file(&self) -> &PathBuf {
        &self.data_file
    }

    /// Read all entries. A missing file is an empty store, not an error; a
    /// present-but-malformed file yields an empty list plus a
    /// [`CorruptDataWarning`]. Nothing throws past this boundary.
    pub fn load(&self) -> LoadOutcome {
        if !self.data_file.exists() {
            return LoadOutcome {
                entries: Vec::new(),
                warning: None,
            };
        }

        let content = match fs::read_to_string(&self.data_file) {
            Ok(c) => c,
            Err(e) => {
                return LoadOutcome {
                    entries: Vec::new(),
                    warning: Some(CorruptDataWarning(e.to_string())),
                };
            }
        };

        match serde_json::from_str::<Vec<TimeEntry>>(&content) {
            Ok(mut entries) => {
                backfill_ids(&mut entries);
                LoadOutcome {
                    entries,
                    warning: None,
                }
            }
            Err(e) => LoadOutcome {
                entries: Vec::new(),
                warning: Some(CorruptDataWarning(e.to_string())),
            },
        }
    }

    /// Serialize the full list, atomically replacing the data file: the JSON
    /// is written to a temp path in the same directory and renamed over the
    /// old file, so no observer sees a half-written store and a failed write
    /// leaves the previous content untouched.
    ///
    /// After a successful write, triggers an automatic backup when enabled.
    /// Backup trouble is downgraded to a printed warning; it never fails the
    /// save that triggered it.
    pub fn save(&self, entries: &mut [TimeEntry], now: NaiveDateTime) -> AppResult<()> {
        for entry in entries.iter_mut() {
            entry.normalize();
        }

        if let Some(parent) = self.data_file.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&entries)?;
        let tmp = self.data_file.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &self.data_file) {
            // Don't leave the orphaned temp file behind.
            fs::remove_file(&tmp).ok();
            return Err(e.into());
        }

        if self.auto_backup
            && let Err(e) = self.backup.auto_backup(&self.data_file, now)
        {
            warning(format!("Auto-backup failed: {}", e));
        }

        Ok(())
    }

    /// Append one entry, assigning it a fresh id, and persist. Returns the
    /// assigned id.
    pub fn append(&self, mut entry: TimeEntry, now: NaiveDateTime) -> AppResult<String> {
        let mut entries = self.load_warned();
        if entry.id.is_empty() {
            entry.id = next_id(&entries);
        }
        let id = entry.id.clone();
        entries.push(entry);
        self.save(&mut entries, now)?;
        Ok(id)
    }

    /// Mutate the entry with the given id and persist.
    pub fn update<F>(&self, id: &str, apply: F, now: NaiveDateTime) -> AppResult<TimeEntry>
    where
        F: FnOnce(&mut TimeEntry),
    {
        let mut entries = self.load_warned();
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::UnknownEntry(id.to_string()))?;

        apply(entry);
        let updated = entry.clone();
        self.save(&mut entries, now)?;
        Ok(updated)
    }

    /// Delete the entry with the given id and persist. Returns the removed
    /// entry.
    pub fn remove(&self, id: &str, now: NaiveDateTime) -> AppResult<TimeEntry> {
        let mut entries = self.load_warned();
        let pos = entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::UnknownEntry(id.to_string()))?;

        let removed = entries.remove(pos);
        self.save(&mut entries, now)?;
        Ok(removed)
    }

    /// Append many entries at once (CSV import), assigning fresh ids.
    /// Returns the number appended.
    pub fn append_all(
        &self,
        imported: Vec<TimeEntry>,
        now: NaiveDateTime,
    ) -> AppResult<usize> {
        let mut entries = self.load_warned();
        let count = imported.len();
        for mut entry in imported {
            entry.id = next_id(&entries);
            entries.push(entry);
        }
        self.save(&mut entries, now)?;
        Ok(count)
    }

    /// Load for a mutation cycle, printing the corrupt-data warning if any.
    fn load_warned(&self) -> Vec<TimeEntry> {
        let outcome = self.load();
        if let Some(w) = outcome.warning {
            warning(w);
        }
        outcome.entries
    }
}

/// Mint the next id: `e<N>` where N is one past the highest numeric id in the
/// store. Short enough to type for `edit`/`del`, stable across reloads.
/// Ids are user-visible and the file is hand-editable, so an absurd numeric
/// id saturates instead of overflowing.
fn next_id(entries: &[TimeEntry]) -> String {
    let max = entries
        .iter()
        .filter_map(|e| e.id.strip_prefix('e'))
        .filter_map(|n| n.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("e{}", max.saturating_add(1))
}

/// Entries from files written before ids existed get one assigned, in file
/// order, so every loaded entry is addressable.
fn backfill_ids(entries: &mut Vec<TimeEntry>) {
    let missing: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.id.is_empty())
        .map(|(i, _)| i)
        .collect();

    for idx in missing {
        let id = next_id(entries);
        entries[idx].id = id;
    }
}
