use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted application settings (`config.json`). Every key has a default so
/// older config files missing a key still load; the merged result is written
/// back the first time the file does not exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_true")]
    pub always_on_top: bool,
    #[serde(default = "default_true")]
    pub auto_backup: bool,
    #[serde(default = "default_backup_interval")]
    pub backup_interval_days: i64,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_true() -> bool {
    true
}
fn default_backup_interval() -> i64 {
    7
}
fn default_theme() -> String {
    "default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            always_on_top: true,
            auto_backup: true,
            backup_interval_days: default_backup_interval(),
            theme: default_theme(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn default_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timekeeper")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timekeeper")
        }
    }

    /// Load configuration from `<dir>/config.json`.
    ///
    /// A missing file yields the defaults, persisted immediately. A corrupt
    /// file also yields the defaults with a printed warning; configuration
    /// trouble must never abort the command that triggered the load.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            let cfg = Config::default();
            if let Err(e) = cfg.save(dir) {
                warning(format!("Failed to write default config: {}", e));
            }
            return cfg;
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!("Config file is corrupt, using defaults: {}", e));
                    Config::default()
                }
            },
            Err(e) => {
                warning(format!("Failed to read config, using defaults: {}", e));
                Config::default()
            }
        }
    }

    pub fn save(&self, dir: &Path) -> AppResult<()> {
        fs::create_dir_all(dir)?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(dir.join(CONFIG_FILE), json)?;
        Ok(())
    }
}

const CONFIG_FILE: &str = "config.json";

/// Resolved file locations for one invocation. The config directory and the
/// data file are overridable from the CLI (used heavily by the tests).
#[derive(Debug, Clone)]
pub struct Paths {
    pub config_dir: PathBuf,
    data_override: Option<PathBuf>,
}

impl Paths {
    pub fn new(config_dir: PathBuf, data_override: Option<PathBuf>) -> Self {
        Self {
            config_dir,
            data_override,
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    pub fn data_file(&self) -> PathBuf {
        match &self.data_override {
            Some(p) => p.clone(),
            None => self.config_dir.join("work_hours.json"),
        }
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.config_dir.join("backups")
    }

    pub fn projects_file(&self) -> PathBuf {
        self.config_dir.join("projects.json")
    }
}
