//! Runtime configuration resolved from flags, environment and platform dirs.

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "weekgrid";
const DB_FILE_NAME: &str = "weekgrid.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// Resolved on-disk locations and log level for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    /// Builds the configuration. `data_dir` falls back to the platform data
    /// directory; relative paths are anchored at the current directory.
    pub fn resolve(data_dir: Option<PathBuf>, log_level: Option<String>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .context("no platform data directory found; pass --data-dir")?,
        };
        let data_dir = absolutize(&data_dir)?;

        Ok(Self {
            db_path: data_dir.join(DB_FILE_NAME),
            log_dir: data_dir.join(LOG_DIR_NAME),
            data_dir,
            log_level: log_level
                .unwrap_or_else(|| weekgrid_core::default_log_level().to_string()),
        })
    }

    /// Creates the data directory when missing.
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir).with_context(|| {
            format!(
                "failed to create data directory {}",
                self.data_dir.display()
            )
        })
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(cwd.join(path))
}
