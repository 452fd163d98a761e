//! Data directory holding the store file and config

use crate::error::{Result, TextiqError};
use crate::infrastructure::{Config, FileStore};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Folder name used beneath the user's home directory
const DATA_DIR_NAME: &str = ".textiq";
/// Key-value document holding posts and vocabularies
const DEFAULTS_FILE: &str = "defaults.json";

/// File system location of all textiq state
#[derive(Debug, Clone)]
pub struct DataDir {
    pub root: PathBuf,
}

impl DataDir {
    /// Create a data directory handle with the given root
    pub fn new(root: PathBuf) -> Self {
        DataDir { root }
    }

    /// Locate the data directory.
    /// TEXTIQ_HOME wins, otherwise ~/.textiq
    pub fn discover() -> Result<Self> {
        if let Some(root) = std::env::var_os("TEXTIQ_HOME") {
            return Ok(DataDir::new(PathBuf::from(root)));
        }

        let base = BaseDirs::new().ok_or(TextiqError::NoHomeDirectory)?;
        Ok(DataDir::new(base.home_dir().join(DATA_DIR_NAME)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn defaults_path(&self) -> PathBuf {
        self.root.join(DEFAULTS_FILE)
    }

    /// Open the key-value document; created on first save
    pub fn open_defaults(&self) -> FileStore {
        FileStore::open(self.defaults_path())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }
}
