//! Configuration management

use crate::error::{Result, TextiqError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Config file name inside the data directory
pub const CONFIG_FILE: &str = "config.toml";

/// Hashtags shown per post in list output
pub const DEFAULT_HASHTAG_PREVIEW: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Command receiving the post text on stdin; detected per platform when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clipboard: Option<String>,
    pub hashtag_preview: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            clipboard: None,
            hashtag_preview: DEFAULT_HASHTAG_PREVIEW,
        }
    }
}

impl Config {
    /// Load config from config.toml in the given directory.
    /// A missing file yields defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Config::default());
            }
            Err(e) => return Err(TextiqError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| TextiqError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TextiqError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Configured clipboard command, or the platform's tool
    pub fn clipboard_command(&self) -> String {
        self.clipboard
            .clone()
            .unwrap_or_else(Self::detect_default_clipboard)
    }

    /// Get the clipboard command, checking the environment first
    pub fn get_clipboard(&self) -> String {
        std::env::var("TEXTIQ_CLIPBOARD").unwrap_or_else(|_| self.clipboard_command())
    }

    /// Pick the platform's clipboard tool
    fn detect_default_clipboard() -> String {
        if cfg!(target_os = "macos") {
            "pbcopy".to_string()
        } else if cfg!(windows) {
            "clip".to_string()
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            "wl-copy".to_string()
        } else {
            "xclip -selection clipboard".to_string()
        }
    }
}
