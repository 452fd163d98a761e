//! Config management use case

use crate::error::{Result, TextiqError};
use crate::infrastructure::{Config, DataDir};

const VALID_KEYS: &str = "clipboard, hashtag_preview";

/// Service for reading and changing config.toml
pub struct ConfigService {
    data_dir: DataDir,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(data_dir: DataDir) -> Self {
        ConfigService { data_dir }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.data_dir.load_config()?;

        match key {
            "clipboard" => Ok(config.clipboard_command()),
            "hashtag_preview" => Ok(config.hashtag_preview.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.data_dir.load_config()?;

        match key {
            "clipboard" => {
                if value.trim().is_empty() {
                    return Err(TextiqError::Config(
                        "Clipboard command must not be empty".to_string(),
                    ));
                }
                config.clipboard = Some(value.trim().to_string());
            }
            "hashtag_preview" => {
                config.hashtag_preview = value.trim().parse().map_err(|_| {
                    TextiqError::Config(format!(
                        "Invalid hashtag_preview: '{}'. Expected a non-negative number",
                        value
                    ))
                })?;
            }
            _ => return Err(unknown_key(key)),
        }

        self.data_dir.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.data_dir.load_config()
    }
}

fn unknown_key(key: &str) -> TextiqError {
    TextiqError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        ConfigService::new(DataDir::new(temp.path().to_path_buf()))
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        assert_eq!(service(&temp).get("hashtag_preview").unwrap(), "5");
        assert!(!service(&temp).get("clipboard").unwrap().is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("clipboard", "wl-copy").unwrap();
        service.set("hashtag_preview", "8").unwrap();

        assert_eq!(service.get("clipboard").unwrap(), "wl-copy");
        assert_eq!(service.list().unwrap().hashtag_preview, 8);
    }

    #[test]
    fn test_setting_other_key_leaves_clipboard_unset() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("hashtag_preview", "2").unwrap();

        assert!(service.list().unwrap().clipboard.is_none());
        let content = std::fs::read_to_string(temp.path().join("config.toml")).unwrap();
        assert!(!content.contains("clipboard"));
    }

    #[test]
    fn test_set_invalid_number() {
        let temp = TempDir::new().unwrap();
        match service(&temp).set("hashtag_preview", "lots") {
            Err(TextiqError::Config(msg)) => assert!(msg.contains("hashtag_preview")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        match service(&temp).get("colour") {
            Err(TextiqError::Config(msg)) => {
                assert!(msg.contains("Unknown config key: 'colour'"));
                assert!(msg.contains("hashtag_preview"));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
        assert!(service(&temp).set("colour", "red").is_err());
    }
}
