//! Key-value persistence for store state

use crate::error::Result;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Key holding the serialized post records
pub const POSTS_KEY: &str = "SavedPosts";
/// Key holding the film vocabulary
pub const FILMS_KEY: &str = "AvailableFilms";
/// Key holding the label vocabulary
pub const LABELS_KEY: &str = "AvailableLabels";
/// Key holding the hashtag vocabulary
pub const HASHTAGS_KEY: &str = "AvailableHashtags";

/// Abstract key-value backend holding self-describing values
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<Value>;

    /// Stage a value under `key`
    fn set(&mut self, key: &str, value: Value);

    /// Write staged values to durable storage
    fn flush(&mut self) -> Result<()>;
}

/// Volatile backend, used in tests and previews
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Map<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// JSON file backend: one object whose members are the keys
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl FileStore {
    /// Open the file at `path`. A missing or unreadable file opens empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::read_values(&path) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable defaults file");
                Map::new()
            }
        };
        tracing::debug!(path = %path.display(), keys = values.len(), "opened defaults file");
        FileStore { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_values(path: &Path) -> Result<Map<String, Value>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Value>(&contents)? {
            Value::Object(values) => Ok(values),
            other => {
                tracing::warn!(path = %path.display(), kind = ?other, "defaults file is not a JSON object");
                Ok(Map::new())
            }
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(&self.values)?;

        // Write beside the target, then rename over it
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), "flushed defaults file");
        Ok(())
    }
}
