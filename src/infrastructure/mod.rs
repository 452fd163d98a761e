//! Infrastructure layer - External I/O and persistence

pub mod clipboard;
pub mod config;
pub mod defaults;
pub mod repository;

pub use clipboard::{Clipboard, CommandClipboard};
pub use config::Config;
pub use defaults::{FileStore, KeyValueStore, MemoryStore};
pub use repository::DataDir;
