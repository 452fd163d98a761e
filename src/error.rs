//! Error types for textiq

use thiserror::Error;

/// Main error type for textiq application
#[derive(Debug, Error)]
pub enum TextiqError {
    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Ambiguous post id '{0}' matches {1} posts")]
    AmbiguousPostId(String, usize),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not determine the home directory")]
    NoHomeDirectory,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TextiqError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TextiqError::PostNotFound(_) => 2,
            TextiqError::AmbiguousPostId(_, _) => 3,
            TextiqError::InvalidInput(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TextiqError::PostNotFound(id) => {
                format!(
                    "No post matches id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'textiq list' to see post ids\n\
                    • The first few characters of an id are enough (e.g., 3f2a9c1d)",
                    id
                )
            }
            TextiqError::AmbiguousPostId(id, count) => {
                format!(
                    "Id prefix '{}' matches {} posts\n\n\
                    Suggestions:\n\
                    • Type more characters of the id\n\
                    • Use 'textiq list' to see the full short ids",
                    id, count
                )
            }
            TextiqError::Clipboard(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that the clipboard tool is installed and in PATH\n\
                    • Set TEXTIQ_CLIPBOARD environment variable (e.g., export TEXTIQ_CLIPBOARD=xclip)\n\
                    • Configure clipboard: textiq config clipboard 'wl-copy'\n\
                    • Use 'textiq show <ID>' and copy the text by hand",
                    msg
                )
            }
            TextiqError::NoHomeDirectory => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Set TEXTIQ_HOME environment variable to a data directory",
                    self
                )
            }
            TextiqError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: textiq config hashtag_preview 8",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TextiqError
pub type Result<T> = std::result::Result<T, TextiqError>;
