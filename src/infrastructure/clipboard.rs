//! System clipboard integration

use crate::error::{Result, TextiqError};
use std::io::Write;
use std::process::{Command, Stdio};

/// Destination for copied post text
pub trait Clipboard {
    /// Replace the clipboard contents with plain text
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Clipboard backed by an external tool that reads stdin (pbcopy, xclip, ...)
pub struct CommandClipboard {
    command: String,
}

impl CommandClipboard {
    pub fn new(command: String) -> Self {
        CommandClipboard { command }
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> Result<(String, Vec<String>)> {
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| TextiqError::Clipboard("Clipboard command is empty".to_string()))?
            .to_string();
        let args = parts.map(|s| s.to_string()).collect();

        Ok((program, args))
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let (program, args) = self.parse_command()?;
        tracing::debug!(%program, "writing to clipboard");

        let mut child = Command::new(&program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                TextiqError::Clipboard(format!("Failed to launch '{}': {}", program, e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(|e| {
                TextiqError::Clipboard(format!("Failed to write to '{}': {}", program, e))
            })?;
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(TextiqError::Clipboard(format!(
                "'{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }
}
