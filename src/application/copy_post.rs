//! Copy post use case

use crate::application::{PostDraft, PostStore};
use crate::error::{Result, TextiqError};
use crate::infrastructure::{Clipboard, KeyValueStore};

/// Format the post matching `id_prefix` and put it on the clipboard.
/// Returns the copied text.
pub fn copy_post<S: KeyValueStore>(
    store: &PostStore<S>,
    id_prefix: &str,
    clipboard: &dyn Clipboard,
) -> Result<String> {
    let text = store.find_by_prefix(id_prefix)?.formatted();
    clipboard.write_text(&text)?;
    Ok(text)
}

/// Copy an unsaved draft exactly as it would be saved.
/// A draft without a title is rejected before the clipboard is touched.
pub fn copy_draft(draft: &PostDraft, clipboard: &dyn Clipboard) -> Result<String> {
    if draft.title.trim().is_empty() {
        return Err(TextiqError::InvalidInput(
            "Title must not be empty".to_string(),
        ));
    }

    let text = draft.to_post().formatted();
    clipboard.write_text(&text)?;
    Ok(text)
}
