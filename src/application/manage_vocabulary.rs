//! Film, label and hashtag vocabulary use cases

use crate::application::PostStore;
use crate::domain::normalize_hashtag;
use crate::error::{Result, TextiqError};
use crate::infrastructure::KeyValueStore;

/// Which vocabulary an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyKind {
    Films,
    Labels,
    Hashtags,
}

impl VocabularyKind {
    /// Singular noun for messages
    pub fn noun(&self) -> &'static str {
        match self {
            VocabularyKind::Films => "film",
            VocabularyKind::Labels => "label",
            VocabularyKind::Hashtags => "hashtag",
        }
    }
}

/// Service for managing the tag vocabularies
pub struct VocabularyService<'a, S: KeyValueStore> {
    store: &'a mut PostStore<S>,
}

impl<'a, S: KeyValueStore> VocabularyService<'a, S> {
    pub fn new(store: &'a mut PostStore<S>) -> Self {
        VocabularyService { store }
    }

    /// Entries of one vocabulary, in order
    pub fn list(&self, kind: VocabularyKind) -> Vec<String> {
        let vocabulary = match kind {
            VocabularyKind::Films => self.store.films(),
            VocabularyKind::Labels => self.store.labels(),
            VocabularyKind::Hashtags => self.store.hashtags(),
        };
        vocabulary.iter().cloned().collect()
    }

    /// Add a trimmed entry. Returns the stored form and whether it was new.
    pub fn add(&mut self, kind: VocabularyKind, raw: &str) -> Result<(String, bool)> {
        let entry = clean_entry(kind, raw)?;
        let added = match kind {
            VocabularyKind::Films => self.store.add_film(&entry),
            VocabularyKind::Labels => self.store.add_label(&entry),
            VocabularyKind::Hashtags => self.store.add_hashtag(&entry),
        };
        Ok((entry, added))
    }

    /// Remove a hashtag from the vocabulary. Returns the cleaned name and whether it was present.
    pub fn remove_hashtag(&mut self, raw: &str) -> Result<(String, bool)> {
        let entry = clean_entry(VocabularyKind::Hashtags, raw)?;
        let removed = self.store.remove_hashtag(&entry);
        Ok((entry, removed))
    }

    pub fn clear_labels(&mut self) {
        self.store.clear_labels();
    }
}

fn clean_entry(kind: VocabularyKind, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let entry = match kind {
        VocabularyKind::Hashtags => normalize_hashtag(trimmed).trim(),
        _ => trimmed,
    };

    if entry.is_empty() {
        return Err(TextiqError::InvalidInput(format!(
            "The {} name must not be empty",
            kind.noun()
        )));
    }

    Ok(entry.to_string())
}
