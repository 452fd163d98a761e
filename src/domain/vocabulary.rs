//! Tag vocabularies: ordered lists of unique strings

use serde::{Deserialize, Serialize};

/// Film stocks offered before the user adds any of their own
pub const DEFAULT_FILMS: [&str; 10] = [
    "Kodak Gold 200",
    "Kodak Portra 400",
    "Kodak Portra 800",
    "Fuji C200",
    "Fuji Pro 400H",
    "Ilford HP5",
    "Kodak Tri-X",
    "Cinestill 800T",
    "Kodak Ektar 100",
    "Fuji Velvia 50",
];

/// Placeholder hashtags for a fresh install
pub const DEFAULT_HASHTAGS: [&str; 3] = ["example", "hashtags", "here"];

/// Strip leading `#` characters from a hashtag
pub fn normalize_hashtag(raw: &str) -> &str {
    raw.trim_start_matches('#')
}

/// Ordered list of unique strings (exact, case-sensitive matching)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    entries: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_films() -> Self {
        DEFAULT_FILMS.iter().copied().collect()
    }

    pub fn default_hashtags() -> Self {
        DEFAULT_HASHTAGS.iter().copied().collect()
    }

    /// Append an entry unless it is already present.
    /// Returns true if the vocabulary changed.
    pub fn insert(&mut self, entry: impl Into<String>) -> bool {
        let entry = entry.into();
        if self.contains(&entry) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove every matching entry. Returns true if anything was removed.
    pub fn remove(&mut self, entry: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e != entry);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }
}

impl From<Vec<String>> for Vocabulary {
    /// Duplicates collapse to their first occurrence
    fn from(entries: Vec<String>) -> Self {
        let mut vocabulary = Vocabulary::new();
        for entry in entries {
            vocabulary.insert(entry);
        }
        vocabulary
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.entries
    }
}

impl<'a> FromIterator<&'a str> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
            .into()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
