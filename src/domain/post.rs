//! Post model and identity

use crate::domain::format::format_post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque post identifier, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(Uuid);

impl PostId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        PostId(Uuid::new_v4())
    }

    /// First 8 hex digits, used for display and prefix lookup
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }

    /// Check whether this id starts with the given prefix.
    /// Hyphens are ignored and matching is case-insensitive.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let wanted: String = prefix
            .chars()
            .filter(|c| *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        !wanted.is_empty() && self.0.simple().to_string().starts_with(&wanted)
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for PostId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(PostId)
    }
}

/// A composed social-media post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// Film stock name, empty when none
    pub film: String,
    /// Free-form label, empty when none
    pub label: String,
    pub hashtags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a post with a fresh id, stamped with the current time
    pub fn new(
        title: impl Into<String>,
        film: impl Into<String>,
        label: impl Into<String>,
        hashtags: Vec<String>,
    ) -> Self {
        Post {
            id: PostId::new(),
            title: title.into(),
            film: film.into(),
            label: label.into(),
            hashtags,
            created_at: Utc::now(),
        }
    }

    /// The text block copied to the clipboard
    pub fn formatted(&self) -> String {
        format_post(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_posts_get_distinct_ids() {
        let a = Post::new("A", "", "", vec![]);
        let b = Post::new("A", "", "", vec![]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_short_id_is_prefix_of_full_id() {
        let id = PostId::new();
        let short = id.short();
        assert_eq!(short.len(), 8);
        assert!(id.to_string().starts_with(&short));
        assert!(id.matches_prefix(&short));
        assert!(id.matches_prefix(&short.to_uppercase()));
    }

    #[test]
    fn test_matches_prefix_ignores_hyphens() {
        let id: PostId = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
        assert!(id.matches_prefix("67e55044-10b1"));
        assert!(id.matches_prefix("67e5504410b1"));
        assert!(!id.matches_prefix("67e56"));
        assert!(!id.matches_prefix(""));
        assert!(!id.matches_prefix("-"));
    }

    #[test]
    fn test_serialized_field_names() {
        let post = Post::new("Sunset", "Kodak Gold 200", "", vec!["sunset".to_string()]);
        let value = serde_json::to_value(&post).unwrap();
        let object = value.as_object().unwrap();

        for key in ["id", "title", "film", "label", "hashtags", "createdAt"] {
            assert!(object.contains_key(key), "missing field {}", key);
        }
        assert_eq!(object["id"], serde_json::Value::String(post.id.to_string()));
    }

    #[test]
    fn test_id_survives_serde_round_trip() {
        let post = Post::new("Sunset", "", "travel", vec![]);
        let json = serde_json::to_string(&post).unwrap();
        let back: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(back, post);
    }
}
