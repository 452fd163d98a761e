//! Domain layer - Posts, vocabularies and formatting

pub mod format;
pub mod post;
pub mod vocabulary;

pub use format::{format_post, format_preview, SPACER};
pub use post::{Post, PostId};
pub use vocabulary::{normalize_hashtag, Vocabulary};
