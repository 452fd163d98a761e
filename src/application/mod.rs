//! Application layer - Use cases and orchestration

pub mod compose;
pub mod copy_post;
pub mod manage_config;
pub mod manage_vocabulary;
pub mod post_store;

pub use compose::{ComposeService, PostDraft, PostEdit};
pub use copy_post::{copy_draft, copy_post};
pub use manage_config::ConfigService;
pub use manage_vocabulary::{VocabularyKind, VocabularyService};
pub use post_store::{PostStore, StoreEvent};
