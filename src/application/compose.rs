//! Compose, edit and delete posts use cases

use crate::application::PostStore;
use crate::domain::{format_preview, normalize_hashtag, Post, SPACER};
use crate::error::{Result, TextiqError};
use crate::infrastructure::KeyValueStore;

/// Editor form contents for a post that has not been saved yet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub film: String,
    pub label: String,
    pub hashtags: Vec<String>,
    /// Append the platform spacer to the title
    pub spacer: bool,
}

impl PostDraft {
    pub fn new(title: impl Into<String>) -> Self {
        PostDraft {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Build a post from the draft without validating it
    pub fn to_post(&self) -> Post {
        Post::new(
            clean_title(&self.title, self.spacer),
            self.film.trim(),
            self.label.trim(),
            normalize_hashtags(&self.hashtags),
        )
    }

    /// Text shown for the draft before it is saved
    pub fn preview(&self) -> String {
        format_preview(&self.to_post())
    }
}

/// Field changes applied to an existing post
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostEdit {
    pub title: Option<String>,
    /// `Some("")` clears the film
    pub film: Option<String>,
    /// `Some("")` clears the label
    pub label: Option<String>,
    /// Replaces the whole hashtag list
    pub hashtags: Option<Vec<String>>,
    pub add_hashtags: Vec<String>,
    pub remove_hashtags: Vec<String>,
    pub spacer: bool,
}

/// Strip leading `#`, drop blanks and collapse duplicates, keeping order
pub fn normalize_hashtags(raw: &[String]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw {
        let tag = normalize_hashtag(tag.trim()).trim();
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

fn clean_title(title: &str, spacer: bool) -> String {
    let title = title.trim();
    if spacer {
        format!("{}{}", title, SPACER)
    } else {
        title.to_string()
    }
}

/// Service for creating and changing posts
pub struct ComposeService<'a, S: KeyValueStore> {
    store: &'a mut PostStore<S>,
}

impl<'a, S: KeyValueStore> ComposeService<'a, S> {
    pub fn new(store: &'a mut PostStore<S>) -> Self {
        ComposeService { store }
    }

    /// Save a draft as a new post (newest first)
    pub fn create(&mut self, draft: &PostDraft) -> Result<Post> {
        if draft.title.trim().is_empty() {
            return Err(TextiqError::InvalidInput(
                "Title must not be empty".to_string(),
            ));
        }

        let post = draft.to_post();
        self.register_vocabulary(&post);
        self.store.add_post(post.clone());

        tracing::info!(id = %post.id, "created post");
        Ok(post)
    }

    /// Apply an edit to the post matching `id_prefix`, keeping id and creation time
    pub fn edit(&mut self, id_prefix: &str, edit: &PostEdit) -> Result<Post> {
        let mut post = self.store.find_by_prefix(id_prefix)?.clone();

        if let Some(title) = &edit.title {
            if title.trim().is_empty() {
                return Err(TextiqError::InvalidInput(
                    "Title must not be empty".to_string(),
                ));
            }
            post.title = clean_title(title, edit.spacer);
        } else if edit.spacer {
            post.title.push_str(SPACER);
        }

        if let Some(film) = &edit.film {
            post.film = film.trim().to_string();
        }
        if let Some(label) = &edit.label {
            post.label = label.trim().to_string();
        }

        if let Some(hashtags) = &edit.hashtags {
            post.hashtags = normalize_hashtags(hashtags);
        }
        for tag in normalize_hashtags(&edit.add_hashtags) {
            if !post.hashtags.contains(&tag) {
                post.hashtags.push(tag);
            }
        }
        let removed = normalize_hashtags(&edit.remove_hashtags);
        post.hashtags.retain(|tag| !removed.contains(tag));

        self.register_vocabulary(&post);
        self.store.update_post(post.clone());

        tracing::info!(id = %post.id, "updated post");
        Ok(post)
    }

    /// Delete the post matching `id_prefix`, returning it
    pub fn delete(&mut self, id_prefix: &str) -> Result<Post> {
        let post = self.store.find_by_prefix(id_prefix)?.clone();
        self.store.delete_post(&post.id);

        tracing::info!(id = %post.id, "deleted post");
        Ok(post)
    }

    /// Add values picked on the post to their vocabularies
    fn register_vocabulary(&mut self, post: &Post) {
        if !post.film.is_empty() {
            self.store.add_film(&post.film);
        }
        if !post.label.is_empty() {
            self.store.add_label(&post.label);
        }
        for tag in &post.hashtags {
            self.store.add_hashtag(tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;
    use pretty_assertions::assert_eq;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn fresh() -> PostStore<MemoryStore> {
        PostStore::load(MemoryStore::new())
    }

    #[test]
    fn test_create_sunset_post() {
        let mut store = fresh();
        let draft = PostDraft {
            title: "Sunset".to_string(),
            film: "Kodak Gold 200".to_string(),
            hashtags: tags(&["sunset", "film"]),
            ..Default::default()
        };

        let post = ComposeService::new(&mut store).create(&draft).unwrap();

        assert_eq!(
            post.formatted(),
            "「 Sunset 」 Kodak Gold 200\n.\n.\n.\n#sunset #film"
        );
        assert_eq!(store.posts()[0].id, post.id);
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let mut store = fresh();
        let result = ComposeService::new(&mut store).create(&PostDraft::new("   "));

        assert!(matches!(result, Err(TextiqError::InvalidInput(_))));
        assert!(store.posts().is_empty());
    }

    #[test]
    fn test_create_registers_new_vocabulary() {
        let mut store = fresh();
        let draft = PostDraft {
            title: "Harbour".to_string(),
            film: "Lomo 800".to_string(),
            label: "travel".to_string(),
            hashtags: tags(&["#sea", "example"]),
            ..Default::default()
        };

        ComposeService::new(&mut store).create(&draft).unwrap();

        assert!(store.films().contains("Lomo 800"));
        assert_eq!(store.labels().as_slice(), &["travel".to_string()]);
        assert_eq!(
            store.hashtags().as_slice(),
            &tags(&["example", "hashtags", "here", "sea"])
        );
    }

    #[test]
    fn test_normalize_hashtags() {
        assert_eq!(
            normalize_hashtags(&tags(&["#a", " b ", "a", "", "#", "##c"])),
            tags(&["a", "b", "c"])
        );
    }

    #[test]
    fn test_spacer_is_appended_to_title() {
        let mut draft = PostDraft::new(" Dusk ");
        draft.spacer = true;
        assert_eq!(draft.to_post().title, format!("Dusk{}", SPACER));
    }

    #[test]
    fn test_preview_does_not_save() {
        let store = fresh();
        let draft = PostDraft::new("");
        assert_eq!(draft.preview(), "「 Your title here 」\n.\n.\n.\n");
        assert!(store.posts().is_empty());
    }

    #[test]
    fn test_edit_keeps_identity_and_position() {
        let mut store = fresh();
        let mut service = ComposeService::new(&mut store);
        let first = service.create(&PostDraft::new("First")).unwrap();
        service.create(&PostDraft::new("Second")).unwrap();

        let edit = PostEdit {
            title: Some("First, again".to_string()),
            film: Some("Fuji C200".to_string()),
            hashtags: Some(tags(&["one", "two"])),
            add_hashtags: tags(&["three", "one"]),
            remove_hashtags: tags(&["#two"]),
            ..Default::default()
        };
        let edited = service.edit(&first.id.short(), &edit).unwrap();

        assert_eq!(edited.id, first.id);
        assert_eq!(edited.created_at, first.created_at);
        assert_eq!(edited.hashtags, tags(&["one", "three"]));
        assert_eq!(store.posts()[1], edited);
        assert_eq!(store.posts()[1].film, "Fuji C200");
    }

    #[test]
    fn test_edit_clears_film_and_label() {
        let mut store = fresh();
        let mut service = ComposeService::new(&mut store);
        let draft = PostDraft {
            title: "T".to_string(),
            film: "Ilford HP5".to_string(),
            label: "bw".to_string(),
            ..Default::default()
        };
        let post = service.create(&draft).unwrap();

        let edit = PostEdit {
            film: Some(String::new()),
            label: Some(String::new()),
            ..Default::default()
        };
        let edited = service.edit(&post.id.to_string(), &edit).unwrap();

        assert_eq!(edited.film, "");
        assert_eq!(edited.label, "");
        assert_eq!(edited.formatted(), "「 T 」\n.\n.\n.\n");
    }

    #[test]
    fn test_edit_rejects_blank_title() {
        let mut store = fresh();
        let mut service = ComposeService::new(&mut store);
        let post = service.create(&PostDraft::new("Keep")).unwrap();

        let edit = PostEdit {
            title: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            service.edit(&post.id.short(), &edit),
            Err(TextiqError::InvalidInput(_))
        ));
        assert_eq!(store.posts()[0].title, "Keep");
    }

    #[test]
    fn test_edit_unknown_id() {
        let mut store = fresh();
        let result = ComposeService::new(&mut store).edit("abcdef", &PostEdit::default());
        assert!(matches!(result, Err(TextiqError::PostNotFound(_))));
    }

    #[test]
    fn test_delete() {
        let mut store = fresh();
        let mut service = ComposeService::new(&mut store);
        let post = service.create(&PostDraft::new("Gone")).unwrap();

        let deleted = service.delete(&post.id.short()).unwrap();
        assert_eq!(deleted.id, post.id);
        assert!(matches!(
            service.delete(&post.id.short()),
            Err(TextiqError::PostNotFound(_))
        ));
        assert!(store.posts().is_empty());
    }
}
