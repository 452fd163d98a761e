//! Post store: posts plus tag vocabularies, persisted after every mutation

use crate::domain::{normalize_hashtag, Post, PostId, Vocabulary};
use crate::error::{Result, TextiqError};
use crate::infrastructure::defaults::{FILMS_KEY, HASHTAGS_KEY, LABELS_KEY, POSTS_KEY};
use crate::infrastructure::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// Change notification delivered to subscribers after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    PostAdded(PostId),
    PostUpdated(PostId),
    PostDeleted(PostId),
    FilmsChanged,
    LabelsChanged,
    HashtagsChanged,
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// In-memory posts and vocabularies over a key-value backend.
///
/// Posts are kept newest first. Every mutation writes the full state back to
/// the backend; write failures are logged and otherwise ignored.
pub struct PostStore<S: KeyValueStore> {
    backend: S,
    posts: Vec<Post>,
    films: Vocabulary,
    labels: Vocabulary,
    hashtags: Vocabulary,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore> PostStore<S> {
    /// Build a store from whatever the backend holds.
    /// Each key loads independently; absent or malformed keys keep defaults.
    pub fn load(backend: S) -> Self {
        let posts: Vec<Post> = load_key(&backend, POSTS_KEY).unwrap_or_default();
        let films: Vocabulary =
            load_key(&backend, FILMS_KEY).unwrap_or_else(Vocabulary::default_films);
        let labels: Vocabulary = load_key(&backend, LABELS_KEY).unwrap_or_default();
        let hashtags: Vocabulary =
            load_key(&backend, HASHTAGS_KEY).unwrap_or_else(Vocabulary::default_hashtags);

        tracing::debug!(
            posts = posts.len(),
            films = films.len(),
            labels = labels.len(),
            hashtags = hashtags.len(),
            "loaded post store"
        );

        PostStore {
            backend,
            posts,
            films,
            labels,
            hashtags,
            listeners: Vec::new(),
        }
    }

    /// Posts, newest first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn films(&self) -> &Vocabulary {
        &self.films
    }

    pub fn labels(&self) -> &Vocabulary {
        &self.labels
    }

    pub fn hashtags(&self) -> &Vocabulary {
        &self.hashtags
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    pub fn post(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == *id)
    }

    /// Resolve a post from a unique id prefix
    pub fn find_by_prefix(&self, prefix: &str) -> Result<&Post> {
        let mut matches = self.posts.iter().filter(|p| p.id.matches_prefix(prefix));

        match (matches.next(), matches.count()) {
            (None, _) => Err(TextiqError::PostNotFound(prefix.to_string())),
            (Some(post), 0) => Ok(post),
            (Some(_), rest) => Err(TextiqError::AmbiguousPostId(prefix.to_string(), rest + 1)),
        }
    }

    /// Register a change listener
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Insert a post at the front
    pub fn add_post(&mut self, post: Post) {
        let id = post.id;
        self.posts.insert(0, post);
        self.commit(StoreEvent::PostAdded(id));
    }

    /// Replace the post with the same id, keeping its position.
    /// Returns false (and does nothing) when no such post exists.
    pub fn update_post(&mut self, post: Post) -> bool {
        let Some(index) = self.posts.iter().position(|p| p.id == post.id) else {
            return false;
        };

        let id = post.id;
        self.posts[index] = post;
        self.commit(StoreEvent::PostUpdated(id));
        true
    }

    /// Remove the post with the given id. Returns whether one was removed.
    pub fn delete_post(&mut self, id: &PostId) -> bool {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != *id);
        let removed = self.posts.len() != before;
        self.commit(StoreEvent::PostDeleted(*id));
        removed
    }

    /// Append a film unless already known
    pub fn add_film(&mut self, film: &str) -> bool {
        let added = self.films.insert(film);
        if added {
            self.commit(StoreEvent::FilmsChanged);
        }
        added
    }

    /// Append a label unless already known
    pub fn add_label(&mut self, label: &str) -> bool {
        let added = self.labels.insert(label);
        if added {
            self.commit(StoreEvent::LabelsChanged);
        }
        added
    }

    /// Append a hashtag (leading `#` stripped) unless already known
    pub fn add_hashtag(&mut self, hashtag: &str) -> bool {
        let added = self.hashtags.insert(normalize_hashtag(hashtag));
        if added {
            self.commit(StoreEvent::HashtagsChanged);
        }
        added
    }

    /// Drop a hashtag from the vocabulary; posts keep theirs
    pub fn remove_hashtag(&mut self, hashtag: &str) -> bool {
        let removed = self.hashtags.remove(hashtag);
        self.commit(StoreEvent::HashtagsChanged);
        removed
    }

    pub fn clear_labels(&mut self) {
        self.labels.clear();
        self.commit(StoreEvent::LabelsChanged);
    }

    fn commit(&mut self, event: StoreEvent) {
        self.persist();
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// Best-effort write of the full state
    fn persist(&mut self) {
        stage_key(&mut self.backend, POSTS_KEY, &self.posts);
        stage_key(&mut self.backend, FILMS_KEY, &self.films);
        stage_key(&mut self.backend, LABELS_KEY, &self.labels);
        stage_key(&mut self.backend, HASHTAGS_KEY, &self.hashtags);

        if let Err(e) = self.backend.flush() {
            tracing::warn!(error = %e, "failed to save post store");
        }
    }
}

impl<S: KeyValueStore + fmt::Debug> fmt::Debug for PostStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostStore")
            .field("backend", &self.backend)
            .field("posts", &self.posts)
            .field("films", &self.films)
            .field("labels", &self.labels)
            .field("hashtags", &self.hashtags)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn load_key<T: DeserializeOwned>(backend: &impl KeyValueStore, key: &str) -> Option<T> {
    let value = backend.get(key)?;
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring malformed stored value");
            None
        }
    }
}

fn stage_key<T: Serialize>(backend: &mut impl KeyValueStore, key: &str, value: &T) {
    match serde_json::to_value(value) {
        Ok(encoded) => backend.set(key, encoded),
        Err(e) => tracing::warn!(key, error = %e, "failed to encode value"),
    }
}
