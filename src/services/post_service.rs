use crate::error::{QuillError, Result};
use crate::model::{NewPost, Post};
use crate::store::{DataStore, OrphanPolicy};
use std::sync::Arc;

pub trait PostService: Send + Sync {
    /// Post with the given id, or [`QuillError::PostNotFound`].
    fn get_post_by_id(&self, id: i32) -> Result<Post>;

    fn find_post(&self, id: i32) -> Option<Post>;

    /// Every post in insertion order.
    fn get_all_posts(&self) -> Vec<Post>;

    /// Stores a post under the next free id and links it to its author.
    ///
    /// Fails with [`QuillError::UnknownAuthor`] when `author_id` matches no
    /// author.
    fn add_post(&self, post: NewPost) -> Result<Post>;
}

pub struct InMemoryPostService {
    store: Arc<DataStore>,
    orphan_policy: OrphanPolicy,
}

impl InMemoryPostService {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self {
            store,
            orphan_policy: OrphanPolicy::default(),
        }
    }

    pub fn with_orphan_policy(mut self, policy: OrphanPolicy) -> Self {
        self.orphan_policy = policy;
        self
    }
}

impl PostService for InMemoryPostService {
    fn get_post_by_id(&self, id: i32) -> Result<Post> {
        self.find_post(id).ok_or_else(|| {
            tracing::debug!(post_id = id, "post lookup missed");
            QuillError::PostNotFound(id)
        })
    }

    fn find_post(&self, id: i32) -> Option<Post> {
        self.store.post(id)
    }

    fn get_all_posts(&self) -> Vec<Post> {
        self.store.posts()
    }

    fn add_post(&self, post: NewPost) -> Result<Post> {
        let author_id = post.author_id;
        match self.store.insert_post(post, self.orphan_policy) {
            Ok(post) => {
                tracing::info!(post_id = post.id, author_id, "post added");
                Ok(post)
            }
            Err(e) => {
                tracing::warn!(author_id, policy = ?self.orphan_policy, error = %e, "add post failed");
                Err(e)
            }
        }
    }
}
