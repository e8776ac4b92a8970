use crate::error::{QuillError, Result};
use crate::model::{Author, Post};
use crate::store::DataStore;
use std::sync::Arc;

pub trait AuthorService: Send + Sync {
    /// Author with the given id, or [`QuillError::AuthorNotFound`].
    fn get_author_by_id(&self, id: i32) -> Result<Author>;

    fn find_author(&self, id: i32) -> Option<Author>;

    /// Every author in insertion order.
    fn get_all_authors(&self) -> Vec<Author>;

    /// Posts listed under the author. Empty for unknown ids.
    fn posts_for_author(&self, id: i32) -> Vec<Post>;
}

pub struct InMemoryAuthorService {
    store: Arc<DataStore>,
}

impl InMemoryAuthorService {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }
}

impl AuthorService for InMemoryAuthorService {
    fn get_author_by_id(&self, id: i32) -> Result<Author> {
        self.find_author(id).ok_or_else(|| {
            tracing::debug!(author_id = id, "author lookup missed");
            QuillError::AuthorNotFound(id)
        })
    }

    fn find_author(&self, id: i32) -> Option<Author> {
        self.store.author(id)
    }

    fn get_all_authors(&self) -> Vec<Author> {
        self.store.authors()
    }

    fn posts_for_author(&self, id: i32) -> Vec<Post> {
        self.store.posts_by_author(id)
    }
}
