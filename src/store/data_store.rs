use super::SeedData;
use crate::error::{QuillError, Result};
use crate::model::{Author, NewPost, Post};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// How [`DataStore::insert_post`] treats a post whose author id matches no author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrphanPolicy {
    /// Validate the author first and leave the store untouched on failure.
    #[default]
    Reject,
    /// Append the post to the global list, then fail. The post stays behind
    /// without appearing under any author.
    Retain,
}

#[derive(Debug, Default)]
struct StoreState {
    authors: Vec<Author>,
    posts: Vec<Post>,
    /// Author id -> positions in `posts`, in insertion order. Posts are never
    /// removed, so positions stay valid.
    posts_by_author: HashMap<i32, Vec<usize>>,
}

impl StoreState {
    fn has_author(&self, id: i32) -> bool {
        self.authors.iter().any(|a| a.id == id)
    }

    fn next_post_id(&self) -> Result<i32> {
        match self.posts.iter().map(|p| p.id).max() {
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| QuillError::Storage("post id space exhausted".to_string())),
            None => Ok(1),
        }
    }

    fn push_post(&mut self, post: Post, link: bool) {
        if link {
            let position = self.posts.len();
            self.posts_by_author
                .entry(post.author_id)
                .or_default()
                .push(position);
        }
        self.posts.push(post);
    }
}

pub struct DataStore {
    state: RwLock<StoreState>,
}

impl DataStore {
    /// A store holding the standard seed catalogue.
    pub fn seeded() -> Self {
        Self::from_seed(SeedData::catalogue())
    }

    /// Builds a store from explicit data. Seed posts are listed under their
    /// author only when that author is part of the seed.
    pub fn from_seed(seed: SeedData) -> Self {
        let mut state = StoreState {
            authors: seed.authors,
            ..StoreState::default()
        };
        for post in seed.posts {
            let link = state.has_author(post.author_id);
            state.push_post(post, link);
        }
        Self {
            state: RwLock::new(state),
        }
    }

    // No write path can panic half-way through a mutation, so a poisoned lock
    // still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All authors in insertion order.
    pub fn authors(&self) -> Vec<Author> {
        self.read().authors.clone()
    }

    /// The first author with the given id.
    pub fn author(&self, id: i32) -> Option<Author> {
        self.read().authors.iter().find(|a| a.id == id).cloned()
    }

    /// All posts in insertion order, including any retained orphans.
    pub fn posts(&self) -> Vec<Post> {
        self.read().posts.clone()
    }

    /// The first post with the given id.
    pub fn post(&self, id: i32) -> Option<Post> {
        self.read().posts.iter().find(|p| p.id == id).cloned()
    }

    /// Posts listed under an author, in the order they were added.
    pub fn posts_by_author(&self, author_id: i32) -> Vec<Post> {
        let state = self.read();
        state
            .posts_by_author
            .get(&author_id)
            .map(|positions| {
                positions
                    .iter()
                    .filter_map(|&i| state.posts.get(i).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The id the next inserted post will receive.
    pub fn next_post_id(&self) -> Result<i32> {
        self.read().next_post_id()
    }

    /// Assigns the next id, appends the post and links it to its author, all
    /// under one write lock.
    pub fn insert_post(&self, new_post: NewPost, policy: OrphanPolicy) -> Result<Post> {
        let mut state = self.write();
        let author_id = new_post.author_id;
        let author_exists = state.has_author(author_id);

        if !author_exists && policy == OrphanPolicy::Reject {
            return Err(QuillError::UnknownAuthor(author_id));
        }

        let post = new_post.with_id(state.next_post_id()?);
        state.push_post(post.clone(), author_exists);

        if author_exists {
            Ok(post)
        } else {
            Err(QuillError::UnknownAuthor(author_id))
        }
    }
}
