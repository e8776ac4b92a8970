//! Lookup and mutation services over the [`DataStore`](crate::store::DataStore).
//!
//! The GraphQL layer only talks to the [`AuthorService`] and [`PostService`]
//! traits. The in-memory implementations share one store between them.

mod author_service;
mod post_service;

pub use author_service::{AuthorService, InMemoryAuthorService};
pub use post_service::{InMemoryPostService, PostService};
