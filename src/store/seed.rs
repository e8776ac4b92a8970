use crate::model::{Author, Post};

/// Initial contents of a [`DataStore`](super::DataStore).
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub authors: Vec<Author>,
    pub posts: Vec<Post>,
}

impl SeedData {
    /// Two authors, with both starter posts written by the first of them.
    pub fn catalogue() -> Self {
        let authors = vec![
            Author::new(1).with_name("Jane Austen"),
            Author::new(2).with_name("Charles Dickens"),
        ];

        let posts = vec![
            Post {
                id: 1,
                title: "Exploring GraphQL".to_string(),
                content: "GraphQL offers a more efficient way to design web APIs.".to_string(),
                author_id: 1,
            },
            Post {
                id: 2,
                title: "Advantages of GraphQL".to_string(),
                content: "One major advantage of GraphQL is it allows clients to request exactly what they need.".to_string(),
                author_id: 1,
            },
        ];

        Self { authors, posts }
    }
}
