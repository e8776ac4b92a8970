use super::schema::AppState;
use crate::model;
use async_graphql::{ComplexObject, Context, SimpleObject};
use std::sync::Arc;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: Option<String>,
}

#[ComplexObject]
impl Author {
    /// Posts written by this author, oldest first
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let state = ctx.data::<Arc<AppState>>()?;
        Ok(state
            .authors
            .posts_for_author(self.id)
            .into_iter()
            .map(Post::from)
            .collect())
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author_id: i32,
}

#[ComplexObject]
impl Post {
    /// The author this post belongs to; null only for posts kept after a
    /// failed `addPost`
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let state = ctx.data::<Arc<AppState>>()?;
        Ok(state.authors.find_author(self.author_id).map(Author::from))
    }
}

impl From<model::Post> for Post {
    fn from(p: model::Post) -> Self {
        Self {
            id: p.id,
            title: p.title,
            content: p.content,
            author_id: p.author_id,
        }
    }
}
