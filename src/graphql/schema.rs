use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema};

use crate::config::{GraphqlSettings, QuillConfig};
use crate::model::NewPost;
use crate::services::{AuthorService, InMemoryAuthorService, InMemoryPostService, PostService};
use crate::store::{DataStore, OrphanPolicy};

use super::types::*;

pub type QuillSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct AppState {
    pub authors: Arc<dyn AuthorService>,
    pub posts: Arc<dyn PostService>,
}

impl AppState {
    pub fn new(authors: Arc<dyn AuthorService>, posts: Arc<dyn PostService>) -> Self {
        Self { authors, posts }
    }

    /// Both services backed by one shared store.
    pub fn in_memory(store: Arc<DataStore>, orphan_policy: OrphanPolicy) -> Self {
        Self::new(
            Arc::new(InMemoryAuthorService::new(Arc::clone(&store))),
            Arc::new(InMemoryPostService::new(store).with_orphan_policy(orphan_policy)),
        )
    }

    /// A freshly seeded store wired up according to `config`.
    pub fn from_config(config: &QuillConfig) -> Self {
        Self::in_memory(Arc::new(DataStore::seeded()), config.store.orphan_policy)
    }
}

pub fn build_schema(state: Arc<AppState>, settings: &GraphqlSettings) -> QuillSchema {
    let builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .limit_depth(settings.max_depth)
        .limit_complexity(settings.max_complexity);

    if settings.introspection {
        builder.finish()
    } else {
        builder.disable_introspection().finish()
    }
}

fn get_state<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<AppState>> {
    ctx.data::<Arc<AppState>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List all authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let state = get_state(ctx)?;
        Ok(state
            .authors
            .get_all_authors()
            .into_iter()
            .map(Author::from)
            .collect())
    }

    /// Get a single author by ID
    async fn author(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Author> {
        let state = get_state(ctx)?;
        state
            .authors
            .get_author_by_id(id)
            .map(Author::from)
            .map_err(|e| e.extend())
    }

    /// List all posts
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let state = get_state(ctx)?;
        Ok(state
            .posts
            .get_all_posts()
            .into_iter()
            .map(Post::from)
            .collect())
    }

    /// Get a single post by ID
    async fn post(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Post> {
        let state = get_state(ctx)?;
        state
            .posts
            .get_post_by_id(id)
            .map(Post::from)
            .map_err(|e| e.extend())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a post for an existing author
    async fn add_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: String,
        author_id: i32,
    ) -> async_graphql::Result<Post> {
        let state = get_state(ctx)?;
        state
            .posts
            .add_post(NewPost::new(title, content, author_id))
            .map(Post::from)
            .map_err(|e| e.extend())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> QuillSchema {
        let config = QuillConfig::default();
        build_schema(Arc::new(AppState::from_config(&config)), &config.graphql)
    }

    #[test]
    fn test_sdl_exposes_contract() {
        let sdl = schema().sdl();
        assert!(sdl.contains("authors: [Author!]!"));
        assert!(sdl.contains("author(id: Int!): Author!"));
        assert!(sdl.contains("posts: [Post!]!"));
        assert!(sdl.contains("post(id: Int!): Post!"));
        assert!(sdl.contains("addPost"));
        assert!(sdl.contains("authorId: Int!"));
    }

    #[tokio::test]
    async fn test_depth_limit_applies() {
        let settings = GraphqlSettings {
            max_depth: 2,
            ..GraphqlSettings::default()
        };
        let schema = build_schema(
            Arc::new(AppState::from_config(&QuillConfig::default())),
            &settings,
        );

        let response = schema
            .execute("{ authors { posts { author { name } } } }")
            .await;
        assert!(!response.errors.is_empty());
    }

    #[tokio::test]
    async fn test_introspection_can_be_disabled() {
        let settings = GraphqlSettings {
            introspection: false,
            ..GraphqlSettings::default()
        };
        let schema = build_schema(
            Arc::new(AppState::from_config(&QuillConfig::default())),
            &settings,
        );

        let response = schema.execute("{ __schema { queryType { name } } }").await;
        let body = serde_json::to_string(&response).unwrap();
        assert!(!body.contains("QueryRoot"));
    }
}
