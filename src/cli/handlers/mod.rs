mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::QuillConfig;
use crate::graphql::{AppState, QuillSchema, build_schema};
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: QuillConfig,
    pub state: Arc<AppState>,
}

impl CommandContext {
    pub fn new(config: QuillConfig) -> Self {
        let state = Arc::new(AppState::from_config(&config));
        Self { config, state }
    }

    pub fn schema(&self) -> QuillSchema {
        build_schema(Arc::clone(&self.state), &self.config.graphql)
    }
}

fn parse_variables(variables: Option<String>) -> anyhow::Result<async_graphql::Variables> {
    Ok(match variables {
        Some(v) => serde_json::from_str(&v)?,
        None => async_graphql::Variables::default(),
    })
}

fn execute(ctx: &CommandContext, query: &str, variables: Option<String>) -> anyhow::Result<()> {
    let vars = parse_variables(variables)?;
    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(ctx.schema().execute(request));

    if !response.errors.is_empty() {
        tracing::debug!(errors = response.errors.len(), "request completed with errors");
    }
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variables() {
        let vars = parse_variables(Some(r#"{"id": 2}"#.to_string())).unwrap();
        assert_eq!(vars.get("id"), Some(&async_graphql::Value::from(2)));

        assert!(parse_variables(None).unwrap().is_empty());
        assert!(parse_variables(Some("not json".to_string())).is_err());
    }

    #[tokio::test]
    async fn test_context_schema_shares_state() {
        let ctx = CommandContext::new(QuillConfig::default());

        ctx.schema()
            .execute(r#"mutation { addPost(title: "T", content: "C", authorId: 2) { id } }"#)
            .await;
        let response = ctx.schema().execute("{ author(id: 2) { posts { id } } }").await;

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["data"]["author"]["posts"][0]["id"], 3);
    }
}
