use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post_service};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::QuillSchema;
use crate::config::ServerSettings;
use crate::error::{QuillError, Result};

pub const GRAPHQL_PATH: &str = "/graphql";

/// Routes:
/// - `POST /graphql` -- execute a request
/// - `GET /graphql` -- GraphiQL, when enabled
/// - `GET /health` -- liveness probe
pub fn router(schema: QuillSchema, graphiql: bool) -> Router {
    let graphql = GraphQL::new(schema);
    let graphql_route = if graphiql {
        get(graphiql_page).post_service(graphql)
    } else {
        post_service(graphql)
    };

    Router::new()
        .route(GRAPHQL_PATH, graphql_route)
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}

async fn graphiql_page() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> &'static str {
    "ok"
}

/// Binds to the configured address and serves until Ctrl-C.
pub async fn run_server(schema: QuillSchema, settings: &ServerSettings) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port)
        .parse()
        .map_err(|e| QuillError::Config(format!("invalid listen address: {}", e)))?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| QuillError::Server(format!("bind failed on {}: {}", addr, e)))?;

    tracing::info!(%addr, graphiql = settings.graphiql, "GraphQL server listening");

    axum::serve(listener, router(schema, settings.graphiql))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| QuillError::Server(format!("serve error: {}", e)))?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
