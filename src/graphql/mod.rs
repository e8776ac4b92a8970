//! GraphQL schema and resolvers for quill.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on GET /graphql)
//! quill serve --port 4000
//!
//! # Execute a query from CLI
//! quill query '{ authors { id name posts { title } } }'
//!
//! # Execute a mutation from CLI
//! quill mutate 'addPost(title: "T", content: "C", authorId: 1) { id author { name } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `authors`, `author`, `posts`, `post`
//! - **Mutations**: `addPost`

mod schema;
mod server;
mod types;

pub use schema::{AppState, MutationRoot, QueryRoot, QuillSchema, build_schema};
pub use server::{router, run_server};
pub use types::*;
