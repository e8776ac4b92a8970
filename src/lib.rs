//! # Quill - a GraphQL API over authors and their posts
//!
//! Quill serves a small, fixed catalogue of authors and posts from memory and
//! exposes it through GraphQL. Clients can list and fetch authors and posts,
//! follow the author/post relationship in either direction, and add new posts
//! for existing authors.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API (GraphiQL on http://127.0.0.1:4000/graphql)
//! quill serve
//!
//! # One-off query against a freshly seeded store
//! quill query '{ author(id: 1) { name posts { id title } } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Author, Post)
//! - [`services`]: Lookup and mutation services
//! - [`store`]: The in-memory data store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.quill.yml` configuration files and upward discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `QuillError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server that hosts it.
pub mod graphql;

pub mod logging;

/// Data models for authors and posts.
pub mod model;

pub mod services;

/// In-memory storage.
///
/// Holds the seeded authors and posts for the life of the process.
pub mod store;
