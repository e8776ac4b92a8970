//! In-memory storage for authors and posts.
//!
//! The [`DataStore`] is created once at startup and shared behind an `Arc`.
//! All state sits behind a single lock, so post id assignment and the append
//! that follows it are one atomic step.
//!
//! ## Components
//!
//! - [`DataStore`]: the collections plus the author-to-posts index
//! - [`SeedData`]: the fixed catalogue a fresh store starts from
//! - [`OrphanPolicy`]: what happens to a post whose author does not exist

mod data_store;
mod seed;

pub use data_store::{DataStore, OrphanPolicy};
pub use seed::SeedData;
