//! Data models for quill.
//!
//! - [`Author`]: a writer with an id and an optional display name
//! - [`Post`]: a piece of writing owned by exactly one author
//! - [`NewPost`]: the caller-supplied fields of a post before it is stored
//!
//! Posts carry only their author's id. Relationships are resolved through the
//! store's index rather than by holding references in either direction.

mod author;
mod post;

pub use author::Author;
pub use post::{NewPost, Post};
