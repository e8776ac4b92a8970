use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuillError {
    #[error("Author not found: {0}")]
    AuthorNotFound(i32),

    #[error("Post not found: {0}")]
    PostNotFound(i32),

    #[error("Author with ID {0} not found.")]
    UnknownAuthor(i32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl QuillError {
    /// Stable machine-readable code reported in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            QuillError::AuthorNotFound(_) | QuillError::PostNotFound(_) => "NOT_FOUND",
            QuillError::UnknownAuthor(_) => "UNKNOWN_AUTHOR",
            QuillError::Config(_) => "CONFIG",
            _ => "INTERNAL",
        }
    }
}

impl ErrorExtensions for QuillError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

pub type Result<T> = std::result::Result<T, QuillError>;
