use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author_id: i32,
}

/// A post that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: i32,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author_id: i32) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author_id,
        }
    }

    pub fn with_id(self, id: i32) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            author_id: self.author_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_id_keeps_fields() {
        let post = NewPost::new("T", "C", 1).with_id(3);
        assert_eq!(post.id, 3);
        assert_eq!(post.title, "T");
        assert_eq!(post.content, "C");
        assert_eq!(post.author_id, 1);
    }

    #[test]
    fn test_post_serializes_camel_case() {
        let post = NewPost::new("T", "C", 2).with_id(1);
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["authorId"], 2);
    }
}
