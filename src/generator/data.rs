use serde::Serialize;

/// A rendered, publishable post.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Post {
    pub title: String,
    pub slug: String,
    pub date: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub content: String,
}
