use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored format for post dates (`2024-03-01`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stored format for comment timestamps, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Post entity - one blog post with its nested sub-resources.
///
/// `likes` and `comments` default so documents written before those
/// attributes existed still deserialize cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Comment entity - owned by a single post.
///
/// The id is unique only within the parent post's comment sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub text: String,
    pub author: String,
    pub date: String,
}

/// Input for creating a post.
///
/// Every field is optional so validation can report all missing fields at
/// once instead of failing on the first.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

/// Partial update for a post - absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

/// Input for appending a comment to a post.
#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub text: Option<String>,
    pub author: Option<String>,
}
