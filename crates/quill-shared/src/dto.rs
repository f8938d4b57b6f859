//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a post.
///
/// All fields are optional at the wire level so the server can report every
/// missing field in one validation error instead of a generic 400.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    /// `YYYY-MM-DD`; defaults to the current date when omitted.
    pub date: Option<String>,
}

/// Partial update for a post - only the supplied fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

/// Request to append a comment to a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentRequest {
    pub text: Option<String>,
    pub author: Option<String>,
}

/// Query parameters for the post listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Query parameters for the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// Confirmation message body (e.g. after a delete).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Like counter after an increment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikesResponse {
    pub likes: u64,
}
