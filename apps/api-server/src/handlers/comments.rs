//! Comment sub-resource handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::NewComment;
use quill_shared::dto::CommentRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts/{id}/comments
pub async fn add_comment(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    let _guard = state.write_lock.lock().await;

    let mut collection = state.store.load().await;
    let comment = collection.add_comment(
        id,
        NewComment {
            text: req.text,
            author: req.author,
        },
    )?;
    state.store.save(&collection).await?;

    tracing::info!(post_id = id, comment_id = comment.id, "added comment");
    Ok(HttpResponse::Created().json(comment))
}

/// GET /api/posts/{id}/comments
pub async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let collection = state.store.load().await;
    let comments = collection.comments(id)?.to_vec();
    Ok(HttpResponse::Ok().json(comments))
}
