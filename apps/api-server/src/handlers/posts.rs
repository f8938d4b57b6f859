//! Post collection handlers.
//!
//! Every handler follows the same shape: load the collection fresh from the
//! store, compute, and (for mutations) save the whole collection back under
//! the state's write lock.

use std::str::FromStr;

use actix_web::{HttpResponse, web};
use serde::Serialize;

use quill_core::domain::{NewPost, Post, PostPatch};
use quill_core::query::{self, Direction, PageInfo, SortField};
use quill_shared::dto::{
    CreatePostRequest, LikesResponse, ListParams, MessageResponse, SearchParams,
    UpdatePostRequest,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
struct ListPostsResponse {
    posts: Vec<Post>,
    pagination: PageInfo,
}

#[derive(Serialize)]
struct SearchResponse {
    posts: Vec<Post>,
}

/// GET /api/posts?sort=&direction=&page=&per_page=
pub async fn list_posts(
    state: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();
    let field = params.sort.as_deref().map(SortField::from_str).transpose()?;
    let direction = params
        .direction
        .as_deref()
        .map(Direction::from_str)
        .transpose()?
        .unwrap_or_default();

    let collection = state.store.load().await;
    let sorted = query::sort(&collection.posts, field, direction);
    let (posts, pagination) = query::paginate(
        sorted,
        params.page.unwrap_or(query::DEFAULT_PAGE),
        params.per_page.unwrap_or(query::DEFAULT_PER_PAGE),
    );

    Ok(HttpResponse::Ok().json(ListPostsResponse { posts, pagination }))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let _guard = state.write_lock.lock().await;

    let mut collection = state.store.load().await;
    let post = collection.insert(NewPost {
        title: req.title,
        content: req.content,
        author: req.author,
        date: req.date,
    })?;
    state.store.save(&collection).await?;

    tracing::info!(id = post.id, "created post");
    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    let _guard = state.write_lock.lock().await;

    let mut collection = state.store.load().await;
    let post = collection.update(
        id,
        PostPatch {
            title: req.title,
            content: req.content,
            author: req.author,
            date: req.date,
        },
    )?;
    state.store.save(&collection).await?;

    tracing::info!(id, "updated post");
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let _guard = state.write_lock.lock().await;

    let mut collection = state.store.load().await;
    collection.remove(id)?;
    state.store.save(&collection).await?;

    tracing::info!(id, "deleted post");
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: format!("Post with id {} has been deleted successfully.", id),
    }))
}

/// GET /api/posts/search?query=
pub async fn search_posts(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> AppResult<HttpResponse> {
    let collection = state.store.load().await;
    let posts = query::filter(&collection.posts, params.query.as_deref().unwrap_or(""));
    Ok(HttpResponse::Ok().json(SearchResponse { posts }))
}

/// POST /api/posts/{id}/like
pub async fn like_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let _guard = state.write_lock.lock().await;

    let mut collection = state.store.load().await;
    let likes = collection.like(id)?;
    state.store.save(&collection).await?;

    Ok(HttpResponse::Ok().json(LikesResponse { likes }))
}
