//! Blog route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::BlogPost;
use crate::state::AppState;

/// List every post, newest first.
///
/// GET /api/blog
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<BlogPost>> {
    Json(state.store().blog_posts().await)
}

/// Display a single blog post by slug.
///
/// GET /api/blog/{slug}
///
/// # Errors
///
/// Returns 404 if no post has this slug.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>> {
    state
        .store()
        .blog_post_by_slug(&slug)
        .await
        .map(Json)
        .ok_or(AppError::NotFound("Blog post"))
}

/// Create the blog routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/{slug}", get(show))
}
