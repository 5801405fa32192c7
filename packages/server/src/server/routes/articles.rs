//! Informational article routes (embedded content).

use axum::extract::Path;
use axum::Json;

use crate::common::ApiError;
use crate::domains::articles::{Article, ArticleSummary};

pub async fn list() -> Json<Vec<ArticleSummary>> {
    Json(Article::summaries())
}

pub async fn detail(Path(slug): Path<String>) -> Result<Json<&'static Article>, ApiError> {
    Article::find_by_slug(&slug)
        .map(Json)
        .ok_or(ApiError::NotFound("article"))
}
