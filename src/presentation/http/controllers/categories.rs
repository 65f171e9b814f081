// src/presentation/http/controllers/categories.rs
use crate::application::{
    dto::{CategoryDto, CategoryPostsPageDto},
    queries::posts::ListPostsByCategoryQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CategoryPageParams {
    #[serde(default)]
    pub page_number: Option<i64>,
}

pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

pub async fn list_posts_by_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Query(params): Query<CategoryPageParams>,
) -> HttpResult<Json<CategoryPostsPageDto>> {
    state
        .services
        .post_queries
        .list_posts_by_category(ListPostsByCategoryQuery {
            category_id: id,
            page_number: params.page_number,
        })
        .await
        .into_http()
        .map(Json)
}
