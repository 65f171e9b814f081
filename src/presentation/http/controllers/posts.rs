// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::{PostDetailDto, PostDto, PostListPageDto, PostWithAuthorDto},
    error::ApplicationError,
    ports::image_store::ImageUpload,
    queries::posts::{GetPostByIdQuery, GetPostBySlugQuery, ListPostsQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct PostListParams {
    #[serde(default)]
    pub search_title: Option<String>,
    #[serde(default)]
    pub search_category_id: Option<i64>,
    #[serde(default)]
    pub page_number: Option<i64>,
}

/// Featured image as submitted by the admin form; `content` is base64 of
/// the raw file bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePayload {
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    pub author_id: i64,
    pub category_id: i64,
    #[serde(default)]
    pub image: Option<ImagePayload>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    pub author_id: i64,
    pub category_id: i64,
    #[serde(default)]
    pub image: Option<ImagePayload>,
}

fn decode_image(payload: Option<ImagePayload>) -> HttpResult<Option<ImageUpload>> {
    payload
        .map(|payload| {
            let bytes = BASE64.decode(payload.content.as_bytes()).map_err(|_| {
                HttpError::from_error(ApplicationError::invalid_field(
                    "image",
                    "image content must be valid base64",
                ))
            })?;
            Ok(ImageUpload {
                file_name: payload.file_name,
                bytes,
            })
        })
        .transpose()
}

pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PostListParams>,
) -> HttpResult<Json<PostListPageDto>> {
    state
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            search_title: params.search_title,
            search_category_id: params.search_category_id,
            page_number: params.page_number,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post(GetPostByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDetailDto>> {
    state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let image = decode_image(payload.image)?;
    let command = CreatePostCommand {
        title: payload.title,
        body: payload.body,
        featured_image: payload.featured_image,
        meta_title: payload.meta_title,
        meta_description: payload.meta_description,
        meta_keywords: payload.meta_keywords,
        slug: payload.slug,
        author_id: payload.author_id,
        category_id: payload.category_id,
        image,
    };

    state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    // The path is authoritative; a payload addressing another post is
    // treated as a miss, not silently rerouted.
    if id != payload.id {
        return Err(HttpError::from_error(ApplicationError::not_found(
            "post id mismatch",
        )));
    }

    let image = decode_image(payload.image)?;
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        body: payload.body,
        meta_title: payload.meta_title,
        meta_description: payload.meta_description,
        meta_keywords: payload.meta_keywords,
        slug: payload.slug,
        author_id: payload.author_id,
        category_id: payload.category_id,
        image,
    };

    state
        .services
        .post_commands
        .update_post(command)
        .await
        .into_http()
        .map(Json)
}

/// Confirmation-step data for the delete flow: the post plus its author.
pub async fn confirm_delete_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PostWithAuthorDto>> {
    state
        .services
        .post_queries
        .get_post_with_author(GetPostByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
