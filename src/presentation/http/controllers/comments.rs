// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::AddCommentCommand,
    dto::PostDetailDto,
    error::{ApplicationError, FieldError},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode, response::Response};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub blog_post_id: i64,
    pub name: String,
    pub email: String,
    pub text: String,
}

/// Rejected submissions come back with everything the client needs to
/// re-render the detail page: the field errors, the post with its stored
/// comments, and the draft exactly as submitted.
#[derive(Debug, Serialize)]
pub struct CommentRejectedBody {
    pub message: String,
    pub fields: Vec<FieldError>,
    pub post: PostDetailDto,
    pub draft: CreateCommentRequest,
}

pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<Response> {
    let command = AddCommentCommand {
        blog_post_id: payload.blog_post_id,
        name: payload.name.clone(),
        email: payload.email.clone(),
        text: payload.text.clone(),
    };

    match state.services.comment_intake.add_comment(command).await {
        Ok(posted) => Ok((StatusCode::CREATED, Json(posted)).into_response()),
        Err(ApplicationError::Validation(errors)) => {
            let post = state
                .services
                .comment_intake
                .redisplay_context(payload.blog_post_id)
                .await
                .into_http()?;
            let body = CommentRejectedBody {
                message: "validation failed".into(),
                fields: errors.0,
                post,
                draft: payload,
            };
            Ok((StatusCode::BAD_REQUEST, Json(body)).into_response())
        }
        Err(other) => Err(HttpError::from_error(other)),
    }
}
