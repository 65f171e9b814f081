// src/domain/comment/entity.rs
use crate::domain::comment::value_objects::{CommentId, CommentText, CommenterName};
use crate::domain::email::EmailAddress;
use crate::domain::post::value_objects::PostId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub name: CommenterName,
    pub email: EmailAddress,
    pub text: CommentText,
    pub posted_on: DateTime<Utc>,
    pub post_id: PostId,
}

/// `posted_on` is stamped by the server; client-supplied timestamps are
/// never accepted.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub name: CommenterName,
    pub email: EmailAddress,
    pub text: CommentText,
    pub posted_on: DateTime<Utc>,
    pub post_id: PostId,
}
