use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub text: String,
    #[serde(with = "serde_time")]
    pub posted_on: DateTime<Utc>,
    pub blog_post_id: i64,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            name: comment.name.into(),
            email: comment.email.into(),
            text: comment.text.into(),
            posted_on: comment.posted_on,
            blog_post_id: comment.post_id.into(),
        }
    }
}

/// Returned after a successful submission; the slug lets the caller jump
/// back to the post the comment landed on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostedCommentDto {
    pub comment: CommentDto,
    pub post_slug: String,
}
