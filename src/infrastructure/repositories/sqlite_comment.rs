use crate::domain::comment::{Comment, CommentId, CommentRepository, CommentText, CommenterName, NewComment};
use crate::domain::email::EmailAddress;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use super::error::map_sqlx;

#[derive(Clone)]
pub struct SqliteCommentRepository {
    pool: SqlitePool,
}

impl SqliteCommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct CommentRow {
    pub(super) id: i64,
    pub(super) name: String,
    pub(super) email: String,
    pub(super) text: String,
    pub(super) posted_on: DateTime<Utc>,
    pub(super) blog_post_id: i64,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            name: CommenterName::new(row.name)?,
            email: EmailAddress::new(row.email)?,
            text: CommentText::new(row.text)?,
            posted_on: row.posted_on,
            post_id: PostId::new(row.blog_post_id)?,
        })
    }
}

/// Oldest first, so threads read top to bottom.
pub(super) async fn comments_for_post(
    pool: &SqlitePool,
    post_id: i64,
) -> DomainResult<Vec<CommentRow>> {
    sqlx::query_as::<_, CommentRow>(
        "SELECT id, name, email, text, posted_on, blog_post_id FROM comments WHERE blog_post_id = ? ORDER BY posted_on ASC, id ASC",
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            name,
            email,
            text,
            posted_on,
            post_id,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (name, email, text, posted_on, blog_post_id) VALUES (?, ?, ?, ?, ?) RETURNING id, name, email, text, posted_on, blog_post_id",
        )
        .bind(name.as_str())
        .bind(email.as_str())
        .bind(text.as_str())
        .bind(posted_on)
        .bind(i64::from(post_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }
}
