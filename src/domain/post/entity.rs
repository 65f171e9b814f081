// src/domain/post/entity.rs
use crate::domain::author::{Author, AuthorId};
use crate::domain::category::{Category, CategoryId};
use crate::domain::comment::Comment;
use crate::domain::post::value_objects::{PostBody, PostId, PostSlug, PostTitle, SeoMeta};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub body: PostBody,
    pub featured_image: Option<String>,
    pub seo: SeoMeta,
    pub slug: PostSlug,
    pub views: i64,
    pub published_on: DateTime<Utc>,
    pub modified_on: Option<DateTime<Utc>>,
    pub author_id: AuthorId,
    pub category_id: CategoryId,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub body: PostBody,
    pub featured_image: Option<String>,
    pub seo: SeoMeta,
    pub slug: PostSlug,
    pub author_id: AuthorId,
    pub category_id: CategoryId,
    pub published_on: DateTime<Utc>,
}

/// Full replacement of the editable fields. The view counter and the
/// original publication instant survive every edit.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: PostTitle,
    pub body: PostBody,
    pub featured_image: Option<String>,
    pub seo: SeoMeta,
    pub slug: PostSlug,
    pub author_id: AuthorId,
    pub category_id: CategoryId,
    pub modified_on: DateTime<Utc>,
}

/// Listing row with its author and category resolved in the same read.
#[derive(Debug, Clone)]
pub struct PostWithRefs {
    pub post: Post,
    pub author: Author,
    pub category: Category,
}

#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: Author,
}

/// Everything the public detail page renders, resolved in one call.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub post: Post,
    pub author: Author,
    pub category: Category,
    pub comments: Vec<Comment>,
}
