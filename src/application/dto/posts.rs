use crate::domain::post::{Post, PostDetail, PostWithAuthor, PostWithRefs};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AuthorDto, CategoryDto, CommentDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub featured_image: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub slug: String,
    pub views: i64,
    #[serde(with = "serde_time")]
    pub published_on: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub modified_on: Option<DateTime<Utc>>,
    pub author_id: i64,
    pub category_id: i64,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into(),
            body: post.body.into(),
            featured_image: post.featured_image,
            meta_title: post.seo.title,
            meta_description: post.seo.description,
            meta_keywords: post.seo.keywords,
            slug: post.slug.into(),
            views: post.views,
            published_on: post.published_on,
            modified_on: post.modified_on,
            author_id: post.author_id.into(),
            category_id: post.category_id.into(),
        }
    }
}

/// Listing entry with its references resolved, so clients never issue a
/// follow-up lookup per row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListItemDto {
    pub post: PostDto,
    pub author: AuthorDto,
    pub category: CategoryDto,
}

impl From<PostWithRefs> for PostListItemDto {
    fn from(record: PostWithRefs) -> Self {
        Self {
            post: record.post.into(),
            author: record.author.into(),
            category: record.category.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWithAuthorDto {
    pub post: PostDto,
    pub author: AuthorDto,
}

impl From<PostWithAuthor> for PostWithAuthorDto {
    fn from(record: PostWithAuthor) -> Self {
        Self {
            post: record.post.into(),
            author: record.author.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailDto {
    pub post: PostDto,
    pub author: AuthorDto,
    pub category: CategoryDto,
    pub comments: Vec<CommentDto>,
}

impl From<PostDetail> for PostDetailDto {
    fn from(detail: PostDetail) -> Self {
        Self {
            post: detail.post.into(),
            author: detail.author.into(),
            category: detail.category.into(),
            comments: detail.comments.into_iter().map(Into::into).collect(),
        }
    }
}

/// One page of the main listing, echoing the filters that produced it so
/// the caller can rebuild links without re-deriving state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListPageDto {
    pub posts: Vec<PostListItemDto>,
    pub current_page: u32,
    pub total_pages: u32,
    pub search_title: Option<String>,
    pub search_category_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPostsPageDto {
    pub posts: Vec<PostListItemDto>,
    pub current_page: u32,
    pub total_pages: u32,
    pub category_id: i64,
    pub category_name: String,
}
