// src/domain/post/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{
    NewPost, Post, PostDetail, PostUpdate, PostWithAuthor, PostWithRefs,
};
use crate::domain::post::value_objects::{PostId, PostSlug};
use async_trait::async_trait;

/// Listing restrictions. A raw category id is accepted here on purpose:
/// an unknown or negative id simply matches no rows.
#[derive(Debug, Clone, Default)]
pub struct PostListFilter {
    pub title_contains: Option<String>,
    pub category_id: Option<i64>,
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Page slice ordered by publication date, newest first; ties break on
    /// ascending id so pages never overlap.
    async fn list_page(
        &self,
        filter: &PostListFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<PostWithRefs>>;

    async fn count(&self, filter: &PostListFilter) -> DomainResult<u64>;

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;

    async fn find_by_id_with_author(&self, id: PostId) -> DomainResult<Option<PostWithAuthor>>;

    async fn find_detail_by_id(&self, id: PostId) -> DomainResult<Option<PostDetail>>;

    /// Public detail lookup. A hit also records one view; the returned
    /// counter reflects the recorded view. A miss writes nothing.
    async fn find_detail_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<PostDetail>>;

    /// `exclude` skips one post's own row when probing during an update.
    async fn slug_exists(&self, slug: &PostSlug, exclude: Option<PostId>) -> DomainResult<bool>;

    async fn find_slug_by_id(&self, id: PostId) -> DomainResult<Option<PostSlug>>;

    async fn insert(&self, post: NewPost) -> DomainResult<Post>;

    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;

    /// Removes the post and, through the schema cascade, its comments.
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}
