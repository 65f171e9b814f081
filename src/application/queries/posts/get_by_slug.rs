use super::PostQueryService;
use crate::{
    application::{
        dto::PostDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostSlug,
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    /// Public detail read. A hit records one view and the returned counter
    /// already includes it; comments arrive with the post in the same call.
    pub async fn get_post_by_slug(
        &self,
        query: GetPostBySlugQuery,
    ) -> ApplicationResult<PostDetailDto> {
        let slug = PostSlug::new(query.slug)?;
        let detail = self
            .posts
            .find_detail_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(detail.into())
    }
}
