use super::PostQueryService;
use crate::{
    application::{
        dto::{PostDto, PostWithAuthorDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct GetPostByIdQuery {
    pub id: i64,
}

impl PostQueryService {
    /// Raw record as stored, used to prefill the edit form. No view is
    /// recorded here.
    pub async fn get_post(&self, query: GetPostByIdQuery) -> ApplicationResult<PostDto> {
        let id = PostId::new(query.id)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(post.into())
    }

    /// Post plus author, shown on the delete confirmation step.
    pub async fn get_post_with_author(
        &self,
        query: GetPostByIdQuery,
    ) -> ApplicationResult<PostWithAuthorDto> {
        let id = PostId::new(query.id)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        let record = self
            .posts
            .find_by_id_with_author(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(record.into())
    }
}
