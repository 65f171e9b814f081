// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::post::PostId,
};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    /// Removes the post; its comments go with it through the storage
    /// cascade.
    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<()> {
        let id = PostId::new(command.id)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        if self.posts.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("post not found"));
        }

        self.posts.delete(id).await?;
        Ok(())
    }
}
