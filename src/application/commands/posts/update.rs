// src/application/commands/posts/update.rs
use super::{PostCommandService, service::SLUG_TAKEN};
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
        ports::image_store::ImageUpload,
    },
    domain::{
        author::AuthorId,
        category::CategoryId,
        errors::DomainError,
        post::{
            PostBody, PostId, PostTitle, PostUpdate, SeoMeta,
            value_objects::optional_bounded,
        },
    },
};

pub struct UpdatePostCommand {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub slug: Option<String>,
    pub author_id: i64,
    pub category_id: i64,
    pub image: Option<ImageUpload>,
}

impl PostCommandService {
    /// Replaces the editable fields of an existing post. The stored
    /// featured image survives unless a new upload arrives, and the view
    /// counter and publication instant are never touched.
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        let existing = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let title = PostTitle::new(command.title)
            .map_err(|err| ApplicationError::field_violation("title", err))?;
        let body = PostBody::new(command.body)
            .map_err(|err| ApplicationError::field_violation("body", err))?;
        let seo = SeoMeta {
            title: optional_bounded(command.meta_title, SeoMeta::TITLE_MAX_CHARS)
                .map_err(|err| ApplicationError::field_violation("meta_title", err))?,
            description: optional_bounded(
                command.meta_description,
                SeoMeta::DESCRIPTION_MAX_CHARS,
            )
            .map_err(|err| ApplicationError::field_violation("meta_description", err))?,
            keywords: optional_bounded(command.meta_keywords, SeoMeta::KEYWORDS_MAX_CHARS)
                .map_err(|err| ApplicationError::field_violation("meta_keywords", err))?,
        };
        let author_id = AuthorId::new(command.author_id)
            .map_err(|err| ApplicationError::field_violation("author_id", err))?;
        let category_id = CategoryId::new(command.category_id)
            .map_err(|err| ApplicationError::field_violation("category_id", err))?;

        let featured_image = match self.store_image(command.image.as_ref()).await? {
            Some(stored) => Some(stored),
            None => existing.featured_image.clone(),
        };

        let slug = self
            .slug_service
            .resolve(&title, command.slug.as_deref(), Some(id))
            .await
            .map_err(|err| ApplicationError::field_violation("slug", err))?;

        if self.posts.slug_exists(&slug, Some(id)).await? {
            return Err(ApplicationError::invalid_field("slug", SLUG_TAKEN));
        }

        let update = PostUpdate {
            id,
            title,
            body,
            featured_image,
            seo,
            slug,
            author_id,
            category_id,
            modified_on: self.clock.now(),
        };

        match self.posts.update(update).await {
            Ok(post) => Ok(post.into()),
            Err(DomainError::Conflict(_)) => {
                Err(ApplicationError::invalid_field("slug", SLUG_TAKEN))
            }
            Err(other) => Err(other.into()),
        }
    }
}
