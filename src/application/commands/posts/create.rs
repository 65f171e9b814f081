// src/application/commands/posts/create.rs
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
            NewPost, PostBody, PostTitle, SeoMeta,
            value_objects::optional_bounded,
        },
    },
};

pub struct CreatePostCommand {
    pub title: String,
    pub body: String,
    pub featured_image: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub slug: Option<String>,
    pub author_id: i64,
    pub category_id: i64,
    pub image: Option<ImageUpload>,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    body: Option<String>,
    featured_image: Option<String>,
    meta_title: Option<String>,
    meta_description: Option<String>,
    meta_keywords: Option<String>,
    slug: Option<String>,
    author_id: Option<i64>,
    category_id: Option<i64>,
    image: Option<ImageUpload>,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn featured_image(mut self, path: impl Into<String>) -> Self {
        self.featured_image = Some(path.into());
        self
    }

    pub fn meta_title(mut self, value: impl Into<String>) -> Self {
        self.meta_title = Some(value.into());
        self
    }

    pub fn meta_description(mut self, value: impl Into<String>) -> Self {
        self.meta_description = Some(value.into());
        self
    }

    pub fn meta_keywords(mut self, value: impl Into<String>) -> Self {
        self.meta_keywords = Some(value.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn author_id(mut self, id: i64) -> Self {
        self.author_id = Some(id);
        self
    }

    pub fn category_id(mut self, id: i64) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            body: self.body.ok_or("body is required")?,
            featured_image: self.featured_image,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            meta_keywords: self.meta_keywords,
            slug: self.slug,
            author_id: self.author_id.ok_or("author_id is required")?,
            category_id: self.category_id.ok_or("category_id is required")?,
            image: self.image,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
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

        // A fresh upload wins over whatever path the form carried.
        let featured_image = match self.store_image(command.image.as_ref()).await? {
            Some(stored) => Some(stored),
            None => command.featured_image,
        };

        let slug = self
            .slug_service
            .resolve(&title, command.slug.as_deref(), None)
            .await
            .map_err(|err| ApplicationError::field_violation("slug", err))?;

        // Supplied slugs bypass derivation, so uniqueness is re-checked
        // here; the unique index still backstops a concurrent writer.
        if self.posts.slug_exists(&slug, None).await? {
            return Err(ApplicationError::invalid_field("slug", SLUG_TAKEN));
        }

        let new_post = NewPost {
            title,
            body,
            featured_image,
            seo,
            slug,
            author_id,
            category_id,
            published_on: self.clock.now(),
        };

        match self.posts.insert(new_post).await {
            Ok(post) => Ok(post.into()),
            Err(DomainError::Conflict(_)) => {
                Err(ApplicationError::invalid_field("slug", SLUG_TAKEN))
            }
            Err(other) => Err(other.into()),
        }
    }
}
