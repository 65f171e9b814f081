// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{ClockPort, ImageStorePort, image_store::ImageUpload},
    application::error::ApplicationResult,
    domain::post::{PostRepository, services::PostSlugService},
};

pub(super) const SLUG_TAKEN: &str = "the slug must be unique";

pub struct PostCommandService {
    pub(super) posts: Arc<dyn PostRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
    pub(super) images: Arc<ImageStorePort>,
    pub(super) clock: Arc<ClockPort>,
}

impl PostCommandService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        slug_service: Arc<PostSlugService>,
        images: Arc<ImageStorePort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            posts,
            slug_service,
            images,
            clock,
        }
    }

    /// Empty uploads are treated as absent, matching a submitted form with
    /// an untouched file input.
    pub(super) async fn store_image(
        &self,
        upload: Option<&ImageUpload>,
    ) -> ApplicationResult<Option<String>> {
        match upload {
            Some(upload) if !upload.is_empty() => Ok(Some(self.images.store(upload).await?)),
            _ => Ok(None),
        }
    }
}
