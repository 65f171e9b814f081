// src/application/ports/image_store.rs
use crate::application::error::ApplicationResult;
use async_trait::async_trait;

/// Raw upload as received at the edge, before any name is assigned.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Persists featured images outside the database and returns the public
/// path that gets stored on the post.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(&self, upload: &ImageUpload) -> ApplicationResult<String>;
}
