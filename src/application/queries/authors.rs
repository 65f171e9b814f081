// src/application/queries/authors.rs
use std::sync::Arc;

use crate::application::{dto::AuthorDto, error::ApplicationResult};
use crate::domain::author::AuthorRepository;

/// Supplies the author choices shown on the post forms.
pub struct AuthorQueryService {
    authors: Arc<dyn AuthorRepository>,
}

impl AuthorQueryService {
    pub fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }

    pub async fn list_authors(&self) -> ApplicationResult<Vec<AuthorDto>> {
        let authors = self.authors.list_all().await?;
        Ok(authors.into_iter().map(Into::into).collect())
    }
}
