// src/application/queries/categories.rs
use std::sync::Arc;

use crate::application::{dto::CategoryDto, error::ApplicationResult};
use crate::domain::category::CategoryRepository;

pub struct CategoryQueryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    /// Name-ordered, for dropdowns and the category navigation strip.
    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.categories.list_all().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
