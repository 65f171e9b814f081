use super::PostQueryService;
use crate::{
    application::{
        dto::CategoryPostsPageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{category::CategoryId, post::PostListFilter},
};

pub struct ListPostsByCategoryQuery {
    pub category_id: i64,
    pub page_number: Option<i64>,
}

impl PostQueryService {
    /// Category landing page. The category must exist; a category with no
    /// posts yields one empty page rather than an error.
    pub async fn list_posts_by_category(
        &self,
        query: ListPostsByCategoryQuery,
    ) -> ApplicationResult<CategoryPostsPageDto> {
        let id = CategoryId::new(query.category_id)
            .map_err(|_| ApplicationError::not_found("category not found"))?;
        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let filter = PostListFilter {
            title_contains: None,
            category_id: Some(category.id.into()),
        };

        let total = self.posts.count(&filter).await?;
        let total_pages = self.total_pages(total);
        let current_page = self.clamp_page(query.page_number, total_pages);
        let records = self
            .posts
            .list_page(&filter, self.page_offset(current_page), self.page_size)
            .await?;

        Ok(CategoryPostsPageDto {
            posts: records.into_iter().map(Into::into).collect(),
            current_page,
            total_pages,
            category_id: category.id.into(),
            category_name: category.name,
        })
    }
}
