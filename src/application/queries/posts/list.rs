use super::PostQueryService;
use crate::{
    application::{dto::PostListPageDto, error::ApplicationResult},
    domain::post::PostListFilter,
};

pub struct ListPostsQuery {
    pub search_title: Option<String>,
    pub search_category_id: Option<i64>,
    pub page_number: Option<i64>,
}

impl PostQueryService {
    /// Main listing: optional title substring and category filters, newest
    /// first, one page at a time. The filters that produced the page are
    /// echoed back unchanged.
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<PostListPageDto> {
        let ListPostsQuery {
            search_title,
            search_category_id,
            page_number,
        } = query;

        let filter = PostListFilter {
            title_contains: search_title.clone().filter(|s| !s.is_empty()),
            category_id: search_category_id.filter(|id| *id != 0),
        };

        let total = self.posts.count(&filter).await?;
        let total_pages = self.total_pages(total);
        let current_page = self.clamp_page(page_number, total_pages);
        let records = self
            .posts
            .list_page(&filter, self.page_offset(current_page), self.page_size)
            .await?;

        Ok(PostListPageDto {
            posts: records.into_iter().map(Into::into).collect(),
            current_page,
            total_pages,
            search_title,
            search_category_id,
        })
    }
}
