use std::sync::Arc;

use crate::domain::category::CategoryRepository;
use crate::domain::post::PostRepository;

/// Applied when the configured page size is missing or zero.
pub(super) const FALLBACK_PAGE_SIZE: u32 = 10;

pub struct PostQueryService {
    pub(super) posts: Arc<dyn PostRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) page_size: u32,
}

impl PostQueryService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        categories: Arc<dyn CategoryRepository>,
        page_size: u32,
    ) -> Self {
        let page_size = if page_size == 0 {
            FALLBACK_PAGE_SIZE
        } else {
            page_size
        };
        Self {
            posts,
            categories,
            page_size,
        }
    }

    /// Pages are 1-based; zero matching rows still count as one empty page.
    pub(super) fn total_pages(&self, total: u64) -> u32 {
        let pages = total.div_ceil(u64::from(self.page_size));
        u32::try_from(pages.max(1)).unwrap_or(u32::MAX)
    }

    /// Out-of-range requests settle on the nearest valid page rather than
    /// erroring: below one clamps to one, past the end clamps to the last.
    pub(super) fn clamp_page(&self, requested: Option<i64>, total_pages: u32) -> u32 {
        let requested = requested.unwrap_or(1);
        if requested < 1 {
            return 1;
        }
        u32::try_from(requested).map_or(total_pages, |page| page.min(total_pages))
    }

    pub(super) fn page_offset(&self, current_page: u32) -> u64 {
        u64::from(current_page - 1) * u64::from(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::{Category, CategoryId};
    use crate::domain::errors::DomainResult;
    use crate::domain::post::{
        NewPost, Post, PostDetail, PostListFilter, PostUpdate, PostWithAuthor, PostWithRefs,
        PostId, PostSlug,
    };
    use async_trait::async_trait;

    struct NoPosts;

    #[async_trait]
    impl PostRepository for NoPosts {
        async fn list_page(
            &self,
            _filter: &PostListFilter,
            _offset: u64,
            _limit: u32,
        ) -> DomainResult<Vec<PostWithRefs>> {
            Ok(Vec::new())
        }

        async fn count(&self, _filter: &PostListFilter) -> DomainResult<u64> {
            Ok(0)
        }

        async fn find_by_id(&self, _id: PostId) -> DomainResult<Option<Post>> {
            Ok(None)
        }

        async fn find_by_id_with_author(
            &self,
            _id: PostId,
        ) -> DomainResult<Option<PostWithAuthor>> {
            Ok(None)
        }

        async fn find_detail_by_id(&self, _id: PostId) -> DomainResult<Option<PostDetail>> {
            Ok(None)
        }

        async fn find_detail_by_slug(&self, _slug: &PostSlug) -> DomainResult<Option<PostDetail>> {
            Ok(None)
        }

        async fn slug_exists(
            &self,
            _slug: &PostSlug,
            _exclude: Option<PostId>,
        ) -> DomainResult<bool> {
            Ok(false)
        }

        async fn find_slug_by_id(&self, _id: PostId) -> DomainResult<Option<PostSlug>> {
            Ok(None)
        }

        async fn insert(&self, _post: NewPost) -> DomainResult<Post> {
            unimplemented!("not used in paging tests")
        }

        async fn update(&self, _update: PostUpdate) -> DomainResult<Post> {
            unimplemented!("not used in paging tests")
        }

        async fn delete(&self, _id: PostId) -> DomainResult<()> {
            Ok(())
        }
    }

    struct NoCategories;

    #[async_trait]
    impl CategoryRepository for NoCategories {
        async fn list_all(&self) -> DomainResult<Vec<Category>> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, _id: CategoryId) -> DomainResult<Option<Category>> {
            Ok(None)
        }
    }

    fn service(page_size: u32) -> PostQueryService {
        PostQueryService::new(Arc::new(NoPosts), Arc::new(NoCategories), page_size)
    }

    #[test]
    fn zero_page_size_falls_back() {
        assert_eq!(service(0).page_size, FALLBACK_PAGE_SIZE);
        assert_eq!(service(25).page_size, 25);
    }

    #[test]
    fn total_pages_rounds_up_and_never_hits_zero() {
        let svc = service(10);
        assert_eq!(svc.total_pages(0), 1);
        assert_eq!(svc.total_pages(1), 1);
        assert_eq!(svc.total_pages(10), 1);
        assert_eq!(svc.total_pages(11), 2);
        assert_eq!(svc.total_pages(95), 10);
    }

    #[test]
    fn clamp_page_settles_out_of_range_requests() {
        let svc = service(10);
        assert_eq!(svc.clamp_page(None, 5), 1);
        assert_eq!(svc.clamp_page(Some(0), 5), 1);
        assert_eq!(svc.clamp_page(Some(-3), 5), 1);
        assert_eq!(svc.clamp_page(Some(3), 5), 3);
        assert_eq!(svc.clamp_page(Some(9), 5), 5);
        assert_eq!(svc.clamp_page(Some(i64::MAX), 5), 5);
    }

    #[test]
    fn page_offset_is_zero_based() {
        let svc = service(10);
        assert_eq!(svc.page_offset(1), 0);
        assert_eq!(svc.page_offset(4), 30);
    }
}
