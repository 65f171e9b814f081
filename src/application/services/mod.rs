// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{comments::CommentIntakeService, posts::PostCommandService},
        ports::{ClockPort, ImageStorePort, SlugGeneratorPort},
        queries::{
            authors::AuthorQueryService, categories::CategoryQueryService,
            posts::PostQueryService,
        },
    },
    domain::{
        author::AuthorRepository,
        category::CategoryRepository,
        comment::CommentRepository,
        post::{PostRepository, services::PostSlugService},
    },
};

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub comment_intake: Arc<CommentIntakeService>,
    pub author_queries: Arc<AuthorQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        posts: Arc<dyn PostRepository>,
        authors: Arc<dyn AuthorRepository>,
        categories: Arc<dyn CategoryRepository>,
        comments: Arc<dyn CommentRepository>,
        images: Arc<ImageStorePort>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        page_size: u32,
        comment_blocklist: Vec<String>,
    ) -> Self {
        let slug_service = Arc::new(PostSlugService::new(Arc::clone(&posts), slugger));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&posts),
            slug_service,
            images,
            Arc::clone(&clock),
        ));

        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&posts),
            Arc::clone(&categories),
            page_size,
        ));

        let comment_intake = Arc::new(CommentIntakeService::new(
            comments,
            posts,
            clock,
            comment_blocklist,
        ));

        let author_queries = Arc::new(AuthorQueryService::new(authors));
        let category_queries = Arc::new(CategoryQueryService::new(categories));

        Self {
            post_commands,
            post_queries,
            comment_intake,
            author_queries,
            category_queries,
        }
    }
}
