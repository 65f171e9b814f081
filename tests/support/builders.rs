// tests/support/builders.rs
use chrono::{DateTime, TimeZone, Utc};

use kawaraban::domain::author::AuthorId;
use kawaraban::domain::category::CategoryId;
use kawaraban::domain::post::{Post, PostBody, PostId, PostSlug, PostTitle, SeoMeta};

pub struct PostBuilder {
    id: i64,
    title: String,
    slug: String,
    body: String,
    featured_image: Option<String>,
    views: i64,
    published_on: DateTime<Utc>,
    author_id: i64,
    category_id: i64,
}

impl PostBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Post".into(),
            slug: "test-post".into(),
            body: "Test body".into(),
            featured_image: None,
            views: 0,
            published_on: Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap(),
            author_id: 1,
            category_id: 1,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn featured_image(mut self, path: impl Into<String>) -> Self {
        self.featured_image = Some(path.into());
        self
    }

    pub fn views(mut self, views: i64) -> Self {
        self.views = views;
        self
    }

    pub fn published_on(mut self, instant: DateTime<Utc>) -> Self {
        self.published_on = instant;
        self
    }

    pub fn author_id(mut self, id: i64) -> Self {
        self.author_id = id;
        self
    }

    pub fn category_id(mut self, id: i64) -> Self {
        self.category_id = id;
        self
    }

    pub fn build(self) -> Post {
        Post {
            id: PostId::new(self.id).unwrap(),
            title: PostTitle::new(self.title).unwrap(),
            body: PostBody::new(self.body).unwrap(),
            featured_image: self.featured_image,
            seo: SeoMeta::default(),
            slug: PostSlug::new(self.slug).unwrap(),
            views: self.views,
            published_on: self.published_on,
            modified_on: None,
            author_id: AuthorId::new(self.author_id).unwrap(),
            category_id: CategoryId::new(self.category_id).unwrap(),
        }
    }
}

impl Default for PostBuilder {
    fn default() -> Self {
        Self::new()
    }
}
