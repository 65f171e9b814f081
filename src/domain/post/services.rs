// src/domain/post/services.rs
use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::post::repository::PostRepository;
use crate::domain::post::value_objects::{PostId, PostSlug, PostTitle};

/// Domain service responsible for assigning each post a unique slug.
pub struct PostSlugService {
    posts: Arc<dyn PostRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl PostSlugService {
    pub fn new(posts: Arc<dyn PostRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { posts, generator }
    }

    /// A caller-supplied slug is taken verbatim. Otherwise a candidate is
    /// derived from the title and probed against storage, appending `-1`,
    /// `-2`, ... until an unused value is found. `ignore` skips the post's
    /// own row when re-slugging during an update.
    pub async fn resolve(
        &self,
        title: &PostTitle,
        supplied: Option<&str>,
        ignore: Option<PostId>,
    ) -> DomainResult<PostSlug> {
        if let Some(value) = supplied.filter(|s| !s.trim().is_empty()) {
            return PostSlug::new(value);
        }

        let base = self.generator.slugify(title.as_str());
        let base_slug = if base.is_empty() {
            format!("post-{}", Utc::now().timestamp())
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = PostSlug::new(candidate)?;
            if !self.posts.slug_exists(&slug, ignore).await? {
                return Ok(slug);
            }
            candidate = format!("{base_slug}-{counter}");
            counter += 1;
        }
    }
}
