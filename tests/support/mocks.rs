// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use kawaraban::application::error::ApplicationResult;
use kawaraban::application::ports::image_store::{ImageStore, ImageUpload};
use kawaraban::application::ports::time::Clock;
use kawaraban::domain::author::{Author, AuthorId};
use kawaraban::domain::category::{Category, CategoryId};
use kawaraban::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use kawaraban::domain::email::EmailAddress;
use kawaraban::domain::errors::{DomainError, DomainResult};
use kawaraban::domain::post::{
    NewPost, Post, PostDetail, PostId, PostListFilter, PostRepository, PostSlug, PostUpdate,
    PostWithAuthor, PostWithRefs,
};

/// A timestamp every fixture can agree on.
pub fn fixed_instant() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-03-14T09:26:53Z")
        .unwrap()
        .with_timezone(&Utc)
}

#[derive(Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Records the paths it hands out instead of touching the filesystem.
#[derive(Default)]
pub struct CapturingImageStore {
    pub stored: Mutex<Vec<String>>,
}

#[async_trait]
impl ImageStore for CapturingImageStore {
    async fn store(&self, upload: &ImageUpload) -> ApplicationResult<String> {
        let path = format!("/uploads/test_{}", upload.file_name);
        self.stored.lock().unwrap().push(path.clone());
        Ok(path)
    }
}

pub struct InMemoryComments {
    entries: Mutex<Vec<Comment>>,
    next_id: AtomicI64,
}

impl InMemoryComments {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn stored(&self) -> Vec<Comment> {
        self.entries.lock().unwrap().clone()
    }

    pub fn for_post(&self, post_id: PostId) -> Vec<Comment> {
        let mut rows: Vec<Comment> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            a.posted_on
                .cmp(&b.posted_on)
                .then_with(|| i64::from(a.id).cmp(&i64::from(b.id)))
        });
        rows
    }

    pub fn remove_for_post(&self, post_id: PostId) {
        self.entries.lock().unwrap().retain(|c| c.post_id != post_id);
    }
}

impl Default for InMemoryComments {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let id = CommentId::new(self.next_id.fetch_add(1, Ordering::SeqCst))?;
        let stored = Comment {
            id,
            name: comment.name,
            email: comment.email,
            text: comment.text,
            posted_on: comment.posted_on,
            post_id: comment.post_id,
        };
        self.entries.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}

fn reference_authors() -> Vec<Author> {
    [
        (1, "Aiko Tanaka", "aiko@example.com"),
        (2, "Kenji Mori", "kenji@example.com"),
        (3, "Yuki Sato", "yuki@example.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| Author {
        id: AuthorId::new(id).unwrap(),
        name: name.into(),
        email: EmailAddress::new(email).unwrap(),
    })
    .collect()
}

fn reference_categories() -> Vec<Category> {
    [(1, "Rust"), (2, "Web"), (3, "Databases"), (4, "Systems")]
        .into_iter()
        .map(|(id, name)| Category {
            id: CategoryId::new(id).unwrap(),
            name: name.into(),
        })
        .collect()
}

struct PostsState {
    posts: Vec<Post>,
    next_id: i64,
}

/// Post storage backed by a plain vector, mirroring the gateway contract:
/// global slug uniqueness, reference checks on insert, a view recorded per
/// slug hit and comments removed with their post.
pub struct InMemoryPosts {
    state: Mutex<PostsState>,
    authors: HashMap<i64, Author>,
    categories: HashMap<i64, Category>,
    comments: Arc<InMemoryComments>,
}

impl InMemoryPosts {
    pub fn new(comments: Arc<InMemoryComments>) -> Self {
        Self {
            state: Mutex::new(PostsState {
                posts: Vec::new(),
                next_id: 1,
            }),
            authors: reference_authors()
                .into_iter()
                .map(|a| (i64::from(a.id), a))
                .collect(),
            categories: reference_categories()
                .into_iter()
                .map(|c| (i64::from(c.id), c))
                .collect(),
            comments,
        }
    }

    /// Pushes a prebuilt post, keeping the id counter ahead of it.
    pub fn seed(&self, post: Post) {
        let mut state = self.state.lock().unwrap();
        state.next_id = state.next_id.max(i64::from(post.id) + 1);
        state.posts.push(post);
    }

    pub fn stored(&self) -> Vec<Post> {
        self.state.lock().unwrap().posts.clone()
    }

    fn author(&self, id: AuthorId) -> Author {
        self.authors
            .get(&i64::from(id))
            .cloned()
            .expect("author on file")
    }

    fn category(&self, id: CategoryId) -> Category {
        self.categories
            .get(&i64::from(id))
            .cloned()
            .expect("category on file")
    }

    fn with_refs(&self, post: Post) -> PostWithRefs {
        PostWithRefs {
            author: self.author(post.author_id),
            category: self.category(post.category_id),
            post,
        }
    }

    fn detail(&self, post: Post) -> PostDetail {
        PostDetail {
            author: self.author(post.author_id),
            category: self.category(post.category_id),
            comments: self.comments.for_post(post.id),
            post,
        }
    }

    fn matches(filter: &PostListFilter, post: &Post) -> bool {
        let title_ok = filter.title_contains.as_ref().is_none_or(|needle| {
            post.title
                .as_str()
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let category_ok = filter
            .category_id
            .is_none_or(|id| i64::from(post.category_id) == id);
        title_ok && category_ok
    }
}

#[async_trait]
impl PostRepository for InMemoryPosts {
    async fn list_page(
        &self,
        filter: &PostListFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<PostWithRefs>> {
        let mut rows: Vec<Post> = {
            let state = self.state.lock().unwrap();
            state
                .posts
                .iter()
                .filter(|p| Self::matches(filter, p))
                .cloned()
                .collect()
        };
        rows.sort_by(|a, b| {
            b.published_on
                .cmp(&a.published_on)
                .then_with(|| i64::from(a.id).cmp(&i64::from(b.id)))
        });

        Ok(rows
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(limit as usize)
            .map(|post| self.with_refs(post))
            .collect())
    }

    async fn count(&self, filter: &PostListFilter) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        let total = state.posts.iter().filter(|p| Self::matches(filter, p)).count();
        Ok(total as u64)
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let state = self.state.lock().unwrap();
        Ok(state.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_id_with_author(&self, id: PostId) -> DomainResult<Option<PostWithAuthor>> {
        let post = {
            let state = self.state.lock().unwrap();
            state.posts.iter().find(|p| p.id == id).cloned()
        };
        Ok(post.map(|post| PostWithAuthor {
            author: self.author(post.author_id),
            post,
        }))
    }

    async fn find_detail_by_id(&self, id: PostId) -> DomainResult<Option<PostDetail>> {
        let post = {
            let state = self.state.lock().unwrap();
            state.posts.iter().find(|p| p.id == id).cloned()
        };
        Ok(post.map(|post| self.detail(post)))
    }

    async fn find_detail_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<PostDetail>> {
        let post = {
            let mut state = self.state.lock().unwrap();
            let Some(post) = state.posts.iter_mut().find(|p| p.slug == *slug) else {
                return Ok(None);
            };
            post.views += 1;
            post.clone()
        };
        Ok(Some(self.detail(post)))
    }

    async fn slug_exists(&self, slug: &PostSlug, exclude: Option<PostId>) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts
            .iter()
            .any(|p| p.slug == *slug && exclude != Some(p.id)))
    }

    async fn find_slug_by_id(&self, id: PostId) -> DomainResult<Option<PostSlug>> {
        let state = self.state.lock().unwrap();
        Ok(state.posts.iter().find(|p| p.id == id).map(|p| p.slug.clone()))
    }

    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut state = self.state.lock().unwrap();
        if state.posts.iter().any(|p| p.slug == post.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        if !self.authors.contains_key(&i64::from(post.author_id))
            || !self.categories.contains_key(&i64::from(post.category_id))
        {
            return Err(DomainError::NotFound("referenced record not found".into()));
        }

        let id = PostId::new(state.next_id)?;
        state.next_id += 1;
        let stored = Post {
            id,
            title: post.title,
            body: post.body,
            featured_image: post.featured_image,
            seo: post.seo,
            slug: post.slug,
            views: 0,
            published_on: post.published_on,
            modified_on: None,
            author_id: post.author_id,
            category_id: post.category_id,
        };
        state.posts.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut state = self.state.lock().unwrap();
        if state
            .posts
            .iter()
            .any(|p| p.slug == update.slug && p.id != update.id)
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let Some(post) = state.posts.iter_mut().find(|p| p.id == update.id) else {
            return Err(DomainError::NotFound("post not found".into()));
        };

        post.title = update.title;
        post.body = update.body;
        post.featured_image = update.featured_image;
        post.seo = update.seo;
        post.slug = update.slug;
        post.author_id = update.author_id;
        post.category_id = update.category_id;
        post.modified_on = Some(update.modified_on);
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        {
            let mut state = self.state.lock().unwrap();
            let before = state.posts.len();
            state.posts.retain(|p| p.id != id);
            if state.posts.len() == before {
                return Err(DomainError::NotFound("post not found".into()));
            }
        }
        self.comments.remove_for_post(id);
        Ok(())
    }
}
