use crate::domain::author::{Author, AuthorId};
use crate::domain::category::{Category, CategoryId};
use crate::domain::email::EmailAddress;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostBody, PostDetail, PostId, PostListFilter, PostRepository, PostSlug,
    PostTitle, PostUpdate, PostWithAuthor, PostWithRefs, SeoMeta,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

use super::error::map_sqlx;
use super::sqlite_comment::{CommentRow, comments_for_post};

#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    body: String,
    featured_image: Option<String>,
    meta_title: Option<String>,
    meta_description: Option<String>,
    meta_keywords: Option<String>,
    slug: String,
    views: i64,
    published_on: DateTime<Utc>,
    modified_on: Option<DateTime<Utc>>,
    author_id: i64,
    category_id: i64,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            body: PostBody::new(row.body)?,
            featured_image: row.featured_image,
            seo: SeoMeta {
                title: row.meta_title,
                description: row.meta_description,
                keywords: row.meta_keywords,
            },
            slug: PostSlug::new(row.slug)?,
            views: row.views,
            published_on: row.published_on,
            modified_on: row.modified_on,
            author_id: AuthorId::new(row.author_id)?,
            category_id: CategoryId::new(row.category_id)?,
        })
    }
}

// Author and category columns are aliased in the joined selects so they
// never collide with the post's own columns.
#[derive(Debug, FromRow)]
struct PostWithRefsRow {
    #[sqlx(flatten)]
    post: PostRow,
    author_name: String,
    author_email: String,
    category_name: String,
}

impl TryFrom<PostWithRefsRow> for PostWithRefs {
    type Error = DomainError;

    fn try_from(row: PostWithRefsRow) -> Result<Self, Self::Error> {
        let author = Author {
            id: AuthorId::new(row.post.author_id)?,
            name: row.author_name,
            email: EmailAddress::new(row.author_email)?,
        };
        let category = Category {
            id: CategoryId::new(row.post.category_id)?,
            name: row.category_name,
        };
        Ok(PostWithRefs {
            post: Post::try_from(row.post)?,
            author,
            category,
        })
    }
}

#[derive(Debug, FromRow)]
struct PostWithAuthorRow {
    #[sqlx(flatten)]
    post: PostRow,
    author_name: String,
    author_email: String,
}

impl TryFrom<PostWithAuthorRow> for PostWithAuthor {
    type Error = DomainError;

    fn try_from(row: PostWithAuthorRow) -> Result<Self, Self::Error> {
        let author = Author {
            id: AuthorId::new(row.post.author_id)?,
            name: row.author_name,
            email: EmailAddress::new(row.author_email)?,
        };
        Ok(PostWithAuthor {
            post: Post::try_from(row.post)?,
            author,
        })
    }
}

const JOINED_SELECT: &str = "SELECT p.id, p.title, p.body, p.featured_image, p.meta_title, \
     p.meta_description, p.meta_keywords, p.slug, p.views, p.published_on, p.modified_on, \
     p.author_id, p.category_id, a.name AS author_name, a.email AS author_email, \
     c.name AS category_name \
     FROM posts p \
     JOIN authors a ON a.id = p.author_id \
     JOIN categories c ON c.id = p.category_id";

fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Sqlite>, filter: &'a PostListFilter) {
    let mut has_where = false;
    if let Some(title) = &filter.title_contains {
        builder.push(" WHERE p.title LIKE ");
        builder.push_bind(format!("%{title}%"));
        has_where = true;
    }

    if let Some(category_id) = filter.category_id {
        if has_where {
            builder.push(" AND ");
        } else {
            builder.push(" WHERE ");
        }
        builder.push("p.category_id = ");
        builder.push_bind(category_id);
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn list_page(
        &self,
        filter: &PostListFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<PostWithRefs>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(JOINED_SELECT);
        apply_filter(&mut builder, filter);
        builder.push(" ORDER BY p.published_on DESC, p.id ASC LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(offset).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<PostWithRefsRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(PostWithRefs::try_from).collect()
    }

    async fn count(&self, filter: &PostListFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) as count FROM posts p");
        apply_filter(&mut builder, filter);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, body, featured_image, meta_title, meta_description, meta_keywords, slug, views, published_on, modified_on, author_id, category_id FROM posts WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_by_id_with_author(&self, id: PostId) -> DomainResult<Option<PostWithAuthor>> {
        let row = sqlx::query_as::<_, PostWithAuthorRow>(
            "SELECT p.id, p.title, p.body, p.featured_image, p.meta_title, p.meta_description, p.meta_keywords, p.slug, p.views, p.published_on, p.modified_on, p.author_id, p.category_id, a.name AS author_name, a.email AS author_email FROM posts p JOIN authors a ON a.id = p.author_id WHERE p.id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(PostWithAuthor::try_from).transpose()
    }

    async fn find_detail_by_id(&self, id: PostId) -> DomainResult<Option<PostDetail>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(JOINED_SELECT);
        builder.push(" WHERE p.id = ");
        builder.push_bind(i64::from(id));

        let row = builder
            .build_query_as::<PostWithRefsRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let comment_rows = comments_for_post(&self.pool, row.post.id).await?;
        build_detail(row, comment_rows).map(Some)
    }

    async fn find_detail_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<PostDetail>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(JOINED_SELECT);
        builder.push(" WHERE p.slug = ");
        builder.push_bind(slug.as_str());

        let row = builder
            .build_query_as::<PostWithRefsRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        // A miss writes nothing; the open transaction just drops.
        let Some(mut row) = row else {
            return Ok(None);
        };

        sqlx::query("UPDATE posts SET views = views + 1 WHERE id = ?")
            .bind(row.post.id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        row.post.views += 1;

        let comment_rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, name, email, text, posted_on, blog_post_id FROM comments WHERE blog_post_id = ? ORDER BY posted_on ASC, id ASC",
        )
        .bind(row.post.id)
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        build_detail(row, comment_rows).map(Some)
    }

    async fn slug_exists(&self, slug: &PostSlug, exclude: Option<PostId>) -> DomainResult<bool> {
        let exclude = exclude.map(i64::from);
        let found: Option<i64> = sqlx::query_scalar(
            "SELECT 1 FROM posts WHERE slug = ? AND (? IS NULL OR id <> ?) LIMIT 1",
        )
        .bind(slug.as_str())
        .bind(exclude)
        .bind(exclude)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(found.is_some())
    }

    async fn find_slug_by_id(&self, id: PostId) -> DomainResult<Option<PostSlug>> {
        let slug: Option<String> = sqlx::query_scalar("SELECT slug FROM posts WHERE id = ?")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        slug.map(PostSlug::new).transpose()
    }

    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            body,
            featured_image,
            seo,
            slug,
            author_id,
            category_id,
            published_on,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (title, body, featured_image, meta_title, meta_description, meta_keywords, slug, published_on, author_id, category_id) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id, title, body, featured_image, meta_title, meta_description, meta_keywords, slug, views, published_on, modified_on, author_id, category_id",
        )
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(&featured_image)
        .bind(&seo.title)
        .bind(&seo.description)
        .bind(&seo.keywords)
        .bind(slug.as_str())
        .bind(published_on)
        .bind(i64::from(author_id))
        .bind(i64::from(category_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            body,
            featured_image,
            seo,
            slug,
            author_id,
            category_id,
            modified_on,
        } = update;

        let row = sqlx::query_as::<_, PostRow>(
            "UPDATE posts SET title = ?, body = ?, featured_image = ?, meta_title = ?, meta_description = ?, meta_keywords = ?, slug = ?, author_id = ?, category_id = ?, modified_on = ? WHERE id = ? RETURNING id, title, body, featured_image, meta_title, meta_description, meta_keywords, slug, views, published_on, modified_on, author_id, category_id",
        )
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(&featured_image)
        .bind(&seo.title)
        .bind(&seo.description)
        .bind(&seo.keywords)
        .bind(slug.as_str())
        .bind(i64::from(author_id))
        .bind(i64::from(category_id))
        .bind(modified_on)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Post::try_from(row),
            None => Err(DomainError::NotFound("post not found".into())),
        }
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

fn build_detail(row: PostWithRefsRow, comment_rows: Vec<CommentRow>) -> DomainResult<PostDetail> {
    let PostWithRefs {
        post,
        author,
        category,
    } = PostWithRefs::try_from(row)?;
    let comments = comment_rows
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PostDetail {
        post,
        author,
        category,
        comments,
    })
}
