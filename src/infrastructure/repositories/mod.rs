// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_author;
mod sqlite_category;
mod sqlite_comment;
mod sqlite_post;

pub use sqlite_author::SqliteAuthorRepository;
pub use sqlite_category::SqliteCategoryRepository;
pub use sqlite_comment::SqliteCommentRepository;
pub use sqlite_post::SqlitePostRepository;
