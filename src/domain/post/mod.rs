pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewPost, Post, PostDetail, PostUpdate, PostWithAuthor, PostWithRefs};
pub use repository::{PostListFilter, PostRepository};
pub use value_objects::{PostBody, PostId, PostSlug, PostTitle, SeoMeta};
