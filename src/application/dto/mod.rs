pub mod authors;
pub mod categories;
pub mod comments;
pub mod posts;
pub mod serde_time;

pub use authors::AuthorDto;
pub use categories::CategoryDto;
pub use comments::{CommentDto, PostedCommentDto};
pub use posts::{
    CategoryPostsPageDto, PostDetailDto, PostDto, PostListItemDto, PostListPageDto,
    PostWithAuthorDto,
};
