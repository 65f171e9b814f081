pub mod entity;
pub mod moderation;
pub mod repository;
pub mod value_objects;

pub use entity::{Comment, NewComment};
pub use repository::CommentRepository;
pub use value_objects::{CommentId, CommentText, CommenterName};
