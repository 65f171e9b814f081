// src/application/commands/comments/mod.rs
mod add;
mod service;

pub use add::AddCommentCommand;
pub use service::CommentIntakeService;
