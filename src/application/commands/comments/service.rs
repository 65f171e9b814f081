// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::ports::ClockPort,
    domain::{comment::CommentRepository, post::PostRepository},
};

pub struct CommentIntakeService {
    pub(super) comments: Arc<dyn CommentRepository>,
    pub(super) posts: Arc<dyn PostRepository>,
    pub(super) clock: Arc<ClockPort>,
    pub(super) blocklist: Vec<String>,
}

impl CommentIntakeService {
    /// `blocklist` entries are lower-cased once here; the moderation scan
    /// compares lower-cased tokens against them.
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        posts: Arc<dyn PostRepository>,
        clock: Arc<ClockPort>,
        blocklist: Vec<String>,
    ) -> Self {
        let blocklist = blocklist
            .into_iter()
            .map(|word| word.to_lowercase())
            .collect();
        Self {
            comments,
            posts,
            clock,
            blocklist,
        }
    }
}
