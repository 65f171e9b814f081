// src/application/commands/comments/add.rs
use super::CommentIntakeService;
use crate::{
    application::{
        dto::{PostDetailDto, PostedCommentDto},
        error::{ApplicationError, ApplicationResult, FieldError, FieldErrors},
    },
    domain::{
        comment::{CommentText, CommenterName, NewComment, moderation},
        email::EmailAddress,
        errors::DomainResult,
        post::PostId,
    },
};

pub struct AddCommentCommand {
    pub blog_post_id: i64,
    pub name: String,
    pub email: String,
    pub text: String,
}

impl CommentIntakeService {
    /// Validates and stores one reader comment. Every field failure is
    /// collected, so a rejected submission reports all problems at once.
    /// `posted_on` is stamped from the service clock.
    pub async fn add_comment(
        &self,
        command: AddCommentCommand,
    ) -> ApplicationResult<PostedCommentDto> {
        let post_id = PostId::new(command.blog_post_id)
            .map_err(|_| ApplicationError::not_found("post not found"))?;

        let name = CommenterName::new(command.name);
        let email = EmailAddress::new(command.email);
        let text = CommentText::new(command.text);

        let mut violations = Vec::new();
        note_violation(&mut violations, "name", &name);
        note_violation(&mut violations, "email", &email);
        note_violation(&mut violations, "text", &text);
        if let Ok(text) = &text {
            if let Some(word) = moderation::first_prohibited_word(text.as_str(), &self.blocklist) {
                violations.push(FieldError::new(
                    "text",
                    format!("the comment contains a prohibited word: {word}"),
                ));
            }
        }

        let (Ok(name), Ok(email), Ok(text), true) =
            (name, email, text, violations.is_empty())
        else {
            return Err(ApplicationError::Validation(FieldErrors(violations)));
        };

        let post_slug = self
            .posts
            .find_slug_by_id(post_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let comment = self
            .comments
            .insert(NewComment {
                name,
                email,
                text,
                posted_on: self.clock.now(),
                post_id,
            })
            .await?;

        Ok(PostedCommentDto {
            comment: comment.into(),
            post_slug: post_slug.into(),
        })
    }

    /// Everything needed to re-render the detail page around a rejected
    /// submission: the post, its author and the comments already stored.
    /// No view is recorded on this path.
    pub async fn redisplay_context(&self, blog_post_id: i64) -> ApplicationResult<PostDetailDto> {
        let id = PostId::new(blog_post_id)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        let detail = self
            .posts
            .find_detail_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(detail.into())
    }
}

fn note_violation<T>(violations: &mut Vec<FieldError>, field: &str, result: &DomainResult<T>) {
    if let Err(err) = result {
        violations.push(FieldError::from_domain(field, err));
    }
}
