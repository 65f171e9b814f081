// src/domain/author.rs
use crate::domain::email::EmailAddress;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(pub i64);

impl AuthorId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("author id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AuthorId> for i64 {
    fn from(value: AuthorId) -> Self {
        value.0
    }
}

/// Authors are reference data maintained outside this service; rows only
/// ever reach the application through the repository.
#[derive(Debug, Clone)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub email: EmailAddress,
}

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn list_all(&self) -> DomainResult<Vec<Author>>;
}
