use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

// SQLite reports violated constraints by column path in the message,
// e.g. "UNIQUE constraint failed: posts.slug".
const CNT_POST_SLUG: &str = "posts.slug";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message().to_string();
            match db_err.kind() {
                ErrorKind::UniqueViolation if message.contains(CNT_POST_SLUG) => {
                    DomainError::Conflict("slug already exists".into())
                }
                ErrorKind::UniqueViolation => {
                    DomainError::Conflict("unique constraint violated".into())
                }
                ErrorKind::ForeignKeyViolation => {
                    DomainError::NotFound("referenced record not found".into())
                }
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    DomainError::Validation(message)
                }
                _ => DomainError::Persistence(message),
            }
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
