// src/domain/email.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Shared address type for authors and commenters. The format rule is
/// deliberately loose: exactly one `@`, a non-empty part on each side and
/// no whitespace. Deliverability is not checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_well_formed(&value) {
            return Err(DomainError::Validation(
                "email address is malformed".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

fn is_well_formed(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_plain_address() {
        let email = EmailAddress::new("reader@example.com").unwrap();
        assert_eq!(email.as_str(), "reader@example.com");
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(EmailAddress::new("reader.example.com").is_err());
    }

    #[test]
    fn rejects_multiple_at_signs() {
        assert!(EmailAddress::new("reader@@example.com").is_err());
        assert!(EmailAddress::new("a@b@c").is_err());
    }

    #[test]
    fn rejects_empty_sides() {
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("reader@").is_err());
        assert!(EmailAddress::new("").is_err());
    }

    #[test]
    fn rejects_whitespace() {
        assert!(EmailAddress::new("rea der@example.com").is_err());
        assert!(EmailAddress::new(" reader@example.com").is_err());
    }
}
