// src/domain/photo/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(i64);

impl PhotoId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("photo id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PhotoId> for i64 {
    fn from(value: PhotoId) -> Self {
        value.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUrl(String);

impl PhotoUrl {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("photo url cannot be empty".into()));
        }
        let lower = value.to_ascii_lowercase();
        let rest = lower
            .strip_prefix("https://")
            .or_else(|| lower.strip_prefix("http://"));
        match rest {
            Some(host_and_path) if !host_and_path.is_empty() => {}
            _ => {
                return Err(DomainError::Validation(
                    "photo url must be an absolute http(s) url".into(),
                ));
            }
        }
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation(
                "photo url cannot contain whitespace".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PhotoUrl> for String {
    fn from(value: PhotoUrl) -> Self {
        value.0
    }
}

impl fmt::Display for PhotoUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoTitle(String);

impl PhotoTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > 255 {
            return Err(DomainError::Validation(
                "title must be at most 255 characters".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PhotoTitle> for String {
    fn from(value: PhotoTitle) -> Self {
        value.0
    }
}
