// src/infrastructure/security/claims.rs
use crate::domain::user::UserId;
use serde::{Deserialize, Serialize};

pub const ALGORITHM: &str = "HS256";
pub const TOKEN_TYPE: &str = "JWT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    pub alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
}

impl TokenHeader {
    pub fn hs256() -> Self {
        Self {
            alg: ALGORITHM.into(),
            typ: Some(TOKEN_TYPE.into()),
        }
    }
}

/// Subject as found on the wire. Anything other than a positive integer (or
/// a string holding one) is kept so the caller can reject it specifically
/// instead of failing the whole payload parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubjectClaim {
    Id(i64),
    Text(String),
    Other(serde_json::Value),
}

impl SubjectClaim {
    pub fn user_id(&self) -> Option<UserId> {
        let raw = match self {
            Self::Id(id) => *id,
            Self::Text(text) => text.trim().parse::<i64>().ok()?,
            Self::Other(_) => return None,
        };
        UserId::new(raw).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<SubjectClaim>,
    /// Unix seconds.
    pub exp: i64,
    /// Unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    pub fn new(subject: UserId, issued_at: i64, expires_at: i64) -> Self {
        Self {
            sub: Some(SubjectClaim::Id(subject.into())),
            exp: expires_at,
            iat: Some(issued_at),
        }
    }

    pub fn subject(&self) -> Option<UserId> {
        self.sub.as_ref().and_then(SubjectClaim::user_id)
    }
}
