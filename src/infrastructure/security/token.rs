// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult, AuthError},
    ports::{security::TokenManager, time::Clock},
};
use crate::domain::user::UserId;
use crate::infrastructure::security::claims::{ALGORITHM, Claims, TokenHeader};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use hmac::{Hmac, Mac};
use serde::{Serialize, de::DeserializeOwned};
use sha2::Sha256;
use std::{sync::Arc, time::Duration};

type HmacSha256 = Hmac<Sha256>;

/// Issues and validates `header.payload.signature` tokens signed with
/// HMAC-SHA256 under a single process-wide secret.
#[derive(Clone)]
pub struct HmacTokenManager {
    signer: HmacSha256,
    ttl: ChronoDuration,
    clock: Arc<dyn Clock>,
}

impl HmacTokenManager {
    pub fn new(secret: &str, ttl: Duration, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        if secret.is_empty() {
            return Err(ApplicationError::configuration("token signing secret is empty"));
        }
        let signer = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|err| ApplicationError::configuration(err.to_string()))?;
        let ttl = ChronoDuration::from_std(ttl)
            .map_err(|_| ApplicationError::configuration("token ttl out of range"))?;

        Ok(Self { signer, ttl, clock })
    }

    fn sign(&self, signing_input: &str) -> Vec<u8> {
        let mut mac = self.signer.clone();
        mac.update(signing_input.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }

    fn encode<H: Serialize, C: Serialize>(&self, header: &H, claims: &C) -> ApplicationResult<String> {
        let header = encode_segment(header)?;
        let payload = encode_segment(claims)?;
        let signing_input = format!("{header}.{payload}");
        let signature = URL_SAFE_NO_PAD.encode(self.sign(&signing_input));
        Ok(format!("{signing_input}.{signature}"))
    }

    fn verify_signature(&self, header: &str, payload: &str, signature: &str) -> Result<(), AuthError> {
        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| AuthError::BadSignature)?;
        let mut mac = self.signer.clone();
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::BadSignature)
    }
}

fn encode_segment<T: Serialize>(value: &T) -> ApplicationResult<String> {
    let json = serde_json::to_vec(value)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, AuthError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| AuthError::MalformedToken)?;
    serde_json::from_slice(&bytes).map_err(|_| AuthError::MalformedToken)
}

fn split_token(token: &str) -> Result<(&str, &str, &str), AuthError> {
    let mut segments = token.split('.');
    match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(header), Some(payload), Some(signature), None)
            if !header.is_empty() && !payload.is_empty() && !signature.is_empty() =>
        {
            Ok((header, payload, signature))
        }
        _ => Err(AuthError::MalformedToken),
    }
}

fn timestamp(secs: i64) -> Result<DateTime<Utc>, AuthError> {
    DateTime::<Utc>::from_timestamp(secs, 0).ok_or(AuthError::MalformedToken)
}

#[async_trait]
impl TokenManager for HmacTokenManager {
    async fn issue(&self, subject: UserId) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;

        let claims = Claims::new(subject, issued_at.timestamp(), expires_at.timestamp());
        let token = self.encode(&TokenHeader::hs256(), &claims)?;

        Ok(AuthTokenDto {
            token,
            issued_at,
            expires_at,
            expires_in: self.ttl.num_seconds().max(0),
        })
    }

    async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let (header_segment, payload_segment, signature_segment) = split_token(token)?;

        let header: TokenHeader = decode_segment(header_segment)?;
        if header.alg != ALGORITHM {
            return Err(AuthError::AlgorithmMismatch);
        }

        self.verify_signature(header_segment, payload_segment, signature_segment)?;

        let claims: Claims = decode_segment(payload_segment)?;
        let now = self.clock.now();
        if now.timestamp() >= claims.exp {
            return Err(AuthError::Expired);
        }

        let id = claims.subject().ok_or(AuthError::MissingSubjectClaim)?;
        let expires_at = timestamp(claims.exp)?;
        let issued_at = claims.iat.map(timestamp).transpose()?.unwrap_or(now);

        Ok(AuthenticatedUser {
            id,
            issued_at,
            expires_at,
        })
    }
}
