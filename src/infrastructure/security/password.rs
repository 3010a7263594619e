use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id with a fixed work factor. Every hash gets a fresh OS-random salt;
/// parameters are embedded in the PHC string, so verification does not
/// depend on the hasher's own configuration.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        // m = 19 MiB, t = 2, p = 1
        Self {
            params: Params::DEFAULT,
        }
    }
}

impl Argon2PasswordHasher {
    pub fn with_params(m_cost_kib: u32, t_cost: u32, p_cost: u32) -> ApplicationResult<Self> {
        let params = Params::new(m_cost_kib, t_cost, p_cost, None)
            .map_err(|err| ApplicationError::configuration(err.to_string()))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        let argon2 = self.argon2();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::infrastructure(format!("hashing failed: {err}")))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> bool {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        let argon2 = self.argon2();
        let outcome = tokio::task::spawn_blocking(move || {
            let Ok(parsed) = PasswordHash::new(&expected_hash) else {
                tracing::warn!("stored password hash is not a valid PHC string");
                return false;
            };
            argon2.verify_password(password.as_bytes(), &parsed).is_ok()
        })
        .await;

        outcome.unwrap_or_else(|err| {
            tracing::error!(error = %err, "password verification task failed");
            false
        })
    }
}
