// tests/support/mocks/security.rs
use async_trait::async_trait;
use photovault::application::{ApplicationResult, ports::security::PasswordHasher};

const PREFIX: &str = "hashed::";

/// 高速な決定論的ハッシャー。`hashed::<password>` を保存し、完全一致のみ検証成功とする。
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("{PREFIX}{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> bool {
        expected_hash
            .strip_prefix(PREFIX)
            .is_some_and(|stored| stored == password)
    }
}
