// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod photo_repo;
pub mod security;
pub mod time;
pub mod user_repo;

// 時刻関連
pub use time::{FixedClock, TickingClock, fixed_now};

// セキュリティ関連
pub use security::StrictPasswordHasher;

// リポジトリ
pub use photo_repo::InMemoryPhotoRepo;
pub use user_repo::InMemoryUserRepo;
