// tests/support/helpers.rs
use super::mocks::{InMemoryPhotoRepo, InMemoryUserRepo, StrictPasswordHasher, TickingClock};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::AUTHORIZATION};
use axum::response::Response;
use photovault::application::{
    dto::AuthenticatedUser,
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use photovault::domain::{photo::PhotoRepository, user::UserId, user::UserRepository};
use photovault::infrastructure::security::token::HmacTokenManager;
use photovault::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt as _;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TOKEN_TTL: Duration = Duration::from_secs(72 * 60 * 60);

/// モックで組み立てたアプリケーション一式
pub struct TestApp {
    pub router: Router,
    pub services: Arc<ApplicationServices>,
    pub users: Arc<InMemoryUserRepo>,
    pub photos: Arc<InMemoryPhotoRepo>,
    pub clock: Arc<dyn Clock>,
}

pub fn build_test_app() -> TestApp {
    build_test_app_with_photos(Arc::new(InMemoryPhotoRepo::default()))
}

pub fn build_test_app_with_photos(photos: Arc<InMemoryPhotoRepo>) -> TestApp {
    let users = Arc::new(InMemoryUserRepo::with_photos(Arc::clone(&photos)));
    let clock: Arc<dyn Clock> = Arc::new(TickingClock::default());

    let user_repo: Arc<dyn UserRepository> = users.clone();
    let photo_repo: Arc<dyn PhotoRepository> = photos.clone();
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(StrictPasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(
        HmacTokenManager::new(TEST_SECRET, TOKEN_TTL, Arc::clone(&clock)).expect("token manager"),
    );

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        photo_repo,
        password_hasher,
        token_manager,
        Arc::clone(&clock),
    ));
    let state = HttpState {
        services: Arc::clone(&services),
    };

    TestApp {
        router: build_router(state, &[]),
        services,
        users,
        photos,
        clock,
    }
}

pub fn make_test_router() -> Router {
    build_test_app().router
}

/// サービス層を直接呼ぶテスト用の認可コンテキスト
pub fn actor(id: i64) -> AuthenticatedUser {
    let now = super::mocks::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("positive id"),
        issued_at: now,
        expires_at: now + chrono::Duration::hours(72),
    }
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    router.clone().oneshot(request).await.unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// 登録してログインし、(ユーザー ID, トークン) を返す
pub async fn register_and_login(
    router: &Router,
    username: &str,
    email: &str,
    password: &str,
) -> (i64, String) {
    let resp = send(
        router,
        Method::POST,
        "/users/register",
        None,
        Some(serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = send(
        router,
        Method::POST,
        "/users/login",
        None,
        Some(serde_json::json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = read_json(resp).await;
    let id = json["user"]["id"].as_i64().expect("user id");
    let token = json["token"]["token"]
        .as_str()
        .expect("token string")
        .to_string();
    (id, token)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
