#![allow(dead_code)]

use async_trait::async_trait;
use author_service::application::services::{AuthService, AuthorService};
use author_service::domain::identity::{ROLE_ADMIN, ROLE_USER, TokenData, TokenValidator};
use author_service::domain::repositories::AuthorRepository;
use author_service::error::AppError;
use author_service::infrastructure::cache::{CacheService, MemoryCache};
use author_service::infrastructure::persistence::MemoryAuthorRepository;
use author_service::routes::{app_router, router};
use author_service::state::AppState;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Token accepted with the `Admin` role.
pub const ADMIN_TOKEN: &str = "valid-token";

/// Token accepted with the `User` role.
pub const USER_TOKEN: &str = "user-token";

/// Token accepted by the identity service but with a role the API rejects.
pub const GUEST_TOKEN: &str = "guest-token";

/// Identity service stand-in with a fixed token table.
pub struct StaticTokenValidator;

#[async_trait]
impl TokenValidator for StaticTokenValidator {
    async fn validate_token(&self, token: &str) -> Result<TokenData, AppError> {
        let role = match token {
            ADMIN_TOKEN => ROLE_ADMIN,
            USER_TOKEN => ROLE_USER,
            GUEST_TOKEN => "Guest",
            _ => {
                return Err(AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "token rejected" }),
                ));
            }
        };

        Ok(TokenData {
            user_id: 1,
            username: "tester".to_string(),
            full_name: "Test User".to_string(),
            email: "tester@example.com".to_string(),
            role: role.to_string(),
        })
    }
}

/// Test harness exposing the store and cache behind the server.
pub struct TestApp {
    pub server: TestServer,
    pub repository: MemoryAuthorRepository,
    pub cache: Arc<MemoryCache>,
}

pub fn create_test_state(repository: MemoryAuthorRepository, cache: Arc<MemoryCache>) -> AppState {
    let cache_service: Arc<dyn CacheService> = cache;
    let repository: Arc<dyn AuthorRepository> = Arc::new(repository);

    let author_service = Arc::new(AuthorService::new(repository, cache_service.clone()));
    let auth_service = Arc::new(AuthService::new(Arc::new(StaticTokenValidator)));

    AppState::new(author_service, auth_service, cache_service)
}

pub fn create_test_app() -> TestApp {
    let repository = MemoryAuthorRepository::new();
    let cache = Arc::new(MemoryCache::new(64, Duration::from_secs(300)));

    let state = create_test_state(repository.clone(), cache.clone());
    let server = TestServer::new(router(state)).unwrap();

    TestApp {
        server,
        repository,
        cache,
    }
}

/// Same as [`create_test_app`] but served through the production router,
/// trailing-slash normalization included.
pub fn create_normalized_app() -> TestApp {
    let repository = MemoryAuthorRepository::new();
    let cache = Arc::new(MemoryCache::new(64, Duration::from_secs(300)));

    let state = create_test_state(repository.clone(), cache.clone());
    let app = ServiceExt::<Request>::into_make_service(app_router(state));
    let server = TestServer::new(app).unwrap();

    TestApp {
        server,
        repository,
        cache,
    }
}

/// Creates an author over HTTP and returns its id.
pub async fn create_author(server: &TestServer, name: &str, birth_date: &str) -> String {
    let response = server
        .post("/author/v1/create")
        .authorization_bearer(ADMIN_TOKEN)
        .json(&json!({
            "name": name,
            "bio": "Writer",
            "birth_date": birth_date,
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"]
        .as_str()
        .unwrap()
        .to_string()
}
