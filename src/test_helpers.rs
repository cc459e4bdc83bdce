use std::sync::Arc;

use axum::Router;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use crate::{
    auth::TokenService,
    config::{AppConfig, AuthConfig, DatabaseConfig},
    db::Store,
    routes::router,
    services::ServiceContext,
    state::AppState,
};

pub const TEST_SECRET: &str = "test-signing-secret";

pub fn test_config(secret: &str) -> AppConfig {
    AppConfig {
        database: Some(DatabaseConfig::new("sqlite::memory:")),
        auth: Some(AuthConfig::with_secret(secret)),
        ..AppConfig::default()
    }
}

pub fn test_tokens(secret: &str) -> TokenService {
    TokenService::new(&AuthConfig::with_secret(secret))
}

/// Services over a mock store, signing with [`TEST_SECRET`].
pub fn mock_context(mock: MockDatabase) -> ServiceContext {
    let db = mock.into_connection();
    ServiceContext::new(&Store::with_defaults(&db), &test_tokens(TEST_SECRET))
}

pub fn test_state(db: DatabaseConnection, secret: &str) -> Arc<AppState> {
    AppState::new(
        test_config(secret),
        Store::with_defaults(&db),
        test_tokens(secret),
    )
}

pub fn test_router_with(db: DatabaseConnection, secret: &str) -> Router {
    router(test_state(db, secret))
}

pub fn test_router(secret: &[u8]) -> Router {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    test_router_with(db, &String::from_utf8_lossy(secret))
}
