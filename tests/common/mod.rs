// Common test utilities for integration tests

use std::sync::Arc;
use contact_items_backend::api::build_routes;
use contact_items_backend::app_data::AppData;
use contact_items_backend::stores::ItemStore;
use migration::{Migrator, MigratorTrait};
use poem::Route;
use poem::test::{TestClient, TestResponse};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Creates a test items database with migrations applied
///
/// Pinned to one connection so every query sees the same memory database.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates a test item store over a fresh database
pub async fn setup_test_store() -> Arc<ItemStore> {
    Arc::new(ItemStore::new(setup_test_db().await))
}

/// Creates a test client for the full route tree, backed by a fresh database
pub async fn setup_test_client() -> TestClient<Route> {
    let app_data = Arc::new(AppData::init(setup_test_db().await));
    TestClient::new(build_routes(app_data, "http://localhost:3000/api"))
}

/// Reads a test response body as JSON
pub async fn json_body(resp: TestResponse) -> serde_json::Value {
    resp.0
        .into_body()
        .into_json()
        .await
        .expect("Response body is not valid JSON")
}
