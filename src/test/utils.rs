// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::Arc;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use migration::{Migrator, MigratorTrait};
use crate::app_data::AppData;
use crate::stores::ItemStore;

/// Creates an in-memory items database with migrations applied
///
/// Pinned to a single pooled connection: every SQLite memory connection
/// is its own database.
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

/// Creates a test database and item store
///
/// Callers can discard what they don't need:
/// ```rust,ignore
/// let (_db, item_store) = setup_test_store().await;
/// ```
pub async fn setup_test_store() -> (DatabaseConnection, Arc<ItemStore>) {
    let db = setup_test_db().await;
    let item_store = Arc::new(ItemStore::new(db.clone()));
    (db, item_store)
}

/// Creates AppData backed by a fresh in-memory database
pub async fn setup_test_app_data() -> Arc<AppData> {
    Arc::new(AppData::init(setup_test_db().await))
}
