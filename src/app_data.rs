use std::sync::Arc;
use sea_orm::DatabaseConnection;
use crate::stores::ItemStore;

/// Centralized application data following the main-owned stores pattern
///
/// The connection is created and migrated once in `main.rs`; stores are
/// built here and shared with the API layer and CLI commands.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(db)
///   ├─ db (DatabaseConnection)
///   └─ item_store (Arc<ItemStore>)
///   ↓ wrapped in Arc<AppData>
///   ├─ api::build_routes(app_data, ..)
///   └─ cli::execute_command(cli, &app_data)
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub item_store: Arc<ItemStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database connection should be migrated before calling this.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");
        let item_store = Arc::new(ItemStore::new(db.clone()));
        tracing::debug!("Stores created");

        Self { db, item_store }
    }
}
