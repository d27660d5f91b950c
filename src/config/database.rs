use sea_orm::{Database, DatabaseConnection};
use migration::{Migrator, MigratorTrait};
use crate::config::BootstrapSettings;
use crate::errors::InternalError;
use crate::errors::internal::DatabaseError;

/// Initialize the items database connection
///
/// Does NOT run migrations - call `migrate_database()` separately.
///
/// # Errors
/// Returns `InternalError::Database` when the connection cannot be established
pub async fn init_database(bootstrap_settings: &BootstrapSettings) -> Result<DatabaseConnection, InternalError> {
    let database_url = bootstrap_settings.database_url();

    let db = Database::connect(database_url)
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::debug!("Connected to items database: {}", database_url);

    Ok(db)
}

/// Run all pending migrations on the items database
///
/// # Errors
/// Returns `InternalError::Database` when a migration fails
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|source| DatabaseError::Migration { source })?;

    tracing::debug!("Items database migrations completed");

    Ok(())
}
