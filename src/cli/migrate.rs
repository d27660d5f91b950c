use sea_orm::DatabaseConnection;
use migration::{Migrator, MigratorTrait};

/// Report the migration state after startup migrations have run
///
/// The binary migrates on every start, so this only confirms that nothing
/// is left pending.
pub async fn report_migrations(db: &DatabaseConnection) -> Result<(), Box<dyn std::error::Error>> {
    let applied = Migrator::get_applied_migrations(db).await?;
    let pending = Migrator::get_pending_migrations(db).await?;

    tracing::info!(applied = applied.len(), pending = pending.len(), "Migration status");
    println!("Applied migrations: {}", applied.len());
    for migration in &applied {
        println!("  {}", migration.name());
    }

    if !pending.is_empty() {
        return Err(format!("{} migrations are still pending", pending.len()).into());
    }

    Ok(())
}
