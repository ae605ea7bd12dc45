use sea_orm::{Database, DatabaseConnection, DbErr};

/// Creates the process-wide database connection pool. Called once at
/// startup; handlers receive clones of the returned handle.
pub async fn create_pool(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
