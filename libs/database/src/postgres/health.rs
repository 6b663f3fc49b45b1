use sea_orm::DatabaseConnection;

use crate::common::{DatabaseError, DatabaseResult};

/// Verify the connection is alive by pinging the database.
pub async fn check_connection(db: &DatabaseConnection) -> DatabaseResult<()> {
    db.ping()
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))
}
