use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

#[derive(Clone)]
pub struct DbService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DbService {
    /// Connects and brings the schema up to date.
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        let mut opts = ConnectOptions::new(uri.to_owned());
        opts.connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);
        if uri.starts_with("sqlite:") {
            // An in-memory SQLite database lives exactly as long as its one connection.
            opts.max_connections(1).min_connections(1);
        }

        info!("Connecting to database...");
        let database_connection = Database::connect(opts).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Database ready.");

        Ok(Self { database_connection })
    }
}
