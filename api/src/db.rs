use std::time::Duration;

use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
pub use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Arguments for establishing a database connection
#[derive(Debug, clap::Args)]
pub struct DbArgs {
    #[arg(long, env, default_value_t = 10)]
    pub max_connections: u32,
    #[arg(long, env, default_value_t = 60)]
    pub connection_timeout: u64,
    #[arg(long, env, default_value_t = 10)]
    pub acquire_timeout: u64,
    #[arg(long, env, default_value_t = 60)]
    pub idle_timeout: u64,
    /// Postgres connection string. The in-memory store is used when unset.
    #[arg(long, env)]
    pub database_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Connection(DatabaseConnection);

impl Connection {
    /// Connects to `database_url` with the pool settings in `args`.
    ///
    /// # Errors
    /// This function fails if the database cannot be reached
    pub async fn new(database_url: String, args: &DbArgs) -> Result<Self> {
        let DbArgs {
            max_connections,
            connection_timeout,
            acquire_timeout,
            idle_timeout,
            ..
        } = *args;

        let options = ConnectOptions::new(database_url)
            .max_connections(max_connections)
            .connect_timeout(Duration::from_secs(connection_timeout))
            .acquire_timeout(Duration::from_secs(acquire_timeout))
            .idle_timeout(Duration::from_secs(idle_timeout))
            .clone();

        let connection = Database::connect(options)
            .await
            .context("failed to get database connection")?;

        Ok(Self(connection))
    }

    /// Applies pending migrations.
    ///
    /// # Errors
    /// This function fails if a migration fails
    pub async fn migrate(&self) -> Result<()> {
        Migrator::up(&self.0, None)
            .await
            .context("failed to run migrations")
    }

    #[must_use]
    pub fn get(&self) -> &DatabaseConnection {
        &self.0
    }
}
