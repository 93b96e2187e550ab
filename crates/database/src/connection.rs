use crate::error::DbError;
use crate::statements::Statements;
use configuration::{DatabaseSettings, Dialect};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// A connection pool for one of the supported dialects.
///
/// Cloning is cheap; every clone refers to the same pool.
#[derive(Debug, Clone)]
pub enum DbPool {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl DbPool {
    pub fn dialect(&self) -> Dialect {
        match self {
            DbPool::Postgres(_) => Dialect::Postgres,
            DbPool::Sqlite(_) => Dialect::Sqlite,
        }
    }
}

/// Establishes a connection pool to the configured database.
///
/// The dialect is taken from `settings` rather than guessed from the URL, so
/// production and tests build their pools through this same call.
pub async fn connect(settings: &DatabaseSettings) -> Result<DbPool, DbError> {
    if settings.url.trim().is_empty() {
        return Err(DbError::ConnectionConfigError(
            "a connection string (DSN) must be set.".to_string(),
        ));
    }
    let acquire_timeout = Duration::from_secs(settings.acquire_timeout_secs);

    let pool = match settings.dialect {
        Dialect::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .acquire_timeout(acquire_timeout)
                .connect(&settings.url)
                .await
                .map_err(DbError::ConnectionError)?;
            DbPool::Postgres(pool)
        }
        Dialect::Sqlite => {
            let options = SqliteConnectOptions::from_str(&settings.url)
                .map_err(|e| DbError::ConnectionConfigError(e.to_string()))?
                .create_if_missing(true);
            // An in-memory database lives only as long as its connection.
            let pool = SqlitePoolOptions::new()
                .max_connections(settings.max_connections)
                .acquire_timeout(acquire_timeout)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
                .connect_with(options)
                .await
                .map_err(DbError::ConnectionError)?;
            DbPool::Sqlite(pool)
        }
    };

    tracing::info!(dialect = ?settings.dialect, "Database connection pool established.");
    Ok(pool)
}

/// Creates the `comments` table if it is absent. Idempotent.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), DbError> {
    let sql = Statements::for_dialect(pool.dialect()).create_table;
    match pool {
        DbPool::Postgres(pool) => {
            sqlx::query(&sql).execute(pool).await?;
        }
        DbPool::Sqlite(pool) => {
            sqlx::query(&sql).execute(pool).await?;
        }
    }
    Ok(())
}
