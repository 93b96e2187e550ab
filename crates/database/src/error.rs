use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid database connection settings: {0}")]
    ConnectionConfigError(String),

    #[error("Failed to connect to the database: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("{0}")]
    QueryError(#[from] sqlx::Error),
}
