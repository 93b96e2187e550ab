use crate::connection::DbPool;
use crate::statements::Statements;
use crate::DbError;
use chrono::{SubsecRound, Utc};
use core_types::{Comment, NewComment};
use std::sync::Arc;

/// How many comments `GET /api/comments` returns.
pub const RECENT_COMMENTS_LIMIT: u32 = 10;

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and the row mapping.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: DbPool,
    statements: Arc<Statements>,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: DbPool) -> Self {
        let statements = Arc::new(Statements::for_dialect(pool.dialect()));
        Self { pool, statements }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Fetches a single comment by id.
    ///
    /// Returns `Ok(None)` when no row matches.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, DbError> {
        let sql = self.statements.find_by_id.as_str();
        let comment = match &self.pool {
            DbPool::Postgres(pool) => {
                sqlx::query_as::<_, Comment>(sql)
                    .bind(id)
                    .fetch_optional(pool)
                    .await?
            }
            DbPool::Sqlite(pool) => {
                sqlx::query_as::<_, Comment>(sql)
                    .bind(id)
                    .fetch_optional(pool)
                    .await?
            }
        };
        Ok(comment)
    }

    /// Fetches up to `limit` comments, newest first.
    pub async fn list_recent(&self, limit: u32) -> Result<Vec<Comment>, DbError> {
        let sql = self.statements.list_recent.as_str();
        let limit = i64::from(limit);
        let comments = match &self.pool {
            DbPool::Postgres(pool) => {
                sqlx::query_as::<_, Comment>(sql)
                    .bind(limit)
                    .fetch_all(pool)
                    .await?
            }
            DbPool::Sqlite(pool) => {
                sqlx::query_as::<_, Comment>(sql)
                    .bind(limit)
                    .fetch_all(pool)
                    .await?
            }
        };
        Ok(comments)
    }

    /// Saves a new comment and returns it with its generated id.
    ///
    /// `created` and `updated` are both set to the current time.
    pub async fn insert(&self, candidate: &NewComment) -> Result<Comment, DbError> {
        // Postgres keeps microseconds; truncate so the returned record matches the stored row.
        let now = Utc::now().trunc_subsecs(6);
        let sql = self.statements.insert.as_str();

        let id = match &self.pool {
            DbPool::Postgres(pool) => {
                sqlx::query_scalar::<_, i64>(sql)
                    .bind(&candidate.name)
                    .bind(&candidate.text)
                    .bind(now)
                    .bind(now)
                    .fetch_one(pool)
                    .await?
            }
            DbPool::Sqlite(pool) => {
                sqlx::query_scalar::<_, i64>(sql)
                    .bind(&candidate.name)
                    .bind(&candidate.text)
                    .bind(now)
                    .bind(now)
                    .fetch_one(pool)
                    .await?
            }
        };

        Ok(Comment {
            id,
            name: candidate.name.clone(),
            text: candidate.text.clone(),
            created: now,
            updated: now,
        })
    }
}
