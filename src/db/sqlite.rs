use crate::db::models::DbUser;
use crate::db::schema::SQLITE_INIT;
use crate::error::PassgateError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Pooled handle over the `users` table. Cheap to clone; all clones share one pool.
#[derive(Clone)]
pub struct UsersStorage {
    pool: SqlitePool,
}

impl UsersStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` and ensure the schema exists.
    pub async fn connect(database_url: &str) -> Result<Self, PassgateError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        debug!(database_url, "credential store ready");
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), PassgateError> {
        // sqlx::query runs a single statement
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a new credential row. Fails with `UsernameTaken` if the username already exists.
    pub async fn insert(&self, username: &str, hash: &str) -> Result<(), PassgateError> {
        sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(hash)
            .execute(&self.pool)
            .await
            .map_err(|e| match e.as_database_error() {
                Some(db_err) if db_err.is_unique_violation() => PassgateError::UsernameTaken,
                _ => PassgateError::Database(e),
            })?;
        Ok(())
    }

    pub async fn get_user(&self, username: &str) -> Result<DbUser, PassgateError> {
        sqlx::query_as::<_, DbUser>("SELECT username, password FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(PassgateError::UserNotFound)
    }

    /// Stored hash for an exact username match, or `UserNotFound`.
    pub async fn fetch_hash(&self, username: &str) -> Result<String, PassgateError> {
        self.get_user(username).await.map(|user| user.password)
    }

    pub async fn count(&self) -> Result<i64, PassgateError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Single-connection in-memory store; every pooled connection would otherwise see its own DB.
    pub(crate) async fn memory_storage() -> UsersStorage {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory sqlite");
        let storage = UsersStorage::new(pool);
        storage.init_schema().await.expect("schema init failed");
        storage
    }

    #[tokio::test]
    async fn insert_then_fetch_returns_stored_hash() {
        let storage = memory_storage().await;
        storage.insert("alice", "$2b$08$hash").await.unwrap();

        assert_eq!(storage.fetch_hash("alice").await.unwrap(), "$2b$08$hash");
        assert_eq!(storage.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn fetch_unknown_user_is_not_found() {
        let storage = memory_storage().await;
        let err = storage.fetch_hash("bob").await.unwrap_err();
        assert!(matches!(err, PassgateError::UserNotFound));
    }

    #[tokio::test]
    async fn username_lookup_is_case_sensitive() {
        let storage = memory_storage().await;
        storage.insert("Alice", "h1").await.unwrap();

        assert!(matches!(
            storage.fetch_hash("alice").await,
            Err(PassgateError::UserNotFound)
        ));
        storage.insert("alice", "h2").await.unwrap();
        assert_eq!(storage.fetch_hash("Alice").await.unwrap(), "h1");
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected_and_keeps_first_hash() {
        let storage = memory_storage().await;
        storage.insert("alice", "first").await.unwrap();

        let err = storage.insert("alice", "second").await.unwrap_err();
        assert!(matches!(err, PassgateError::UsernameTaken));
        assert_eq!(storage.fetch_hash("alice").await.unwrap(), "first");
        assert_eq!(storage.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn closed_pool_surfaces_database_error() {
        let storage = memory_storage().await;
        storage.pool().close().await;

        let err = storage.fetch_hash("alice").await.unwrap_err();
        assert!(matches!(err, PassgateError::Database(_)));
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let storage = memory_storage().await;
        storage.insert("alice", "h").await.unwrap();
        storage.init_schema().await.unwrap();
        assert_eq!(storage.count().await.unwrap(), 1);
    }
}
