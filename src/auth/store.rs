/**
 * Credential Store
 *
 * This module wraps the user-record persistence service behind the
 * `UserStore` trait. The store exposes exactly the three operations the
 * session controller needs: create, find-by-email, find-by-id.
 *
 * # Implementations
 *
 * - `PgUserStore` - PostgreSQL-backed store (sqlx connection pool)
 * - `MemoryUserStore` - in-memory store used by tests
 *
 * The store handle is constructed once at startup and injected into the
 * application state; nothing in this crate reaches for a global
 * connection.
 *
 * # Email Uniqueness
 *
 * Uniqueness is enforced at the store layer (a UNIQUE constraint in
 * Postgres, an explicit check under the write lock in memory). Callers
 * still perform a find-before-insert for the friendlier 409 path, but a
 * racing duplicate insert surfaces as `StoreError::DuplicateEmail`
 * rather than a second row.
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::auth::users::{NewUser, User};

/// Postgres error code for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";

/// Errors surfaced by the credential store
#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with this email already exists
    #[error("email already registered")]
    DuplicateEmail,

    /// Underlying database failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Key-lookup/insert interface over the user-record store
///
/// Object-safe so that the application state can hold `Arc<dyn UserStore>`
/// and tests can substitute the in-memory implementation.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user and return the stored record
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Look up a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Look up a user by numeric identifier
    async fn find_by_id(&self, user_num: i64) -> Result<Option<User>, StoreError>;
}

/// PostgreSQL-backed credential store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Connect to the database and run pending migrations
    ///
    /// # Arguments
    /// * `database_url` - Postgres connection string
    ///
    /// # Errors
    ///
    /// Returns the connection or migration failure; startup aborts on
    /// either, there is no degraded store-less mode.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        tracing::info!("Running database migrations...");
        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(|e| StoreError::Database(sqlx::Error::Migrate(Box::new(e))))?;

        tracing::info!("Database connection pool created successfully");
        Ok(Self { pool })
    }

    /// Wrap an existing pool (used by tests that manage their own schema)
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING user_num, first_name, last_name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::DuplicateEmail
            } else {
                StoreError::Database(e)
            }
        })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_num, first_name, last_name, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, user_num: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_num, first_name, last_name, email, password_hash, created_at, updated_at
            FROM users
            WHERE user_num = $1
            "#,
        )
        .bind(user_num)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

/// Check whether a sqlx error is a unique constraint violation
fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .map(|code| code == UNIQUE_VIOLATION)
        .unwrap_or(false)
}

/// In-memory credential store
///
/// Mirrors the Postgres semantics (sequential user_num, unique email)
/// without external services. Used by the test suite.
#[derive(Clone, Default)]
pub struct MemoryUserStore {
    inner: Arc<RwLock<MemoryStoreInner>>,
}

#[derive(Default)]
struct MemoryStoreInner {
    next_user_num: i64,
    users: HashMap<i64, User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;

        // Duplicate check under the write lock, matching the database
        // UNIQUE constraint.
        if inner.users.values().any(|u| u.email == new_user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        inner.next_user_num += 1;
        let now = Utc::now();
        let user = User {
            user_num: inner.next_user_num,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(user.user_num, user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, user_num: i64) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&user_num).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: email.to_string(),
            password_hash: "$2b$10$hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MemoryUserStore::new();

        let first = store.create(new_user("a@example.com")).await.unwrap();
        let second = store.create(new_user("b@example.com")).await.unwrap();

        assert_eq!(first.user_num, 1);
        assert_eq!(second.user_num, 2);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryUserStore::new();

        store.create(new_user("dup@example.com")).await.unwrap();
        let result = store.create(new_user("dup@example.com")).await;

        assert!(matches!(result, Err(StoreError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let store = MemoryUserStore::new();
        store.create(new_user("find@example.com")).await.unwrap();

        let found = store.find_by_email("find@example.com").await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().email, "find@example.com");

        let missing = store.find_by_email("nope@example.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = MemoryUserStore::new();
        let created = store.create(new_user("id@example.com")).await.unwrap();

        let found = store.find_by_id(created.user_num).await.unwrap();
        assert!(found.is_some());

        let missing = store.find_by_id(9999).await.unwrap();
        assert!(missing.is_none());
    }
}
