//! User repository for all PostgreSQL operations related to users.
//!
//! The `UserRepository` trait is the seam the service layer depends on;
//! `PgUserRepository` is the production implementation over a `PgPool`.

use async_trait::async_trait;
use log::{debug, info};
use sqlx::PgPool;

use crate::errors::UserError;
use crate::models::User;

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    email VARCHAR(100) UNIQUE NOT NULL
)";

/// Advisory lock key serialising concurrent schema bootstraps.
const SCHEMA_LOCK_KEY: i64 = 0x7573_6572_735f_6464;

const INSERT_USER: &str = "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id";
const SELECT_USER: &str = "SELECT id, name, email FROM users WHERE id = $1";
const UPDATE_USER: &str = "UPDATE users SET name = $1, email = $2 WHERE id = $3";
const DELETE_USER: &str = "DELETE FROM users WHERE id = $1";

/// Persistence operations for users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return it with the database-generated id.
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Fetch a user by id.
    async fn get(&self, id: i64) -> Result<User, UserError>;

    /// Replace name and email of an existing user.
    async fn update(&self, id: i64, user: User) -> Result<(), UserError>;

    /// Remove a user by id.
    async fn delete(&self, id: i64) -> Result<(), UserError>;
}

/// Repository backed by the `users` table.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `users` table if it does not exist yet.
    ///
    /// Called once during startup. Safe to call concurrently from several
    /// processes; the DDL runs under a transaction-scoped advisory lock.
    pub async fn ensure_schema(&self) -> Result<(), UserError> {
        info!("Ensuring users table exists...");
        let mut tx = self.pool.begin().await?;
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SCHEMA_LOCK_KEY)
            .execute(&mut *tx)
            .await?;
        sqlx::query(CREATE_USERS_TABLE).execute(&mut *tx).await?;
        tx.commit().await?;
        info!("Users table is ready");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let id: i64 = sqlx::query_scalar(INSERT_USER)
            .bind(&user.name)
            .bind(&user.email)
            .fetch_one(&self.pool)
            .await
            .map_err(UserError::Storage)?;

        debug!("Repository: Inserted user with id: {}", id);
        Ok(User { id, ..user })
    }

    async fn get(&self, id: i64) -> Result<User, UserError> {
        debug!("Repository: Finding user by ID: {}", id);
        let user = sqlx::query_as::<_, User>(SELECT_USER)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(user)
    }

    async fn update(&self, id: i64, user: User) -> Result<(), UserError> {
        debug!("Repository: Updating user with id: {}", id);
        let result = sqlx::query(UPDATE_USER)
            .bind(&user.name)
            .bind(&user.email)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(UserError::Storage)?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), UserError> {
        debug!("Repository: Deleting user with id: {}", id);
        let result = sqlx::query(DELETE_USER)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(UserError::Storage)?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound);
        }
        Ok(())
    }
}
