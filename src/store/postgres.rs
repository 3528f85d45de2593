//! PostgreSQL user store. Each call acquires a pooled connection and runs in its own transaction;
//! dropping an uncommitted transaction rolls it back, so every error path releases cleanly.

use crate::error::StoreError;
use crate::model::{NewUser, UserChanges, UserId, UserRecord};
use crate::store::UserStore;
use async_trait::async_trait;
use sqlx::PgPool;

const SELECT_BY_ID: &str = "SELECT id, name, email FROM users WHERE id = $1";
const SELECT_BY_NAME: &str = "SELECT id, name, email FROM users WHERE name = $1";
const INSERT_WITH_ID: &str =
    "INSERT INTO users (id, name, email) VALUES ($1, $2, $3) RETURNING id, name, email";
const INSERT_GENERATED: &str =
    "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email";
const UPDATE_BY_ID: &str =
    "UPDATE users SET name = $2, email = $3 WHERE id = $1 RETURNING id, name, email";
const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = $1 RETURNING id";

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        PgUserStore { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, StoreError> {
        tracing::debug!(sql = %SELECT_BY_ID, id = %id, "query");
        let row = sqlx::query_as::<_, UserRecord>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<UserRecord>, StoreError> {
        tracing::debug!(sql = %SELECT_BY_NAME, name = %name, "query");
        let row = sqlx::query_as::<_, UserRecord>(SELECT_BY_NAME)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let mut tx = self.pool.begin().await?;
        let row = match &user.id {
            Some(id) => {
                tracing::debug!(sql = %INSERT_WITH_ID, id = %id, "query (tx)");
                sqlx::query_as::<_, UserRecord>(INSERT_WITH_ID)
                    .bind(id)
                    .bind(&user.name)
                    .bind(&user.email)
                    .fetch_one(&mut *tx)
                    .await?
            }
            None => {
                tracing::debug!(sql = %INSERT_GENERATED, "query (tx)");
                sqlx::query_as::<_, UserRecord>(INSERT_GENERATED)
                    .bind(&user.name)
                    .bind(&user.email)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };
        tx.commit().await?;
        Ok(row)
    }

    async fn update(&self, id: &UserId, changes: UserChanges) -> Result<Option<UserRecord>, StoreError> {
        tracing::debug!(sql = %UPDATE_BY_ID, id = %id, "query (tx)");
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, UserRecord>(UPDATE_BY_ID)
            .bind(id)
            .bind(&changes.name)
            .bind(&changes.email)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, StoreError> {
        tracing::debug!(sql = %DELETE_BY_ID, id = %id, "query (tx)");
        let mut tx = self.pool.begin().await?;
        let deleted = sqlx::query_scalar::<_, UserId>(DELETE_BY_ID)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(deleted.is_some())
    }
}
