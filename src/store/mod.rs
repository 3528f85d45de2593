//! Storage seam for users: a PostgreSQL implementation and an in-memory one.

mod memory;
mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

use crate::config::{Settings, StorageKind};
use crate::error::{AppError, StoreError};
use crate::migration::{ensure_database_exists, ensure_tables};
use crate::model::{NewUser, UserChanges, UserId, UserRecord};
use async_trait::async_trait;
use std::sync::Arc;

/// Transactional CRUD over user records. Every write is committed before the call returns.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Cheap liveness check used by the readiness route.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, StoreError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Insert a record, generating the id when `user.id` is `None`.
    /// Fails with [`StoreError::UniqueViolation`] when the id or name is taken.
    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError>;

    /// Overwrite name and email. `Ok(None)` when no record has `id`.
    async fn update(&self, id: &UserId, changes: UserChanges) -> Result<Option<UserRecord>, StoreError>;

    /// Hard delete. `Ok(false)` when no record has `id`.
    async fn delete(&self, id: &UserId) -> Result<bool, StoreError>;
}

/// Open the store selected by `settings`, creating the database and tables for PostgreSQL.
pub async fn open_store(settings: &Settings) -> Result<Arc<dyn UserStore>, AppError> {
    match settings.storage {
        StorageKind::Memory => {
            tracing::warn!("using in-memory user store; data is lost on restart");
            Ok(Arc::new(MemoryUserStore::new()))
        }
        StorageKind::Postgres => {
            ensure_database_exists(&settings.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .connect(&settings.database_url)
                .await?;
            ensure_tables(&pool).await?;
            Ok(Arc::new(PgUserStore::new(pool)))
        }
    }
}
