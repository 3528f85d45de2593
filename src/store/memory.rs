//! In-memory user store with the same constraints as the users table.

use crate::error::{StoreError, UniqueField};
use crate::model::{NewUser, UserChanges, UserId, UserRecord};
use crate::store::UserStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe map keyed by id. Enforces unique id and unique name like the PostgreSQL schema.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<BTreeMap<UserId, UserRecord>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<UserId, UserRecord>>, StoreError> {
        self.users
            .read()
            .map_err(|_| StoreError::Unavailable("user map lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<UserId, UserRecord>>, StoreError> {
        self.users
            .write()
            .map_err(|_| StoreError::Unavailable("user map lock poisoned".into()))
    }
}

fn name_taken(users: &BTreeMap<UserId, UserRecord>, name: &str, except: Option<&UserId>) -> bool {
    users
        .values()
        .any(|u| u.name == name && Some(&u.id) != except)
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.read().map(|_| ())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.read()?.values().find(|u| u.name == name).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let mut users = self.write()?;
        let id = match user.id {
            Some(id) => id,
            None => UserId::parse(&uuid::Uuid::new_v4().to_string())
                .ok_or_else(|| StoreError::Unavailable("generated an empty id".into()))?,
        };
        if users.contains_key(&id) {
            return Err(StoreError::UniqueViolation {
                field: UniqueField::Id,
            });
        }
        if name_taken(&users, &user.name, None) {
            return Err(StoreError::UniqueViolation {
                field: UniqueField::Name,
            });
        }
        let record = UserRecord {
            id: id.clone(),
            name: user.name,
            email: user.email,
        };
        users.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: &UserId, changes: UserChanges) -> Result<Option<UserRecord>, StoreError> {
        let mut users = self.write()?;
        if !users.contains_key(id) {
            return Ok(None);
        }
        if name_taken(&users, &changes.name, Some(id)) {
            return Err(StoreError::UniqueViolation {
                field: UniqueField::Name,
            });
        }
        Ok(users.get_mut(id).map(|record| {
            record.name = changes.name;
            record.email = changes.email;
            record.clone()
        }))
    }

    async fn delete(&self, id: &UserId) -> Result<bool, StoreError> {
        Ok(self.write()?.remove(id).is_some())
    }
}
