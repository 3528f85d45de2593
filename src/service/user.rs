//! User operations over a [`UserStore`].

use crate::config::UpdateNamePolicy;
use crate::error::{AppError, StoreError, UniqueField};
use crate::model::{IdScheme, NewUser, UserChanges, UserId};
use crate::schema::{UserCreate, UserResponse, UserUpdate};
use crate::store::UserStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    scheme: IdScheme,
    update_policy: UpdateNamePolicy,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, scheme: IdScheme, update_policy: UpdateNamePolicy) -> Self {
        UserService {
            store,
            scheme,
            update_policy,
        }
    }

    pub fn scheme(&self) -> IdScheme {
        self.scheme
    }

    /// Absence is `Ok(None)`.
    pub async fn get(&self, id: &UserId) -> Result<Option<UserResponse>, AppError> {
        let record = self.store.find_by_id(id).await?;
        Ok(record.map(|r| UserResponse::from_record(r, self.scheme)))
    }

    /// Fails with [`AppError::DuplicateName`] when the name is taken, whether the pre-check
    /// catches it or the storage constraint does at insert time.
    pub async fn create(&self, input: UserCreate) -> Result<UserResponse, AppError> {
        let id = self.resolve_id(input.uid)?;
        if self.store.find_by_name(&input.name).await?.is_some() {
            tracing::warn!(name = %input.name, "create rejected: name taken");
            return Err(AppError::DuplicateName);
        }
        let record = self
            .store
            .insert(NewUser {
                id,
                name: input.name,
                email: input.email,
            })
            .await
            .map_err(|e| match e {
                StoreError::UniqueViolation {
                    field: UniqueField::Name,
                } => {
                    tracing::warn!("create rejected: name taken at commit");
                    AppError::DuplicateName
                }
                StoreError::UniqueViolation {
                    field: UniqueField::Id,
                } => AppError::DuplicateId,
                other => AppError::Store(other),
            })?;
        tracing::info!(id = %record.id, "user created");
        Ok(UserResponse::from_record(record, self.scheme))
    }

    /// Overwrites name and email; the id is immutable. Name collisions are handled per
    /// [`UpdateNamePolicy`].
    pub async fn update(&self, id: &UserId, input: UserUpdate) -> Result<Option<UserResponse>, AppError> {
        if self.update_policy == UpdateNamePolicy::Enforce {
            if let Some(holder) = self.store.find_by_name(&input.name).await? {
                if &holder.id != id && self.store.find_by_id(id).await?.is_some() {
                    tracing::warn!(id = %id, name = %input.name, "update rejected: name taken");
                    return Err(AppError::DuplicateName);
                }
            }
        }
        let changes = UserChanges {
            name: input.name,
            email: input.email,
        };
        let record = match self.store.update(id, changes).await {
            Ok(record) => record,
            Err(StoreError::UniqueViolation {
                field: UniqueField::Name,
            }) if self.update_policy == UpdateNamePolicy::Enforce => {
                return Err(AppError::DuplicateName);
            }
            Err(e) => return Err(e.into()),
        };
        if let Some(r) = &record {
            tracing::info!(id = %r.id, "user updated");
        }
        Ok(record.map(|r| UserResponse::from_record(r, self.scheme)))
    }

    /// `Ok(false)` when nothing was deleted.
    pub async fn delete(&self, id: &UserId) -> Result<bool, AppError> {
        let deleted = self.store.delete(id).await?;
        if deleted {
            tracing::info!(id = %id, "user deleted");
        }
        Ok(deleted)
    }

    /// Readiness check passthrough.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await?;
        Ok(())
    }

    fn resolve_id(&self, uid: Option<String>) -> Result<Option<UserId>, AppError> {
        match self.scheme {
            IdScheme::Generated => {
                if uid.is_some() {
                    tracing::debug!("ignoring client-supplied uid under generated id scheme");
                }
                Ok(None)
            }
            IdScheme::External => uid
                .as_deref()
                .and_then(UserId::parse)
                .map(Some)
                .ok_or_else(|| AppError::Validation("uid is required".into())),
        }
    }
}
