//! Request and response shapes for the users API.

use crate::error::AppError;
use crate::model::{IdScheme, UserId, UserRecord};
use crate::schema::validation::{normalize_field, Validate, EMAIL_RULE, NAME_RULE, UID_RULE};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Body of `POST /users`. `uid` is only honored under the external id scheme.
#[derive(Clone, Debug, Deserialize)]
pub struct UserCreate {
    #[serde(default)]
    pub uid: Option<String>,
    pub name: String,
    pub email: String,
}

/// Body of `PUT /users/{id}`.
#[derive(Clone, Debug, Deserialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
}

impl Validate for UserCreate {
    fn validated(self) -> Result<Self, AppError> {
        let uid = match self.uid {
            Some(uid) => Some(normalize_field("uid", uid, &UID_RULE)?),
            None => None,
        };
        Ok(UserCreate {
            uid,
            name: normalize_field("name", self.name, &NAME_RULE)?,
            email: normalize_field("email", self.email, &EMAIL_RULE)?,
        })
    }
}

impl Validate for UserUpdate {
    fn validated(self) -> Result<Self, AppError> {
        Ok(UserUpdate {
            name: normalize_field("name", self.name, &NAME_RULE)?,
            email: normalize_field("email", self.email, &EMAIL_RULE)?,
        })
    }
}

/// Response shape. Serializes the identifier under `id` or `uid` depending on the scheme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    id_key: &'static str,
}

impl UserResponse {
    pub fn from_record(record: UserRecord, scheme: IdScheme) -> Self {
        UserResponse {
            id: record.id,
            name: record.name,
            email: record.email,
            id_key: scheme.response_key(),
        }
    }
}

impl Serialize for UserResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("UserResponse", 3)?;
        s.serialize_field(self.id_key, &self.id)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("email", &self.email)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> UserRecord {
        UserRecord {
            id: UserId::parse("42").unwrap(),
            name: "TestUser".into(),
            email: "TestUser@example.com".into(),
        }
    }

    #[test]
    fn response_uses_id_key_for_generated_scheme() {
        let body = serde_json::to_value(UserResponse::from_record(record(), IdScheme::Generated)).unwrap();
        assert_eq!(
            body,
            json!({"id": "42", "name": "TestUser", "email": "TestUser@example.com"})
        );
    }

    #[test]
    fn response_uses_uid_key_for_external_scheme() {
        let body = serde_json::to_value(UserResponse::from_record(record(), IdScheme::External)).unwrap();
        assert_eq!(body["uid"], "42");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn create_body_uid_is_optional() {
        let body: UserCreate =
            serde_json::from_value(json!({"name": "TestUser", "email": "TestUser@example.com"})).unwrap();
        assert!(body.uid.is_none());
    }

    #[test]
    fn create_is_normalized() {
        let body = UserCreate {
            uid: Some(" firebase-123 ".into()),
            name: " TestUser ".into(),
            email: "TestUser@example.com ".into(),
        }
        .validated()
        .unwrap();
        assert_eq!(body.uid.as_deref(), Some("firebase-123"));
        assert_eq!(body.name, "TestUser");
        assert_eq!(body.email, "TestUser@example.com");
    }

    #[test]
    fn update_rejects_bad_email() {
        let err = UserUpdate {
            name: "TestUser".into(),
            email: "not-an-email".into(),
        }
        .validated()
        .unwrap_err();
        assert_eq!(err.to_string(), "email must be a valid email");
    }
}
